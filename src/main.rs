//! quantum_toy main — interactive loop by default, one-shot subcommands otherwise.
use clap::Parser; // trait import enables ToyCli::parse()
use std::io::IsTerminal;

use quantum_toy::cli::{Command, ToyCli};
use quantum_toy::commands::{self, Session};
use quantum_toy::config::{resolve_config_path, ToyConfig};
use quantum_toy::core::debug;
use quantum_toy::{debug_log, shell};

fn set_console_title() {
    use crossterm::{execute, terminal::SetTitle};
    if std::io::stdout().is_terminal() {
        let _ = execute!(std::io::stdout(), SetTitle("Quantum Toy"));
    }
}

fn main() -> anyhow::Result<()> {
    let args = ToyCli::parse();

    if args.debug {
        debug::enable();
    }

    let cfg_path = resolve_config_path(&args.config);

    // Dispatch `config` before loading so `--init --force` can replace a broken file.
    if let Some(Command::Config { init, force }) = args.cmd {
        return commands::config::main(cfg_path.as_deref(), init, force);
    }

    let cfg = ToyConfig::load_or_default(cfg_path.as_deref())?;
    debug_log!("config: {cfg:?}");
    if args.no_color || !cfg.color {
        colored::control::set_override(false);
    }

    let mut session = Session::from_config(&cfg, args.mode.map(Into::into), args.seed, args.json);

    match args.cmd {
        None | Some(Command::Repl) => {
            set_console_title();
            shell::start(&mut session)
        }
        Some(Command::Measure { count }) => commands::measure::main(&mut session, count),
        Some(Command::Tally { count }) => commands::tally::main(&mut session, count),
        Some(Command::Operator) => commands::operator::main(&session),
        Some(Command::Config { .. }) => Ok(()),
    }
}
