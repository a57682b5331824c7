use colored::Colorize;
use std::io::{self, BufRead, Write};

use crate::commands::Session;

pub mod display;

pub const PROMPT: &str = "Press ENTER to measure (or 'q' to quit): ";

pub fn start(session: &mut Session) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(session, stdin.lock(), stdout.lock())
}

/// Read lines until `q` (any case) or EOF; every other line, empty or not, measures once.
///
/// In JSON mode stdout carries only result lines: no banner, no prompt.
pub fn run_loop<R: BufRead, W: Write>(session: &mut Session, mut input: R, mut out: W) -> anyhow::Result<()> {
    if !session.json {
        writeln!(out, "{}", display::banner())?;
    }

    loop {
        if !session.json {
            write!(out, "{}", PROMPT.truecolor(255, 240, 0))?;
            out.flush()?;
        }

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            if !session.json {
                writeln!(out)?;
            }
            break;
        }
        if line.trim_end_matches(&['\r', '\n'][..]).eq_ignore_ascii_case("q") {
            break;
        }

        match session.measure() {
            Ok(r) if session.json => writeln!(out, "{}", serde_json::to_string(&r)?)?,
            Ok(r) => writeln!(out, "{}", display::measurement(&r))?,
            Err(e) => eprintln!("{} {}", "err:".red().bold(), e),
        }
    }
    Ok(())
}
