use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::measurement::Mode;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeKind {
    /// Uniform pick over the six labeled states
    #[clap(alias = "random")]
    Uniform,
    /// Collapse Ô|ψ⟩ and map the bit onto a group
    #[clap(alias = "op")]
    Operator,
}

impl From<ModeKind> for Mode {
    fn from(k: ModeKind) -> Self {
        match k {
            ModeKind::Uniform => Mode::Uniform,
            ModeKind::Operator => Mode::Operator,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "quantum_toy",
    about = "Quantum toy model — measure six labeled states through the Ô operator",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct ToyCli {
    /// Global: measurement mode (default from config, else operator)
    #[arg(long = "mode", value_enum, global = true)]
    pub mode: Option<ModeKind>,

    /// Global: seed the random source for reproducible runs
    #[arg(long = "seed", value_name = "N", global = true)]
    pub seed: Option<u64>,

    /// Global: print results as JSON lines
    #[arg(long = "json", action = ArgAction::SetTrue, global = true)]
    pub json: bool,

    /// Global: disable colored output
    #[arg(long = "no-color", action = ArgAction::SetTrue, global = true)]
    pub no_color: bool,

    /// Global: debug logging to stderr (same as QTOY_DEBUG=1)
    #[arg(long = "debug", action = ArgAction::SetTrue, global = true)]
    pub debug: bool,

    /// Global: path to config (TOML); default: ~/.quantum_toy/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive loop: ENTER measures, `q` quits (default)
    Repl,

    /// Take one or more measurements and print them
    Measure {
        #[arg(short = 'n', long = "count", value_name = "N", default_value_t = 1)]
        count: u64,
    },

    /// Measure N times and compare the histogram with a uniform 1/6 split
    ///
    /// Examples:
    ///   quantum_toy tally -n 6000 --mode uniform
    ///   quantum_toy tally --seed 7 --json
    Tally {
        /// Number of measurements (default from config, else 1000)
        #[arg(short = 'n', long = "count", value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
        count: Option<u64>,
    },

    /// Show the Ô operator's eigenvalues, trace and determinant
    Operator,

    /// Config file helpers
    Config {
        /// Write the default config file
        #[arg(long = "init", action = ArgAction::SetTrue)]
        init: bool,
        /// Overwrite an existing file with --init
        #[arg(long = "force", action = ArgAction::SetTrue)]
        force: bool,
    },
}
