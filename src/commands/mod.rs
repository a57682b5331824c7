//! One module per subcommand; each exposes `main`.
//!
//! [`Session`] carries what every command needs: the resolved settings, the
//! operator (built once), and the seeded or entropy-backed random source.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::ToyConfig;
use crate::core::error::CoreResult;
use crate::core::measurement::{measure_in_mode, MeasurementResult, Mode};
use crate::core::operator::{build_operator, Operator};
use crate::debug_log;

pub mod config;
pub mod measure;
pub mod operator;
pub mod tally;

pub struct Session {
    pub mode: Mode,
    pub json: bool,
    pub tally_count: u64,
    pub op: Operator,
    pub rng: StdRng,
}

impl Session {
    pub fn new(mode: Mode, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => {
                debug_log!("seeding rng with {s}");
                StdRng::seed_from_u64(s)
            }
            None => StdRng::from_entropy(),
        };
        Self {
            mode,
            json: false,
            tally_count: ToyConfig::default().tally_count,
            op: build_operator(),
            rng,
        }
    }

    /// Settings from `cfg`, with CLI values (when given) taking priority.
    pub fn from_config(cfg: &ToyConfig, mode: Option<Mode>, seed: Option<u64>, json: bool) -> Self {
        let mut s = Self::new(mode.unwrap_or(cfg.mode), seed.or(cfg.seed));
        s.json = json || cfg.json;
        s.tally_count = cfg.tally_count;
        s
    }

    pub fn measure(&mut self) -> CoreResult<MeasurementResult> {
        measure_in_mode(self.mode, &mut self.rng, &self.op)
    }
}
