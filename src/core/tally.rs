//! Repeated measurements with a histogram and a chi-square fit against the
//! uniform distribution over the six states.
use rand::Rng;
use serde::Serialize;

use crate::core::error::CoreResult;
use crate::core::labeling::BRIDGE;
use crate::core::measurement::{measure_in_mode, Mode};
use crate::core::operator::Operator;

/// χ² critical value for 5 degrees of freedom at α = 0.001.
pub const CHI_SQUARE_CRITICAL_DF5: f64 = 20.515;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Tally {
    pub mode: Mode,
    pub total: u64,
    /// Count per state; index `s - 1` holds state `s`.
    pub states: [u64; 6],
    /// Count per collapsed bit. Stays zero in uniform mode.
    pub bits: [u64; 2],
}

impl Tally {
    pub fn new(mode: Mode) -> Self {
        Self { mode, ..Self::default() }
    }

    pub fn count(&self, state: u8) -> Option<u64> {
        let idx = usize::from(state).checked_sub(1)?;
        self.states.get(idx).copied()
    }

    pub fn frequency(&self, state: u8) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        self.count(state).map(|c| c as f64 / self.total as f64)
    }

    /// Pearson χ² of the state histogram against n/6 per state.
    pub fn chi_square(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let expected = self.total as f64 / BRIDGE.len() as f64;
        self.states
            .iter()
            .map(|&obs| {
                let d = obs as f64 - expected;
                d * d / expected
            })
            .sum()
    }

    /// False for an empty tally: no sample, no verdict.
    pub fn looks_uniform(&self) -> bool {
        self.total > 0 && self.chi_square() < CHI_SQUARE_CRITICAL_DF5
    }
}

pub fn tally<R: Rng + ?Sized>(mode: Mode, n: u64, rng: &mut R, op: &Operator) -> CoreResult<Tally> {
    let mut t = Tally::new(mode);
    for _ in 0..n {
        let r = measure_in_mode(mode, rng, op)?;
        t.states[usize::from(r.measured - 1)] += 1;
        if let Some(bit) = r.measured_binary {
            t.bits[usize::from(bit)] += 1;
        }
        t.total += 1;
    }
    Ok(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tally_has_no_frequencies() {
        let t = Tally::new(Mode::Uniform);
        assert_eq!(t.frequency(1), None);
        assert_eq!(t.chi_square(), 0.0);
        assert!(!t.looks_uniform());
    }

    #[test]
    fn count_ignores_out_of_range() {
        let t = Tally { total: 6, states: [1; 6], ..Tally::new(Mode::Uniform) };
        assert_eq!(t.count(0), None);
        assert_eq!(t.count(7), None);
        assert_eq!(t.count(6), Some(1));
        assert_eq!(t.chi_square(), 0.0);
    }

    #[test]
    fn skewed_histogram_is_not_uniform() {
        let t = Tally { total: 600, states: [600, 0, 0, 0, 0, 0], ..Tally::new(Mode::Uniform) };
        assert!(!t.looks_uniform());
    }
}
