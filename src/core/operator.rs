//! The Ô operator: a fixed 2×2 diagonal matrix with eigenvalues
//! λ_n = cos(πn) · cos(πφn), plus its application to a 2-level state and the
//! weighted collapse that turns the resulting probabilities into a bit.
use nalgebra::{Matrix2, Vector2};
use num_complex::Complex64 as C64;
use rand::distributions::{Bernoulli, Distribution};
use rand::Rng;
use serde::Serialize;
use std::f64::consts::PI;

use crate::core::error::{CoreError, CoreResult};
use crate::debug_log;

/// Golden ratio φ = (1 + √5) / 2.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Added to the normalization denominator so an all-zero result never divides by zero.
pub const NORM_EPS: f64 = 1e-10;

/// How far `prob_0 + prob_1` may drift from 1 before `collapse` refuses the pair.
pub const SUM_TOLERANCE: f64 = 1e-9;

pub const DESCRIPTION: &str = "Ô_n = cos(πn) * cos(πφn)";

#[inline]
fn c(r: f64, i: f64) -> C64 {
    C64::new(r, i)
}

/// λ_n = cos(πn) · cos(πφn): a parity term times a quasi-periodic term.
pub fn eigenvalue(n: u32) -> f64 {
    let n = f64::from(n);
    let parity = (PI * n).cos();
    let quasi = (PI * PHI * n).cos();
    parity * quasi
}

#[derive(Clone, Debug, PartialEq)]
pub struct Operator {
    pub m: Matrix2<C64>,
}

impl Operator {
    pub fn lambda_0(&self) -> f64 {
        self.m[(0, 0)].re
    }

    pub fn lambda_1(&self) -> f64 {
        self.m[(1, 1)].re
    }

    pub fn properties(&self) -> OperatorProperties {
        let diag = self.m.diagonal();
        OperatorProperties {
            lambda_0: self.lambda_0(),
            lambda_1: self.lambda_1(),
            trace: self.m.trace().re,
            determinant: self.m.determinant().re,
            // diagonal operator: the spectrum is the diagonal itself
            eigenvalues: [diag[0].re, diag[1].re],
            phi: PHI,
            description: DESCRIPTION,
        }
    }
}

/// Summary of Ô for display and documentation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OperatorProperties {
    pub lambda_0: f64,
    pub lambda_1: f64,
    pub trace: f64,
    pub determinant: f64,
    pub eigenvalues: [f64; 2],
    pub phi: f64,
    pub description: &'static str,
}

/// Build Ô = diag(λ0, λ1). Pure; build once and share.
pub fn build_operator() -> Operator {
    let l0 = eigenvalue(0);
    let l1 = eigenvalue(1);
    debug_log!("built operator: λ0={l0} λ1={l1}");
    Operator {
        m: Matrix2::new(c(l0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(l1, 0.0)),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    pub data: Vector2<C64>,
}

impl StateVector {
    pub fn new(a0: C64, a1: C64) -> Self {
        Self { data: Vector2::new(a0, a1) }
    }

    /// |ψ⟩ = 1/√2 |0⟩ + 1/√2 |1⟩
    pub fn superposition() -> Self {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        Self::new(c(s, 0.0), c(s, 0.0))
    }
}

/// Raw amplitudes after Ô·ψ and the normalized probability pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Applied {
    pub amp_0: C64,
    pub amp_1: C64,
    pub prob_0: f64,
    pub prob_1: f64,
}

pub fn apply_operator(psi: &StateVector, op: &Operator) -> Applied {
    let out = op.m * psi.data;
    let (amp_0, amp_1) = (out[0], out[1]);

    let p0 = amp_0.norm_sqr();
    let p1 = amp_1.norm_sqr();
    let total = p0 + p1 + NORM_EPS;

    Applied {
        amp_0,
        amp_1,
        prob_0: p0 / total,
        prob_1: p1 / total,
    }
}

/// Draw 0 or 1 with the given probabilities.
///
/// The pair must already be normalized (as `apply_operator` guarantees);
/// anything negative, non-finite, or off by more than [`SUM_TOLERANCE`] is rejected.
pub fn collapse<R: Rng + ?Sized>(rng: &mut R, prob_0: f64, prob_1: f64) -> CoreResult<u8> {
    let valid = prob_0.is_finite()
        && prob_1.is_finite()
        && prob_0 >= 0.0
        && prob_1 >= 0.0
        && (prob_0 + prob_1 - 1.0).abs() <= SUM_TOLERANCE;
    if !valid {
        return Err(CoreError::invalid_probabilities(prob_0, prob_1));
    }

    let coin = Bernoulli::new(prob_1.min(1.0))
        .map_err(|_| CoreError::invalid_probabilities(prob_0, prob_1))?;
    Ok(u8::from(coin.sample(rng)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn phi_matches_closed_form() {
        assert!((PHI - (1.0 + 5f64.sqrt()) / 2.0).abs() < 1e-15);
    }

    #[test]
    fn zero_vector_stays_finite() {
        let op = build_operator();
        let zero = StateVector::new(c(0.0, 0.0), c(0.0, 0.0));
        let applied = apply_operator(&zero, &op);
        assert_eq!(applied.prob_0, 0.0);
        assert_eq!(applied.prob_1, 0.0);
    }

    #[test]
    fn certain_outcomes_are_certain() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            assert_eq!(collapse(&mut rng, 1.0, 0.0).unwrap(), 0);
            assert_eq!(collapse(&mut rng, 0.0, 1.0).unwrap(), 1);
        }
    }

    #[test]
    fn rejects_bad_pairs() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(collapse(&mut rng, 0.7, 0.7).is_err());
        assert!(collapse(&mut rng, -0.2, 1.2).is_err());
        assert!(collapse(&mut rng, f64::NAN, 0.5).is_err());
    }
}
