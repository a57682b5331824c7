//! One-shot measurements of the toy model.
//!
//! Two variants exist: [`measure`] picks one of the six labeled states
//! uniformly, while [`measure_with_operator`] collapses Ô|ψ⟩ to a bit and
//! maps that bit onto a randomly chosen group.
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{CoreError, CoreResult};
use crate::core::labeling::{complement, identify_group, QUBITS};
use crate::core::operator::{apply_operator, collapse, Operator, StateVector};
use crate::debug_log;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Uniform,
    #[default]
    Operator,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MeasurementResult {
    pub measured: u8,
    pub hidden: u8,
    pub qubit: &'static str,
    /// True when `measured` is the group's high (`q1`) member.
    pub value: bool,
    pub pair: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prob_0: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prob_1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measured_binary: Option<u8>,
}

impl MeasurementResult {
    /// Label `state` with its complement and group. Fails for states outside the table.
    pub fn labeled(state: u8) -> CoreResult<Self> {
        let hidden = complement(state).ok_or(CoreError::UnknownState(state))?;
        let group = identify_group(state).ok_or(CoreError::UnknownState(state))?;
        Ok(Self {
            measured: state,
            hidden,
            qubit: group.id(),
            value: group.is_high,
            pair: group.name(),
            prob_0: None,
            prob_1: None,
            measured_binary: None,
        })
    }

    pub fn is_operator_driven(&self) -> bool {
        self.measured_binary.is_some()
    }
}

/// Uniform variant: any of the six states with probability 1/6.
pub fn measure<R: Rng + ?Sized>(rng: &mut R) -> CoreResult<MeasurementResult> {
    let state: u8 = rng.gen_range(1..=6);
    debug_log!("uniform draw: state={state}");
    MeasurementResult::labeled(state)
}

/// Operator variant.
///
/// The group is drawn independently of the collapsed bit, so Ô only decides
/// which member of the group is observed. The group is then re-derived from
/// the resulting state.
pub fn measure_with_operator<R: Rng + ?Sized>(
    rng: &mut R,
    op: &Operator,
) -> CoreResult<MeasurementResult> {
    let psi = StateVector::superposition();
    let applied = apply_operator(&psi, op);
    let bit = collapse(rng, applied.prob_0, applied.prob_1)?;

    let qubit = &QUBITS[rng.gen_range(0..QUBITS.len())];
    let state = qubit.state_for(bit);
    debug_log!(
        "P(0)={:.6} P(1)={:.6} bit={bit} group={} state={state}",
        applied.prob_0,
        applied.prob_1,
        qubit.id
    );

    let mut result = MeasurementResult::labeled(state)?;
    result.prob_0 = Some(applied.prob_0);
    result.prob_1 = Some(applied.prob_1);
    result.measured_binary = Some(bit);
    Ok(result)
}

pub fn measure_in_mode<R: Rng + ?Sized>(
    mode: Mode,
    rng: &mut R,
    op: &Operator,
) -> CoreResult<MeasurementResult> {
    match mode {
        Mode::Uniform => measure(rng),
        Mode::Operator => measure_with_operator(rng, op),
    }
}
