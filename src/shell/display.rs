//! Console rendering for measurements, the operator, and tallies.
//!
//! Everything returns a `String` so the shell and the one-shot commands share
//! the same text. Colors go through `colored` and vanish under `--no-color`.
use colored::Colorize;
use std::fmt::Write as _;

use crate::core::labeling::{state_name, BRIDGE, PAIR_SUM};
use crate::core::measurement::{MeasurementResult, Mode};
use crate::core::operator::OperatorProperties;
use crate::core::tally::{Tally, CHI_SQUARE_CRITICAL_DF5};

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn name(state: u8) -> &'static str {
    state_name(state).unwrap_or("?")
}

pub fn banner() -> String {
    let mut s = String::new();
    let _ = writeln!(s, "\n{}", rule().truecolor(225, 0, 180));
    let _ = writeln!(s, "{}", "  QUANTUM TOY MODEL - Interactive".truecolor(255, 240, 0).bold());
    let _ = writeln!(s, "{}", rule().truecolor(225, 0, 180));
    let _ = writeln!(s, "\nInitial state: 3 qubits in superposition |ψ⟩");
    let sum: u32 = BRIDGE.iter().map(|&b| u32::from(b)).sum();
    let terms: Vec<String> = BRIDGE.iter().map(|b| b.to_string()).collect();
    let _ = writeln!(s, "Sum of all states: {} = {}", terms.join("+"), sum);
    let _ = writeln!(s, "Operator Ô: cos(πn) * cos(πφn)");
    s
}

pub fn measurement(r: &MeasurementResult) -> String {
    let title = if r.is_operator_driven() {
        "  QUANTUM MEASUREMENT (Operator Ô)"
    } else {
        "  QUANTUM MEASUREMENT"
    };

    let mut s = String::new();
    let _ = writeln!(s, "\n{}", rule().truecolor(130, 0, 200));
    let _ = writeln!(s, "{}", title.bold());
    let _ = writeln!(s, "{}\n", rule().truecolor(130, 0, 200));

    if let (Some(p0), Some(p1), Some(bit)) = (r.prob_0, r.prob_1, r.measured_binary) {
        let _ = writeln!(s, "Operator Ô applied to superposition |ψ⟩");
        let _ = writeln!(s, "  P(|0⟩) = {p0:.4}");
        let _ = writeln!(s, "  P(|1⟩) = {p1:.4}");
        let _ = writeln!(s, "  → Collapsed to: {}\n", format!("|{bit}⟩").truecolor(255, 240, 0));
    }

    let _ = writeln!(s, "Qubit measured: {}", r.qubit);
    let _ = writeln!(
        s,
        "State: {} (value={})",
        name(r.measured).bold(),
        u8::from(r.value)
    );
    let _ = writeln!(s, "Hidden state: {}", name(r.hidden).dimmed());
    let _ = writeln!(s, "H = {} + {} = {}", r.measured, r.hidden, PAIR_SUM);
    s
}

pub fn operator(p: &OperatorProperties) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "{}", "Operator Ô - Properties:".bold());
    let _ = writeln!(s, "  λ_0 = cos(0) * cos(0) = {:.4}", p.lambda_0);
    let _ = writeln!(s, "  λ_1 = cos(π) * cos(πφ) = {:.4}", p.lambda_1);
    let _ = writeln!(s, "  Trace = {:.4}", p.trace);
    let _ = writeln!(s, "  Determinant = {:.4}", p.determinant);
    let _ = writeln!(s, "  Eigenvalues = [{:.4}, {:.4}]", p.eigenvalues[0], p.eigenvalues[1]);
    let _ = writeln!(s, "  φ = {:.6}", p.phi);
    let _ = writeln!(s, "  {}", p.description);
    s
}

pub fn tally(t: &Tally) -> String {
    let mode = match t.mode {
        Mode::Uniform => "uniform",
        Mode::Operator => "operator",
    };
    let mut s = String::new();
    let _ = writeln!(s, "{}", format!("Tally ({mode} mode, {} measurements)", t.total).bold());
    for &state in &BRIDGE {
        let count = t.count(state).unwrap_or(0);
        let freq = t.frequency(state).unwrap_or(0.0);
        let _ = writeln!(s, "  {} ({state})  {count:>8}  {freq:.4}", name(state));
    }
    if t.mode == Mode::Operator {
        let _ = writeln!(s, "  |0⟩: {}  |1⟩: {}", t.bits[0], t.bits[1]);
    }
    let verdict = if t.looks_uniform() {
        "yes".green()
    } else {
        "no".red()
    };
    let _ = writeln!(
        s,
        "  χ² = {:.3} (uniform below {CHI_SQUARE_CRITICAL_DF5}: {verdict})",
        t.chi_square()
    );
    s
}
