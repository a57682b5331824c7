//! Core of the toy model: the Ô operator, the labeling table, and the
//! measurements built on top of them.

#[macro_use]
pub mod debug; // gated debug logging (QTOY_DEBUG=1) provides debug_log! macro
pub mod error;
pub mod labeling;
pub mod measurement;
pub mod operator;
pub mod tally;
