//! Quantum toy model: six labeled states in three complementary pairs,
//! measured either uniformly or through the golden-ratio operator Ô.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod shell;
