//! `measure`: take N measurements and print each one.

use anyhow::{Context, Result};
use std::io::Write;

use super::Session;
use crate::shell::display;

pub fn main(session: &mut Session, count: u64) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for i in 0..count {
        let r = session
            .measure()
            .with_context(|| format!("measurement {} of {count} failed", i + 1))?;
        if session.json {
            writeln!(out, "{}", serde_json::to_string(&r)?)?;
        } else {
            write!(out, "{}", display::measurement(&r))?;
        }
    }
    out.flush()?;
    Ok(())
}
