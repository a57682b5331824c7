//! `tally`: histogram of N measurements with a χ² uniformity check.

use anyhow::{bail, Context, Result};

use super::Session;
use crate::core::tally::tally;
use crate::shell::display;

pub fn main(session: &mut Session, count: Option<u64>) -> Result<()> {
    let n = count.unwrap_or(session.tally_count);
    if n == 0 {
        bail!("tally needs at least 1 measurement");
    }
    let t = tally(session.mode, n, &mut session.rng, &session.op)
        .with_context(|| format!("tally of {n} measurements failed"))?;
    if session.json {
        println!("{}", serde_json::to_string(&t)?);
    } else {
        print!("{}", display::tally(&t));
    }
    Ok(())
}
