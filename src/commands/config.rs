//! `config --init`: write the default config file.

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::config::ToyConfig;
use crate::io::atomic::atomic_write;

pub fn main(path: Option<&Path>, init: bool, force: bool) -> Result<()> {
    let Some(path) = path else {
        bail!("no config path: pass --config FILE (home directory not found)");
    };

    if !init {
        let cfg = ToyConfig::load_or_default(Some(path))?;
        println!("# {}", path.display());
        print!("{}", cfg.to_toml_string()?);
        return Ok(());
    }

    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    // atomic_write creates missing parent directories
    let body = ToyConfig::default().to_toml_string()?;
    atomic_write(path, body.as_bytes())
        .with_context(|| format!("writing {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}
