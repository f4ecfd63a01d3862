use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub fn fees_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".fees"))
}

pub fn ensure_fees_home() -> Result<PathBuf> {
    let dir = fees_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
