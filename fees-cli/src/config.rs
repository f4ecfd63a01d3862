use anyhow::{Context, Result};
use fees_core::WeekYear;
use fees_ingest::IngestOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{ensure_fees_home, fees_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ingest: IngestOptions,
    pub report: ReportSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    /// "calendar" files weekly buckets under the date's calendar year,
    /// "iso" under its ISO week-year
    pub week_year: WeekYear,
    pub currency_symbol: String,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            week_year: WeekYear::Calendar,
            currency_symbol: "₹".to_string(),
        }
    }
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(fees_home()?.join("config.toml"))
}

/// Load from `path`, or from the default location. A missing file yields defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let p = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    if !p.exists() {
        tracing::debug!(path = %p.display(), "no config file; using defaults");
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(cfg: &Config, path: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn init_config(path: Option<&Path>) -> Result<()> {
    let p = match path {
        Some(p) => p.to_path_buf(),
        None => ensure_fees_home()?.join("config.toml"),
    };
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let cfg = Config::default();
    save_config(&cfg, &p)?;
    println!("Wrote {}", p.display());
    println!("{}", header_row_note(cfg.ingest.header_row));
    Ok(())
}

/// Where column names are read from, and what to change when a file's names
/// sit lower.
pub fn header_row_note(header_row: usize) -> String {
    format!(
        "Column names are read from sheet row {} ([ingest] header_row = {header_row}). \
         If loading fails with \"expected columns not found\", set header_row to the \
         zero-based row holding them, e.g. header_row = {} for names on sheet row {}.",
        header_row + 1,
        header_row + 1,
        header_row + 2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.ingest.header_row, 1);
        assert_eq!(cfg.report.currency_symbol, "₹");
    }

    #[test]
    fn test_partial_file_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(
            &p,
            r#"
[ingest]
header_row = 2
payment_details = "Mode of Payment"
sheet = "Collections"

[report]
week_year = "iso"
"#,
        )
        .unwrap();

        let cfg = load_config(Some(&p)).unwrap();
        assert_eq!(cfg.ingest.header_row, 2);
        assert_eq!(cfg.ingest.columns.payment_details, "Mode of Payment");
        assert_eq!(cfg.ingest.columns.paid_amount, "Paid Amount");
        assert_eq!(cfg.ingest.sheet.as_deref(), Some("Collections"));
        assert!(!cfg.ingest.date_formats.is_empty());
        assert_eq!(cfg.report.week_year, WeekYear::Iso);
        assert_eq!(cfg.report.currency_symbol, "₹");
    }

    #[test]
    fn test_init_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        init_config(Some(&p)).unwrap();
        assert_eq!(load_config(Some(&p)).unwrap(), Config::default());
    }

    #[test]
    fn test_header_row_note_names_the_fix() {
        let note = header_row_note(1);
        assert!(note.contains("sheet row 2"));
        assert!(note.contains("header_row = 2 for names on sheet row 3"));
    }

    #[test]
    fn test_invalid_week_year_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "[report]\nweek_year = \"fiscal\"\n").unwrap();
        assert!(load_config(Some(&p)).is_err());
    }
}
