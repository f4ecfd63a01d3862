//! Sheet readers. Each produces a `RawTable` without interpreting any cell.

pub mod csv_sheet;
pub mod workbook;

use std::path::Path;

use crate::error::{IngestError, Result};
use crate::types::RawTable;

pub use csv_sheet::{read_csv, read_csv_path};
pub use workbook::read_workbook;

/// Pick a reader from the file extension.
pub fn read_table(path: impl AsRef<Path>, sheet: Option<&str>) -> Result<RawTable> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" | "txt" => read_csv_path(path),
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => read_workbook(path, sheet),
        other => Err(IngestError::UnsupportedFormat(if other.is_empty() {
            path.display().to_string()
        } else {
            format!(".{other}")
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_rejects_unknown_extension() {
        let err = read_table("fees.pdf", None).unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedFormat(ref e) if e == ".pdf"));
    }

    #[test]
    fn test_dispatch_csv_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("FEES.CSV");
        std::fs::write(&path, "a\nb\n").unwrap();
        assert_eq!(read_table(&path, None).unwrap().len(), 2);
    }
}
