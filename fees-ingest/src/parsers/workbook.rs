//! Spreadsheet workbooks (xlsx, xls, xlsb, ods) via calamine
//!
//! Rows are padded so that raw-table coordinates match sheet coordinates even
//! when the used range does not start at A1.

use std::path::Path;

use calamine::{Data, Reader};
use tracing::debug;

use crate::clean::excel_serial_to_datetime;
use crate::error::{IngestError, Result};
use crate::types::{Cell, RawTable};

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::String(s) => Cell::from(s.as_str()),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => excel_serial_to_datetime(dt.as_f64())
            .map(Cell::DateTime)
            .unwrap_or(Cell::Number(dt.as_f64())),
        Data::DateTimeIso(s) => Cell::Text(s.clone()),
        _ => Cell::Empty,
    }
}

/// Read one worksheet (the first one when `sheet` is `None`).
pub fn read_workbook(path: impl AsRef<Path>, sheet: Option<&str>) -> Result<RawTable> {
    let mut workbook = calamine::open_workbook_auto(path.as_ref())?;

    let names = workbook.sheet_names();
    let name = match sheet {
        Some(wanted) => names
            .iter()
            .find(|n| n.as_str() == wanted)
            .cloned()
            .ok_or_else(|| IngestError::MissingSheet(wanted.to_string()))?,
        None => names.first().cloned().ok_or(IngestError::EmptyWorkbook)?,
    };

    let range = workbook.worksheet_range(&name)?;
    let (row_offset, col_offset) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); row_offset];
    for row in range.rows() {
        let mut cells = vec![Cell::Empty; col_offset];
        cells.extend(row.iter().map(to_cell));
        rows.push(cells);
    }

    debug!(sheet = %name, rows = rows.len(), "read worksheet");
    Ok(RawTable::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_to_cell() {
        assert_eq!(to_cell(&Data::Float(12.5)), Cell::Number(12.5));
        assert_eq!(to_cell(&Data::Int(7)), Cell::Number(7.0));
        assert_eq!(to_cell(&Data::String("CASH".into())), Cell::Text("CASH".into()));
        assert_eq!(to_cell(&Data::String(String::new())), Cell::Empty);
        assert_eq!(to_cell(&Data::Empty), Cell::Empty);
    }

    fn fixture() -> std::path::PathBuf {
        std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .unwrap()
            .join("fees_sample.xlsx")
    }

    #[test]
    fn test_first_sheet_keeps_sheet_coordinates() {
        let table = read_workbook(fixture(), None).unwrap();
        assert_eq!(table.len(), 7);
        assert_eq!(
            table.cell(0, 0),
            &Cell::Text("Greenfield Public School - Fee Collection Report".into())
        );
        assert_eq!(table.cell(1, 2), &Cell::Text("Fees Paid Date".into()));

        let jan5 = chrono::NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(table.cell(2, 2), &Cell::DateTime(jan5.and_hms_opt(0, 0, 0).unwrap()));
        assert_eq!(table.cell(3, 2), &Cell::DateTime(jan5.and_hms_opt(12, 0, 0).unwrap()));
        assert_eq!(table.cell(2, 4), &Cell::Number(100.0));
        assert_eq!(table.cell(5, 2), &Cell::Empty);
    }

    #[test]
    fn test_offset_range_is_padded() {
        let table = read_workbook(fixture(), Some("Offset")).unwrap();
        assert_eq!(table.len(), 5);
        assert!(table.rows[0].is_empty() && table.rows[1].is_empty());
        assert_eq!(table.cell(2, 2), &Cell::Text("Term 2 Collections".into()));
        assert_eq!(table.cell(3, 0), &Cell::Empty);
        assert_eq!(table.cell(3, 4), &Cell::Text("Paid Amount".into()));
        assert_eq!(table.cell(4, 4), &Cell::Number(40.0));
    }

    #[test]
    fn test_unknown_sheet_is_error() {
        let err = read_workbook(fixture(), Some("Summary")).unwrap_err();
        assert!(matches!(err, IngestError::MissingSheet(ref name) if name == "Summary"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_workbook(dir.path().join("absent.xlsx"), None);
        assert!(err.is_err());
    }
}
