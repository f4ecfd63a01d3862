//! Promote a raw sheet into cleaned fee records.
//!
//! Cleaning never drops a row. Bad values degrade the field instead:
//! - unparseable date -> `None`
//! - non-numeric amount -> `0.0`
//! - unknown or missing payment details -> `PaymentType::Other`

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use fees_core::{CleanRecord, Dataset, PaymentType};
use tracing::{debug, warn};

use crate::error::SchemaError;
use crate::options::IngestOptions;
use crate::types::{Cell, RawTable};

/// Last serial day Excel can represent (9999-12-31)
const MAX_EXCEL_SERIAL: f64 = 2_958_465.0;

/// Convert an Excel serial day number to a date-time.
/// Excel's epoch is 1899-12-30 once its 1900 leap-year bug is accounted for.
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || !(0.0..=MAX_EXCEL_SERIAL).contains(&serial) {
        return None;
    }
    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let millis = (serial * 86_400_000.0).round() as i64;
    base.checked_add_signed(Duration::milliseconds(millis))
}

/// Parse a cell as a calendar date, ignoring any time of day.
pub fn parse_date(cell: &Cell, formats: &[String]) -> Option<NaiveDate> {
    match cell {
        Cell::Date(d) => Some(*d),
        Cell::DateTime(dt) => Some(dt.date()),
        Cell::Number(n) => excel_serial_to_datetime(*n).map(|dt| dt.date()),
        Cell::Text(s) => parse_date_text(s.trim(), formats),
        Cell::Empty | Cell::Bool(_) => None,
    }
}

fn parse_date_text(s: &str, formats: &[String]) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }
    for fmt in formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

/// Read a cell as a finite amount, or `None` when it is not numeric.
pub fn parse_amount(cell: &Cell) -> Option<f64> {
    let value = match cell {
        Cell::Number(n) => *n,
        Cell::Text(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    value.is_finite().then_some(value)
}

/// Coerce a cell to an amount. Anything non-numeric is exactly 0.
/// Negative values are kept.
pub fn coerce_amount(cell: &Cell) -> f64 {
    parse_amount(cell).unwrap_or(0.0)
}

/// Classify the payment details cell, substituting the missing-value literal
/// before classification.
pub fn classify_details(cell: &Cell) -> PaymentType {
    let details = cell
        .as_text()
        .unwrap_or_else(|| PaymentType::MISSING_DETAILS.to_string());
    PaymentType::classify(Some(&details))
}

/// Clean every data row of `table`.
///
/// Fails only when the header row cannot be promoted; per-row problems never
/// abort the batch, and each data row yields exactly one record.
pub fn clean(table: &RawTable, opts: &IngestOptions) -> Result<Dataset, SchemaError> {
    let map = opts.schema().resolve(table)?;

    let mut undated = 0usize;
    let mut coerced = 0usize;
    let mut records = Vec::with_capacity(table.len().saturating_sub(map.data_start));

    for row_idx in map.data_start..table.len() {
        let date_cell = table.cell(row_idx, map.fees_paid_date);
        let amount_cell = table.cell(row_idx, map.paid_amount);

        let fees_paid_date = parse_date(date_cell, &opts.date_formats);
        if fees_paid_date.is_none() {
            undated += 1;
        }

        let paid_amount = parse_amount(amount_cell).unwrap_or_else(|| {
            coerced += 1;
            0.0
        });

        let cells = (0..map.headers.len())
            .map(|col| table.cell(row_idx, col).to_string())
            .collect();

        records.push(CleanRecord {
            source_row: row_idx,
            fees_paid_date,
            payment_type: classify_details(table.cell(row_idx, map.payment_details)),
            paid_amount,
            cells,
        });
    }

    debug!(rows = records.len(), header_row = opts.header_row, "cleaned fee records");
    if undated > 0 {
        warn!(undated, "rows with unparseable fees paid date; excluded from dated views");
    }
    if coerced > 0 {
        warn!(coerced, "rows with non-numeric paid amount; counted as 0");
    }

    Ok(Dataset::new(map.headers, records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formats() -> Vec<String> {
        IngestOptions::default().date_formats
    }

    fn row(cells: &[&str]) -> Vec<Cell> {
        cells.iter().map(|c| Cell::from(*c)).collect()
    }

    fn sheet(data: Vec<Vec<Cell>>) -> RawTable {
        let mut rows = vec![
            row(&["Fee Collection Export"]),
            row(&["Student", "Fees Paid Date", "Payment Details", "Paid Amount"]),
        ];
        rows.extend(data);
        RawTable::new(rows)
    }

    #[test]
    fn test_parse_date_text_formats() {
        let f = formats();
        let jan5 = NaiveDate::from_ymd_opt(2024, 1, 5);
        assert_eq!(parse_date(&Cell::from("2024-01-05"), &f), jan5);
        assert_eq!(parse_date(&Cell::from("2024-01-05 14:30:00"), &f), jan5);
        assert_eq!(parse_date(&Cell::from("01/05/2024"), &f), jan5);
        assert_eq!(parse_date(&Cell::from("25/01/2024"), &f), NaiveDate::from_ymd_opt(2024, 1, 25));
        assert_eq!(parse_date(&Cell::from("05-Jan-2024"), &f), jan5);
        assert_eq!(parse_date(&Cell::from("2024-01-05T09:00:00+05:30"), &f), jan5);
    }

    #[test]
    fn test_parse_date_failures_are_none() {
        let f = formats();
        assert_eq!(parse_date(&Cell::from("not a date"), &f), None);
        assert_eq!(parse_date(&Cell::from("2024-02-30"), &f), None);
        assert_eq!(parse_date(&Cell::Empty, &f), None);
        assert_eq!(parse_date(&Cell::Bool(true), &f), None);
    }

    #[test]
    fn test_parse_date_excel_serial() {
        let f = formats();
        // 45296 = 2024-01-05; the fraction is time of day
        assert_eq!(parse_date(&Cell::Number(45296.0), &f), NaiveDate::from_ymd_opt(2024, 1, 5));
        assert_eq!(parse_date(&Cell::Number(45296.75), &f), NaiveDate::from_ymd_opt(2024, 1, 5));
        assert_eq!(parse_date(&Cell::Number(-3.0), &f), None);
    }

    #[test]
    fn test_coerce_amount() {
        assert_eq!(coerce_amount(&Cell::Number(250.5)), 250.5);
        assert_eq!(coerce_amount(&Cell::from(" 1200 ")), 1200.0);
        assert_eq!(coerce_amount(&Cell::from("-75")), -75.0);
        assert_eq!(coerce_amount(&Cell::from("not a number")), 0.0);
        assert_eq!(coerce_amount(&Cell::from("N/A")), 0.0);
        assert_eq!(coerce_amount(&Cell::from("NaN")), 0.0);
        assert_eq!(coerce_amount(&Cell::Empty), 0.0);
    }

    #[test]
    fn test_parse_amount_separates_zero_from_fallback() {
        assert_eq!(parse_amount(&Cell::from("0")), Some(0.0));
        assert_eq!(parse_amount(&Cell::from(" 0.00 ")), Some(0.0));
        assert_eq!(parse_amount(&Cell::Number(0.0)), Some(0.0));
        assert_eq!(parse_amount(&Cell::from("N/A")), None);
        assert_eq!(parse_amount(&Cell::from("inf")), None);
        assert_eq!(parse_amount(&Cell::Number(f64::NAN)), None);
        assert_eq!(parse_amount(&Cell::Empty), None);
        assert_eq!(parse_amount(&Cell::Bool(false)), None);
    }

    #[test]
    fn test_classify_details_cells() {
        assert_eq!(classify_details(&Cell::from("cash")), PaymentType::Cash);
        assert_eq!(classify_details(&Cell::from("ONLINE")), PaymentType::Online);
        assert_eq!(classify_details(&Cell::Empty), PaymentType::Other);
        assert_eq!(classify_details(&Cell::Number(5.0)), PaymentType::Other);
    }

    #[test]
    fn test_clean_keeps_every_row() {
        let table = sheet(vec![
            row(&["A", "2024-01-05", "CASH", "100"]),
            row(&["B", "garbage", "", "N/A"]),
            row(&[]),
            row(&["D", "2024-02-01", "online", "20"]),
        ]);
        let ds = clean(&table, &IngestOptions::default()).unwrap();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.headers.len(), 4);

        let bad = &ds.records[1];
        assert_eq!(bad.fees_paid_date, None);
        assert_eq!(bad.payment_type, PaymentType::Other);
        assert_eq!(bad.paid_amount, 0.0);
        assert_eq!(bad.source_row, 3);

        let blank = &ds.records[2];
        assert_eq!(blank.cells, vec!["", "", "", ""]);
        assert_eq!(blank.payment_type, PaymentType::Other);

        assert_eq!(ds.records[3].payment_type, PaymentType::Online);
        assert_eq!(ds.records[3].cells[0], "D");
    }

    #[test]
    fn test_clean_only_header_rows() {
        let ds = clean(&sheet(vec![]), &IngestOptions::default()).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn test_clean_rejects_missing_columns() {
        let table = RawTable::new(vec![row(&["t"]), row(&["Date", "Amount"])]);
        assert!(matches!(
            clean(&table, &IngestOptions::default()),
            Err(SchemaError::MissingColumns { .. })
        ));
    }
}
