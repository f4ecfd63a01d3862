//! Record listing and CSV export of a day's records.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use fees_core::CleanRecord;
use fees_ingest::ColumnNames;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn default_export_path(date: NaiveDate) -> PathBuf {
    PathBuf::from(format!("school_fees_data_{}.csv", date.format("%Y-%m-%d")))
}

/// Output rows for `records`: the promoted header plus a `Payment Type`
/// column, then one row per record. Cleaned date and amount replace the raw
/// values in their columns.
pub fn record_rows(
    headers: &[String],
    records: &[&CleanRecord],
    columns: &ColumnNames,
) -> Vec<Vec<String>> {
    let date_col = headers.iter().position(|h| h == columns.fees_paid_date.trim());
    let amount_col = headers.iter().position(|h| h == columns.paid_amount.trim());

    let mut header_row = headers.to_vec();
    header_row.push("Payment Type".to_string());

    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(header_row);
    for r in records {
        let mut row: Vec<String> = (0..headers.len())
            .map(|i| r.cells.get(i).cloned().unwrap_or_default())
            .collect();
        if let Some(i) = date_col {
            row[i] = r
                .fees_paid_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
        }
        if let Some(i) = amount_col {
            row[i] = r.paid_amount.to_string();
        }
        row.push(r.payment_type.to_string());
        rows.push(row);
    }
    rows
}

/// Lay rows out as space-padded columns for the terminal.
pub fn format_listing(rows: &[Vec<String>]) -> String {
    let ncols = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..ncols)
        .map(|c| {
            rows.iter()
                .filter_map(|r| r.get(c))
                .map(|v| v.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(v, w)| format!("{v:<w$}"))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

/// Write records as CSV, laid out by `record_rows`.
pub fn write_records<W: Write>(
    out: W,
    headers: &[String],
    records: &[&CleanRecord],
    columns: &ColumnNames,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for row in record_rows(headers, records, columns) {
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_to_path(
    path: &Path,
    headers: &[String],
    records: &[&CleanRecord],
    columns: &ColumnNames,
) -> Result<()> {
    let file = std::fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_records(file, headers, records, columns)
        .with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = records.len(), "exported records");
    Ok(())
}
