//! Delimited-text sheets (a CSV saved from the fee export)
//!
//! Every line becomes one raw row; nothing is interpreted here. Rows may have
//! different widths.

use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::types::{Cell, RawTable};

/// Read all rows from any CSV source.
pub fn read_csv<R: Read>(reader: R) -> Result<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(Cell::from).collect());
    }

    Ok(RawTable::new(rows))
}

pub fn read_csv_path(path: impl AsRef<Path>) -> Result<RawTable> {
    let file = std::fs::File::open(path.as_ref())?;
    read_csv(file)
}
