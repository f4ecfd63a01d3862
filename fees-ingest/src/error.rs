use thiserror::Error;

/// Header promotion failures. These are configuration problems with the
/// sheet layout, not per-row data problems.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SchemaError {
    #[error("sheet has {rows} rows; header row {header_row} is missing")]
    MissingHeaderRow { header_row: usize, rows: usize },

    #[error(
        "expected columns not found in header row {header_row} (sheet row {}): {}; \
         set header_row to the row holding the column names",
        .header_row + 1,
        .missing.join(", ")
    )]
    MissingColumns { header_row: usize, missing: Vec<String> },
}

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Workbook has no worksheet named {0}")]
    MissingSheet(String),

    #[error("Workbook has no worksheets")]
    EmptyWorkbook,

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

pub type Result<T> = std::result::Result<T, IngestError>;
