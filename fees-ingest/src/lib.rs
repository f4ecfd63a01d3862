//! fees-ingest: raw sheet readers, header promotion, and record cleaning.

pub mod clean;
pub mod error;
pub mod options;
pub mod parsers;
pub mod schema;
pub mod types;

use std::path::Path;

use fees_core::Dataset;

pub use clean::{classify_details, clean, coerce_amount, parse_amount, parse_date};
pub use error::{IngestError, Result, SchemaError};
pub use options::{DEFAULT_DATE_FORMATS, IngestOptions};
pub use schema::{ColumnNames, HeaderMap, Schema};
pub use types::{Cell, RawTable};

/// Read a fee export from disk and clean it in one step.
pub fn load_dataset(path: impl AsRef<Path>, opts: &IngestOptions) -> Result<Dataset> {
    let path = path.as_ref();
    let table = parsers::read_table(path, opts.sheet.as_deref())?;
    tracing::info!(path = %path.display(), rows = table.len(), "loaded raw sheet");
    Ok(clean(&table, opts)?)
}
