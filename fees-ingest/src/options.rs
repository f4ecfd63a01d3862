use serde::{Deserialize, Serialize};

use crate::schema::{ColumnNames, Schema};

/// Text date formats tried in order. Month-first wins over day-first for
/// ambiguous slash dates.
pub const DEFAULT_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d %b %Y",
    "%d-%b-%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %B %Y",
];

/// Everything ingestion needs to know about a fee export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestOptions {
    pub header_row: usize,
    #[serde(flatten)]
    pub columns: ColumnNames,
    pub date_formats: Vec<String>,
    /// Worksheet to read from workbooks; the first sheet when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet: Option<String>,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            header_row: 1,
            columns: ColumnNames::default(),
            date_formats: DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect(),
            sheet: None,
        }
    }
}

impl IngestOptions {
    pub fn schema(&self) -> Schema {
        Schema {
            header_row: self.header_row,
            columns: self.columns.clone(),
        }
    }
}
