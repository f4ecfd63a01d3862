//! Header promotion: map the sheet's header row onto the columns cleaning needs.

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::types::RawTable;

/// Header names of the columns the pipeline reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub fees_paid_date: String,
    pub payment_details: String,
    pub paid_amount: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            fees_paid_date: "Fees Paid Date".to_string(),
            payment_details: "Payment Details".to_string(),
            paid_amount: "Paid Amount".to_string(),
        }
    }
}

/// Declared layout of a fee export sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Row holding column names; earlier rows are discarded
    pub header_row: usize,
    pub columns: ColumnNames,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            header_row: 1,
            columns: ColumnNames::default(),
        }
    }
}

/// Resolved column positions for one sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMap {
    pub headers: Vec<String>,
    pub fees_paid_date: usize,
    pub payment_details: usize,
    pub paid_amount: usize,
    /// First data row
    pub data_start: usize,
}

impl Schema {
    /// Promote the header row and locate every expected column.
    ///
    /// Header cells are trimmed before comparison. When a name repeats, the
    /// leftmost column wins.
    pub fn resolve(&self, table: &RawTable) -> Result<HeaderMap, SchemaError> {
        let header_cells = table.rows.get(self.header_row).ok_or(SchemaError::MissingHeaderRow {
            header_row: self.header_row,
            rows: table.len(),
        })?;

        let headers: Vec<String> = header_cells
            .iter()
            .map(|c| c.as_text().map(|s| s.trim().to_string()).unwrap_or_default())
            .collect();

        let find = |name: &str| headers.iter().position(|h| h == name.trim());

        let wanted = [
            &self.columns.fees_paid_date,
            &self.columns.payment_details,
            &self.columns.paid_amount,
        ];
        let found = wanted.map(|n| find(n.as_str()));

        match found {
            [Some(fees_paid_date), Some(payment_details), Some(paid_amount)] => Ok(HeaderMap {
                headers,
                fees_paid_date,
                payment_details,
                paid_amount,
                data_start: self.header_row + 1,
            }),
            _ => Err(SchemaError::MissingColumns {
                header_row: self.header_row,
                missing: wanted
                    .iter()
                    .zip(found)
                    .filter(|(_, idx)| idx.is_none())
                    .map(|(name, _)| name.to_string())
                    .collect(),
            }),
        }
    }
}
