//! Payment type classification for fee transactions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of payment methods a fee record can be classified into
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PaymentType {
    #[serde(rename = "CASH")]
    Cash,
    #[serde(rename = "ONLINE")]
    Online,
    #[serde(rename = "OTHER")]
    Other,
}

impl PaymentType {
    /// Every payment type, in column order
    pub const ALL: [PaymentType; 3] = [PaymentType::Cash, PaymentType::Online, PaymentType::Other];

    /// Literal substituted for missing payment details before classification
    pub const MISSING_DETAILS: &'static str = "OTHER";

    /// Column label used in summaries and pivots
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Cash => "CASH",
            PaymentType::Online => "ONLINE",
            PaymentType::Other => "OTHER",
        }
    }

    /// Classify free-text payment details.
    ///
    /// The Unicode uppercase form must equal `CASH` or `ONLINE` exactly;
    /// everything else, missing values included, is `Other`. Surrounding
    /// whitespace is not stripped, so `" cash"` is `Other`.
    pub fn classify(details: Option<&str>) -> PaymentType {
        let upper = details.unwrap_or(Self::MISSING_DETAILS).to_uppercase();
        match upper.as_str() {
            "CASH" => PaymentType::Cash,
            "ONLINE" => PaymentType::Online,
            _ => PaymentType::Other,
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
