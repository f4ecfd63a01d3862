//! Cleaned fee records and the dataset that owns them

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::payment::PaymentType;

/// One normalized fee payment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CleanRecord {
    /// Index of the raw row this record was promoted from
    pub source_row: usize,
    /// Payment date; `None` when the source value could not be parsed
    pub fees_paid_date: Option<NaiveDate>,
    /// Classified payment method
    pub payment_type: PaymentType,
    /// Paid amount, 0 when the source value was not numeric
    pub paid_amount: f64,
    /// Raw cells rendered as text, aligned with `Dataset::headers`
    #[serde(default)]
    pub cells: Vec<String>,
}

impl CleanRecord {
    /// Create a record with no raw cells attached
    pub fn new(
        fees_paid_date: Option<NaiveDate>,
        payment_type: PaymentType,
        paid_amount: f64,
    ) -> Self {
        Self {
            source_row: 0,
            fees_paid_date,
            payment_type,
            paid_amount,
            cells: Vec::new(),
        }
    }

    /// True if the record was paid on `date`
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.fees_paid_date == Some(date)
    }

    /// True if the record has a usable date
    pub fn is_dated(&self) -> bool {
        self.fees_paid_date.is_some()
    }
}

/// Promoted header plus the cleaned records of one loaded sheet
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub records: Vec<CleanRecord>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, records: Vec<CleanRecord>) -> Self {
        Self { headers, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose date could not be parsed
    pub fn undated_count(&self) -> usize {
        self.records.iter().filter(|r| !r.is_dated()).count()
    }
}
