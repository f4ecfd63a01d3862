//! Scalar dashboard figures.

use chrono::NaiveDate;
use fees_core::CleanRecord;
use serde::{Deserialize, Serialize};

use crate::date_filter::{available_dates, select_by_date};

/// Whole-dataset figures. Undated records count toward the totals but not
/// toward active days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatasetMetrics {
    pub total_collection: f64,
    pub total_transactions: usize,
    pub active_days: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyMetrics {
    pub date: NaiveDate,
    pub total_amount: f64,
    pub transactions: usize,
}

pub fn dataset_metrics(records: &[CleanRecord]) -> DatasetMetrics {
    DatasetMetrics {
        total_collection: records.iter().map(|r| r.paid_amount).sum(),
        total_transactions: records.len(),
        active_days: available_dates(records).len(),
    }
}

pub fn daily_metrics(records: &[CleanRecord], date: NaiveDate) -> DailyMetrics {
    let day = select_by_date(records, date);
    DailyMetrics {
        date,
        total_amount: day.iter().map(|r| r.paid_amount).sum(),
        transactions: day.len(),
    }
}
