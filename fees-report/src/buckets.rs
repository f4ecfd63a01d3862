//! Monthly and weekly long-form rollups.
//!
//! Output rows are ascending by (year, month or week, payment type). Undated
//! records contribute to no bucket.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use fees_core::{CleanRecord, PaymentType, Period, PeriodUnit, WeekYear};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One (period, payment type) sum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBucketRow {
    pub year: i32,
    pub unit: PeriodUnit,
    pub payment_type: PaymentType,
    pub sum_amount: f64,
    /// "January 2024" or "Week 3, 2024"
    pub period: String,
}

fn bucket_by<F>(records: &[CleanRecord], key: F) -> Vec<TimeBucketRow>
where
    F: Fn(NaiveDate) -> Period,
{
    let mut groups: BTreeMap<(Period, PaymentType), f64> = BTreeMap::new();
    for r in records {
        let Some(date) = r.fees_paid_date else {
            continue;
        };
        *groups.entry((key(date), r.payment_type)).or_insert(0.0) += r.paid_amount;
    }

    groups
        .into_iter()
        .map(|((period, payment_type), sum_amount)| TimeBucketRow {
            year: period.year,
            unit: period.unit,
            payment_type,
            sum_amount,
            period: period.label(),
        })
        .collect()
}

/// Group by (calendar year, calendar month, payment type).
pub fn bucket_monthly(records: &[CleanRecord]) -> Vec<TimeBucketRow> {
    let rows = bucket_by(records, Period::month_of);
    debug!(rows = rows.len(), "monthly buckets");
    rows
}

/// Group by (year, ISO week, payment type); `week_year` picks which year.
pub fn bucket_weekly(records: &[CleanRecord], week_year: WeekYear) -> Vec<TimeBucketRow> {
    let rows = bucket_by(records, |d| Period::week_of(d, week_year));
    debug!(rows = rows.len(), ?week_year, "weekly buckets");
    rows
}
