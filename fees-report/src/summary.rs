//! Per-payment-type totals, optionally scoped to one date.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use fees_core::{CleanRecord, PaymentType};
use serde::{Deserialize, Serialize};

use crate::date_filter::select_by_date;

/// Amount and transaction count for one payment type
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub total_amount: f64,
    pub transaction_count: usize,
}

impl PaymentSummary {
    fn add(&mut self, amount: f64) {
        self.total_amount += amount;
        self.transaction_count += 1;
    }
}

/// Group records by payment type.
///
/// Only types with at least one record appear in the map. Count includes
/// zero-amount records.
pub fn summarize<'a, I>(records: I) -> BTreeMap<PaymentType, PaymentSummary>
where
    I: IntoIterator<Item = &'a CleanRecord>,
{
    let mut out: BTreeMap<PaymentType, PaymentSummary> = BTreeMap::new();
    for r in records {
        out.entry(r.payment_type).or_default().add(r.paid_amount);
    }
    out
}

/// Summarize every record, or only those paid on `date`.
pub fn summarize_on(
    records: &[CleanRecord],
    date: Option<NaiveDate>,
) -> BTreeMap<PaymentType, PaymentSummary> {
    match date {
        Some(d) => summarize(select_by_date(records, d)),
        None => summarize(records),
    }
}

/// Each type's fraction of the summed amount. Empty when the total is zero.
pub fn share_by_type(summary: &BTreeMap<PaymentType, PaymentSummary>) -> Vec<(PaymentType, f64)> {
    let total: f64 = summary.values().map(|s| s.total_amount).sum();
    if total == 0.0 {
        return Vec::new();
    }
    summary
        .iter()
        .map(|(t, s)| (*t, s.total_amount / total))
        .collect()
}
