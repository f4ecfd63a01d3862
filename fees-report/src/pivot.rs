//! Reshape long-form bucket rows into one wide row per period.

use std::collections::HashMap;

use fees_core::PaymentType;
use serde::{Deserialize, Serialize};

use crate::buckets::TimeBucketRow;

/// Wide row: one column per payment type plus a total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotRow {
    pub period: String,
    #[serde(rename = "CASH")]
    pub cash: f64,
    #[serde(rename = "ONLINE")]
    pub online: f64,
    #[serde(rename = "OTHER")]
    pub other: f64,
    #[serde(rename = "Total")]
    pub total: f64,
}

impl PivotRow {
    fn empty(period: &str) -> Self {
        Self {
            period: period.to_string(),
            cash: 0.0,
            online: 0.0,
            other: 0.0,
            total: 0.0,
        }
    }

    pub fn amount(&self, payment_type: PaymentType) -> f64 {
        match payment_type {
            PaymentType::Cash => self.cash,
            PaymentType::Online => self.online,
            PaymentType::Other => self.other,
        }
    }

    fn slot(&mut self, payment_type: PaymentType) -> &mut f64 {
        match payment_type {
            PaymentType::Cash => &mut self.cash,
            PaymentType::Online => &mut self.online,
            PaymentType::Other => &mut self.other,
        }
    }
}

/// One row per distinct period label, in order of first appearance.
///
/// All three payment-type columns are always present; a type with no rows in
/// a period is 0. `total` is recomputed from the three columns.
pub fn pivot(rows: &[TimeBucketRow]) -> Vec<PivotRow> {
    let mut out: Vec<PivotRow> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for row in rows {
        let idx = *index.entry(row.period.as_str()).or_insert_with(|| {
            out.push(PivotRow::empty(&row.period));
            out.len() - 1
        });
        *out[idx].slot(row.payment_type) += row.sum_amount;
    }

    for p in &mut out {
        p.total = PaymentType::ALL.iter().map(|t| p.amount(*t)).sum();
    }
    out
}
