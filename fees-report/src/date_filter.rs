//! Select records by calendar date.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use fees_core::CleanRecord;

/// Records paid on `date`, in input order. Undated records never match.
pub fn select_by_date(records: &[CleanRecord], date: NaiveDate) -> Vec<&CleanRecord> {
    records.iter().filter(|r| r.is_on(date)).collect()
}

/// Distinct dates present in the records, ascending.
pub fn available_dates(records: &[CleanRecord]) -> Vec<NaiveDate> {
    records
        .iter()
        .filter_map(|r| r.fees_paid_date)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Earliest date with at least one record
pub fn earliest_date(records: &[CleanRecord]) -> Option<NaiveDate> {
    records.iter().filter_map(|r| r.fees_paid_date).min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fees_core::PaymentType;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample() -> Vec<CleanRecord> {
        vec![
            CleanRecord::new(Some(d(2024, 1, 5)), PaymentType::Cash, 100.0),
            CleanRecord::new(Some(d(2024, 1, 5)), PaymentType::Online, 50.0),
            CleanRecord::new(Some(d(2024, 2, 1)), PaymentType::Cash, 20.0),
            CleanRecord::new(None, PaymentType::Other, 0.0),
        ]
    }

    #[test]
    fn test_select_by_date_exact() {
        let records = sample();
        let hits = select_by_date(&records, d(2024, 1, 5));
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].paid_amount, 100.0);
        assert_eq!(hits[1].paid_amount, 50.0);
    }

    #[test]
    fn test_select_by_date_no_matches() {
        let records = sample();
        assert!(select_by_date(&records, d(2024, 3, 1)).is_empty());
        assert!(select_by_date(&[], d(2024, 1, 5)).is_empty());
    }

    #[test]
    fn test_available_dates_sorted_unique() {
        let mut records = sample();
        records.reverse();
        assert_eq!(available_dates(&records), vec![d(2024, 1, 5), d(2024, 2, 1)]);
        assert_eq!(earliest_date(&records), Some(d(2024, 1, 5)));
        assert_eq!(earliest_date(&records[..1]), None);
    }
}
