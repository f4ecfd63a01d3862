//! One loaded dataset and the views computed from it.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use fees_core::{CleanRecord, Dataset, PaymentType, WeekYear};
use fees_ingest::IngestOptions;

use crate::buckets::{bucket_monthly, bucket_weekly};
use crate::date_filter::{available_dates, earliest_date, select_by_date};
use crate::metrics::{DailyMetrics, DatasetMetrics, daily_metrics, dataset_metrics};
use crate::pivot::{PivotRow, pivot};
use crate::summary::{PaymentSummary, summarize_on};

/// Explicit context for a loaded fee export.
///
/// Every view is recomputed from the dataset on each call; the dataset itself
/// is never modified.
#[derive(Debug, Clone)]
pub struct Session {
    dataset: Dataset,
    week_year: WeekYear,
}

impl Session {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            week_year: WeekYear::default(),
        }
    }

    pub fn load(path: impl AsRef<Path>, opts: &IngestOptions) -> fees_ingest::Result<Self> {
        Ok(Self::new(fees_ingest::load_dataset(path, opts)?))
    }

    pub fn with_week_year(mut self, week_year: WeekYear) -> Self {
        self.week_year = week_year;
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn records(&self) -> &[CleanRecord] {
        &self.dataset.records
    }

    pub fn available_dates(&self) -> Vec<NaiveDate> {
        available_dates(self.records())
    }

    /// The requested date, or the earliest date in the data
    pub fn resolve_date(&self, requested: Option<NaiveDate>) -> Option<NaiveDate> {
        requested.or_else(|| earliest_date(self.records()))
    }

    pub fn records_on(&self, date: NaiveDate) -> Vec<&CleanRecord> {
        select_by_date(self.records(), date)
    }

    pub fn summary(&self, date: Option<NaiveDate>) -> BTreeMap<PaymentType, PaymentSummary> {
        summarize_on(self.records(), date)
    }

    pub fn daily(&self, date: NaiveDate) -> DailyMetrics {
        daily_metrics(self.records(), date)
    }

    pub fn metrics(&self) -> DatasetMetrics {
        dataset_metrics(self.records())
    }

    pub fn monthly_pivot(&self) -> Vec<PivotRow> {
        pivot(&bucket_monthly(self.records()))
    }

    pub fn weekly_pivot(&self) -> Vec<PivotRow> {
        pivot(&bucket_weekly(self.records(), self.week_year))
    }
}
