//! fees-report: date filtering, payment summaries, period buckets and pivots

pub mod buckets;
pub mod date_filter;
pub mod metrics;
pub mod pivot;
pub mod session;
pub mod summary;

pub use buckets::{TimeBucketRow, bucket_monthly, bucket_weekly};
pub use date_filter::{available_dates, earliest_date, select_by_date};
pub use metrics::{DailyMetrics, DatasetMetrics, daily_metrics, dataset_metrics};
pub use pivot::{PivotRow, pivot};
pub use session::Session;
pub use summary::{PaymentSummary, share_by_type, summarize, summarize_on};
