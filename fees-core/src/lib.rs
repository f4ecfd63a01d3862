//! fees-core: domain types for school fee analytics

pub mod payment;
pub mod period;
pub mod record;

pub use payment::PaymentType;
pub use period::{Period, PeriodUnit, WeekYear, month_label, week_label};
pub use record::{CleanRecord, Dataset};
