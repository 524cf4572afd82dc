//! Revenue reporting vocabulary and the aggregation rules shared by the
//! API and the dashboard client.
//!
//! Every aggregate here is computed from explicit inputs: callers pass the
//! rows and the [`ReportWindow`] instead of letting the functions read the
//! wall clock.

pub mod currency;
pub mod customers;
pub mod ledger;
pub mod listing;
pub mod monthly;
pub mod status;
pub mod subscriptions;
pub mod summary;
pub mod trend;
pub mod window;

pub use currency::Currency;
pub use customers::CustomerStats;
pub use ledger::{LedgerEntry, SubscriptionEntry};
pub use listing::{DashboardSnapshot, SubscriptionListItem, TransactionListItem, TrendReport};
pub use monthly::{monthly_revenue, MonthlyRevenue};
pub use status::{StatusFilter, SubscriptionStatus, TransactionStatus, TransactionType};
pub use subscriptions::SubscriptionSummary;
pub use summary::RevenueSummary;
pub use trend::{trend_series, TrendPoint, DEFAULT_TREND_BUCKETS, DEFAULT_TREND_WINDOW_DAYS};
pub use window::ReportWindow;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown transaction status: {0}")]
    TransactionStatus(String),

    #[error("Unknown transaction type: {0}")]
    TransactionType(String),

    #[error("Unknown subscription status: {0}")]
    SubscriptionStatus(String),

    #[error("Invalid ISO-4217 currency code: {0}")]
    Currency(String),

    #[error("Report window must end after it starts")]
    EmptyWindow,

    #[error("Report window length must be between 1 and {max} days, got {days}")]
    WindowLength { days: u32, max: u32 },

    #[error("Report window falls outside the supported date range")]
    WindowOutOfRange,
}
