use async_trait::async_trait;
use billing_reports::{
    RevenueSummary, StatusFilter, SubscriptionListItem, SubscriptionStatus, TransactionListItem,
    TransactionStatus, TrendReport,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// What one dashboard view load asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardRequest {
    pub project_id: Uuid,
    pub transaction_status: StatusFilter<TransactionStatus>,
    pub subscription_status: StatusFilter<SubscriptionStatus>,
    /// End of the trend window. The server uses its own clock when unset.
    pub as_of: Option<DateTime<Utc>>,
    /// Viewer's offset from UTC, used to bucket the trend by local day.
    pub tz_offset_minutes: i32,
}

impl DashboardRequest {
    pub fn new(project_id: Uuid) -> Self {
        Self {
            project_id,
            transaction_status: StatusFilter::All,
            subscription_status: StatusFilter::All,
            as_of: None,
            tz_offset_minutes: 0,
        }
    }
}

#[async_trait]
pub trait DashboardSource: Send + Sync {
    async fn summary(&self, request: &DashboardRequest) -> Result<RevenueSummary, ClientError>;

    async fn trend(&self, request: &DashboardRequest) -> Result<TrendReport, ClientError>;

    async fn transactions(
        &self,
        request: &DashboardRequest,
    ) -> Result<Vec<TransactionListItem>, ClientError>;

    async fn subscriptions(
        &self,
        request: &DashboardRequest,
    ) -> Result<Vec<SubscriptionListItem>, ClientError>;
}
