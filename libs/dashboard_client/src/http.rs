use async_trait::async_trait;
use billing_reports::{RevenueSummary, SubscriptionListItem, TransactionListItem, TrendReport};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::source::{ClientError, DashboardRequest, DashboardSource};

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            timeout: Duration::from_secs(10),
        })
    }
}

/// [`DashboardSource`] backed by the dashboard HTTP API.
pub struct HttpDashboardSource {
    client: Client,
    base_url: Url,
}

impl HttpDashboardSource {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    fn project_url(&self, request: &DashboardRequest, path: &str) -> Result<Url, ClientError> {
        let url = self
            .base_url
            .join(&format!("v1/projects/{}/{}", request.project_id, path))?;
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        tracing::debug!(%url, "Fetching dashboard data");
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl DashboardSource for HttpDashboardSource {
    async fn summary(&self, request: &DashboardRequest) -> Result<RevenueSummary, ClientError> {
        let url = self.project_url(request, "summary")?;
        self.get_json(url, &[]).await
    }

    async fn trend(&self, request: &DashboardRequest) -> Result<TrendReport, ClientError> {
        let url = self.project_url(request, "trend")?;
        let mut query = vec![("tz_offset_minutes", request.tz_offset_minutes.to_string())];
        if let Some(as_of) = request.as_of {
            query.push(("as_of", as_of.to_rfc3339()));
        }
        self.get_json(url, &query).await
    }

    async fn transactions(
        &self,
        request: &DashboardRequest,
    ) -> Result<Vec<TransactionListItem>, ClientError> {
        let url = self.project_url(request, "transactions")?;
        let status = request
            .transaction_status
            .status()
            .map_or("all", |s| s.as_str());
        self.get_json(url, &[("status", status.to_string())]).await
    }

    async fn subscriptions(
        &self,
        request: &DashboardRequest,
    ) -> Result<Vec<SubscriptionListItem>, ClientError> {
        let url = self.project_url(request, "subscriptions")?;
        let status = request
            .subscription_status
            .status()
            .map_or("all", |s| s.as_str());
        self.get_json(url, &[("status", status.to_string())]).await
    }
}
