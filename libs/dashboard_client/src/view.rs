use billing_reports::{RevenueSummary, SubscriptionListItem, TransactionListItem, TrendReport};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::generation::FetchGeneration;
use crate::source::{ClientError, DashboardRequest, DashboardSource};

/// Everything the dashboard renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub loading: bool,
    pub project_id: Option<Uuid>,
    pub summary: Option<RevenueSummary>,
    pub trend: TrendReport,
    pub transactions: Vec<TransactionListItem>,
    pub subscriptions: Vec<SubscriptionListItem>,
    /// Fetches of the applied load that failed and were replaced by empty data.
    pub failed_fetches: usize,
    /// Generation of the load that produced this state.
    pub generation: u64,
}

impl DashboardState {
    /// No data to show. Distinct from `loading`.
    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
            && self.trend.points.is_empty()
            && self.transactions.is_empty()
            && self.subscriptions.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied { failed_fetches: usize },
    /// A newer load started while this one was in flight; its results were dropped.
    Superseded,
}

#[derive(Debug, Default)]
pub struct DashboardView {
    generation: FetchGeneration,
    state: Mutex<DashboardState>,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn state(&self) -> DashboardState {
        self.state.lock().await.clone()
    }

    /// Fetches every card concurrently and applies the results if no newer
    /// load has started in the meantime.
    pub async fn load<S>(&self, source: &S, request: &DashboardRequest) -> LoadOutcome
    where
        S: DashboardSource + ?Sized,
    {
        let ticket = {
            let mut state = self.state.lock().await;
            let ticket = self.generation.begin();
            state.loading = true;
            ticket
        };

        let (summary, trend, transactions, subscriptions) = tokio::join!(
            source.summary(request),
            source.trend(request),
            source.transactions(request),
            source.subscriptions(request),
        );

        let mut failed_fetches = 0;
        let summary = settle("summary", request, summary.map(Some), &mut failed_fetches);
        let trend = settle("trend", request, trend, &mut failed_fetches);
        let transactions = settle("transactions", request, transactions, &mut failed_fetches);
        let subscriptions = settle("subscriptions", request, subscriptions, &mut failed_fetches);

        let mut state = self.state.lock().await;
        if !ticket.is_current() {
            tracing::debug!(
                project_id = %request.project_id,
                generation = ticket.generation(),
                latest = self.generation.current(),
                "Discarding superseded dashboard load"
            );
            return LoadOutcome::Superseded;
        }

        *state = DashboardState {
            loading: false,
            project_id: Some(request.project_id),
            summary,
            trend,
            transactions,
            subscriptions,
            failed_fetches,
            generation: ticket.generation(),
        };

        LoadOutcome::Applied { failed_fetches }
    }
}

fn settle<T: Default>(
    what: &'static str,
    request: &DashboardRequest,
    result: Result<T, ClientError>,
    failed_fetches: &mut usize,
) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            *failed_fetches += 1;
            tracing::warn!(
                project_id = %request.project_id,
                fetch = what,
                error = %err,
                "Dashboard fetch failed, showing empty data"
            );
            T::default()
        }
    }
}
