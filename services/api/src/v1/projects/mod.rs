use axum::{routing::get, Router};
use diesel_async::AsyncPgConnection;
use postgres_models::models::Project;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

mod audit_logs;
mod customer_stats;
mod customers;
mod dashboard;
mod gateways;
mod list;
mod monthly_revenue;
mod show;
mod snapshots;
mod subscription_summary;
mod subscriptions;
mod summary;
mod transactions;
mod trend;
mod webhook_logs;

pub fn router() -> Router<crate::AppState> {
    Router::new()
        .route("/", get(list::handler))
        .route("/:project_id", get(show::handler))
        .route("/:project_id/gateways", get(gateways::handler))
        .route("/:project_id/dashboard", get(dashboard::handler))
        .route("/:project_id/summary", get(summary::handler))
        .route("/:project_id/trend", get(trend::handler))
        .route("/:project_id/revenue/monthly", get(monthly_revenue::handler))
        .route("/:project_id/subscriptions/summary", get(subscription_summary::handler))
        .route("/:project_id/customers/stats", get(customer_stats::handler))
        .route("/:project_id/customers/stats/rolling", get(customer_stats::rolling_handler))
        .route("/:project_id/transactions", get(transactions::handler))
        .route("/:project_id/subscriptions", get(subscriptions::handler))
        .route("/:project_id/customers", get(customers::handler))
        .route("/:project_id/snapshots", get(snapshots::handler))
        .route("/:project_id/audit-logs", get(audit_logs::handler))
        .route("/:project_id/webhook-logs", get(webhook_logs::handler))
}

/// Loads the project or answers 404, so every scoped endpoint treats an
/// unknown project the same way.
pub(crate) async fn require_project(
    conn: &mut AsyncPgConnection,
    project_id: Uuid,
) -> AppResult<Project> {
    postgres_models::queries::projects::find(conn, project_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Project {} not found", project_id)))
}
