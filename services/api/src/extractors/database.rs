use crate::{errors::AppError, AppState};
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use postgres_models::DbConnection;

/// A pooled connection for handlers that only read.
pub struct ReadOnlyDatabaseConnection(pub DbConnection);

#[async_trait]
impl<S> FromRequestParts<S> for ReadOnlyDatabaseConnection
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let conn = app_state.db_pool.get_owned().await.map_err(|err| {
            tracing::warn!(error = %err, "Failed to check out database connection");
            AppError::service_unavailable("Database unavailable")
        })?;

        Ok(ReadOnlyDatabaseConnection(conn))
    }
}
