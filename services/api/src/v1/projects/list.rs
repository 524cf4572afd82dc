use axum::Json;
use postgres_models::{models::Project, queries::projects};

use crate::{errors::AppResult, extractors::ReadOnlyDatabaseConnection};

/// All projects, newest first.
pub async fn handler(
    ReadOnlyDatabaseConnection(mut conn): ReadOnlyDatabaseConnection,
) -> AppResult<Json<Vec<Project>>> {
    let projects = projects::list(&mut conn).await?;
    Ok(Json(projects))
}
