use axum::Router;

pub mod params;
mod projects;

pub fn router() -> Router<crate::AppState> {
    Router::new()
        .nest("/projects", projects::router())
}
