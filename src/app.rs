use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/session",
            get(handlers::get_session).delete(handlers::end_session),
        )
        .route("/api/load", post(handlers::load))
        .route("/api/filter", post(handlers::filter))
        .with_state(state)
}
