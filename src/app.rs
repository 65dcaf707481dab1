use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/service-worker.js", get(handlers::service_worker))
        .route("/api/subjects", get(handlers::list_subjects))
        .route("/api/subjects", post(handlers::create_subject))
        .route("/api/subjects/:name", delete(handlers::delete_subject))
        .route("/api/subjects/:name/month", get(handlers::month_view))
        .route("/api/subjects/:name/records", post(handlers::set_record))
        .with_state(state)
}
