pub mod chat;
pub mod meta;

use axum::{routing::{get, post}, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::ax_state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/", get(meta::welcome))
        .route("/languages", get(meta::list_languages))
        .route("/chat", post(chat::chat))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
