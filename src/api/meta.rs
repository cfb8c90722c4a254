use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;
use crate::ax_state::AppState;

pub async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Women's Support Assistant" }))
}

pub async fn list_languages(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({ "languages": state.gateway.supported_languages() }))
}
