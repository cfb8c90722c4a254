use axum::{extract::State, Json};
use std::sync::Arc;
use crate::ax_state::AppState;
use crate::error::GatewayError;
use crate::models::context::{ChatRequest, ChatResponse};

pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, GatewayError> {
    state.gateway.handle(payload).await.map(Json)
}
