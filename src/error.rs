use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// 网关对外的两类失败：调用方输入错误，或上游/内部失败
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Invalid language selection")]
    InvalidLanguage,

    /// 原样携带底层错误描述，不做脱敏
    #[error("{0}")]
    Upstream(String),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::InvalidLanguage => StatusCode::BAD_REQUEST,
            GatewayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for GatewayError {
    fn from(e: anyhow::Error) -> Self {
        // {:#} 保留完整的 context 链
        GatewayError::Upstream(format!("{:#}", e))
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
