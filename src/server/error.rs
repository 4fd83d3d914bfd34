use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::{ErrorKind, LearnPathError};
use crate::types::ErrorResult;

/// 处理器返回的错误，统一转换为 `{error, kind}` JSON
#[derive(Debug)]
pub enum ApiError {
    InvalidRequest(String),
    Service(LearnPathError),
}

impl From<LearnPathError> for ApiError {
    fn from(err: LearnPathError) -> Self {
        ApiError::Service(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidRequest(message) => {
                tracing::debug!("请求参数无效: {}", message);
                let body = json!({ "error": message, "kind": ErrorKind::InvalidRequest });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::Service(err) => {
                tracing::error!("❌ 请求处理失败: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResult::from(err))).into_response()
            }
        }
    }
}
