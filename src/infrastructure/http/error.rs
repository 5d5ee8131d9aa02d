//! HTTP Error Handling
//!
//! 上游异常统一转换为不透明的空响应体 500（已知弱点，按原始行为保留），
//! 转换前记录完整错误日志

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::UpstreamError;

/// API 错误
///
/// 路由层不拦截 Handler 错误，只在 axum 边界做一次转换
#[derive(Debug)]
pub enum ApiError {
    /// 上游调用失败（传输错误或结构异常）
    Upstream(UpstreamError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Upstream(err) => {
                tracing::error!(error = %err, "Upstream call failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        ApiError::Upstream(err)
    }
}
