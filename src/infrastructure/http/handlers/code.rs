//! Country Code Handler
//!
//! 按自由文本国家名称查询两/三位国家代码

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::final_segment;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

/// 命中响应
#[derive(Debug, Serialize)]
pub struct CodeResponse {
    pub code2: String,
    pub code3: String,
    pub found: bool,
}

/// 未命中响应（上游的逻辑"未找到"，仍然是 200）
#[derive(Debug, Serialize)]
pub struct CodeNotFoundResponse {
    pub found: bool,
}

// ============================================================================
// Handler
// ============================================================================

/// 查询国家代码
///
/// 上游返回多条记录时只取第一条，不做消歧
pub async fn lookup_code(
    State(state): State<Arc<AppState>>,
    Path(tail): Path<String>,
) -> Result<Response, ApiError> {
    let name = final_segment(&tail);

    let record = state.country_lookup.lookup_by_name(name).await?;

    match record {
        Some(record) => Ok(Json(CodeResponse {
            code2: record.alpha2_code,
            code3: record.alpha3_code,
            found: true,
        })
        .into_response()),
        None => Ok(Json(CodeNotFoundResponse { found: false }).into_response()),
    }
}
