//! Status Handler
//!
//! 按三位国家代码查询欧盟重新开放指标
//!
//! 特殊值 `help`：改查固定参考国家，并以 HTML 列出所有清洗后的指标名称，
//! 供调用方确认 JSON 响应里会出现哪些键

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use super::final_segment;
use crate::domain::indicator::{present_comment, sanitize_indicator_name, REFERENCE_COUNTRY};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 查询参数
///
/// `maxlength` 为负数时等同于未提供（截断关闭）
#[derive(Debug, Deserialize)]
pub struct StatusParams {
    pub maxlength: Option<i64>,
}

/// 查询重新开放指标
pub async fn lookup_status(
    State(state): State<Arc<AppState>>,
    Path(tail): Path<String>,
    Query(params): Query<StatusParams>,
) -> Result<Response, ApiError> {
    let country_code = final_segment(&tail);
    let is_help = country_code == "help";

    let fetch_code = if is_help {
        REFERENCE_COUNTRY
    } else {
        country_code
    };

    let indicators = state.indicators.fetch_indicators(fetch_code).await?;

    if is_help {
        let mut names = String::new();
        for indicator in &indicators {
            names.push_str(&sanitize_indicator_name(&indicator.name));
            names.push_str("<br>");
        }
        let body = format!("<html>{}</html>", names);

        Ok(([(header::CONTENT_TYPE, "text/html")], body).into_response())
    } else {
        let mut result = serde_json::Map::new();
        for indicator in &indicators {
            result.insert(
                sanitize_indicator_name(&indicator.name),
                json!({
                    "value": indicator.value,
                    "comment": present_comment(&indicator.comment, params.maxlength),
                }),
            );
        }

        Ok(Json(serde_json::Value::Object(result)).into_response())
    }
}
