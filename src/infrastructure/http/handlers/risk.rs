//! Travel Risk Handler
//!
//! 按两位国家代码查询旅行风险评分

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::final_segment;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 评分上限，响应结构的固定常量（不参与计算）
const MAX_SCORE: u8 = 5;

/// 风险评分响应
#[derive(Debug, Serialize)]
pub struct RiskResponse {
    pub score: f64,
    #[serde(rename = "maxScore")]
    pub max_score: u8,
}

/// 查询旅行风险评分
pub async fn lookup_risk(
    State(state): State<Arc<AppState>>,
    Path(tail): Path<String>,
) -> Result<Json<RiskResponse>, ApiError> {
    let country_code = final_segment(&tail);

    let score = state.travel_advisory.advisory_score(country_code).await?;

    Ok(Json(RiskResponse {
        score,
        max_score: MAX_SCORE,
    }))
}
