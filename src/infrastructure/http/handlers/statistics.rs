//! Statistics Handler
//!
//! 按两位国家代码计算近 14 天的确诊/死亡/康复增量
//!
//! 两步上游调用：先在国家列表中解析 slug（未命中回退默认国家），
//! 再逐字段顺序拉取累计序列。三次序列请求相互独立，
//! 顺序执行是沿用原始行为，可安全并行化。

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::final_segment;
use crate::application::UpstreamError;
use crate::domain::statistics::{report_window, series_delta, CaseField, DEFAULT_SLUG};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 统计增量响应
#[derive(Debug, Serialize)]
pub struct StatisticsResponse {
    #[serde(rename = "confirmedDelta")]
    pub confirmed_delta: i64,
    #[serde(rename = "deathsDelta")]
    pub deaths_delta: i64,
    #[serde(rename = "recoveredDelta")]
    pub recovered_delta: i64,
}

/// 查询病例增量统计
pub async fn lookup_statistics(
    State(state): State<Arc<AppState>>,
    Path(tail): Path<String>,
) -> Result<Json<StatisticsResponse>, ApiError> {
    let country_code = final_segment(&tail);

    let slug = state
        .covid_stats
        .country_slug(country_code)
        .await?
        .unwrap_or_else(|| DEFAULT_SLUG.to_string());

    let (from, to) = report_window();

    let mut deltas = [0i64; 3];
    for (i, field) in CaseField::ALL.iter().enumerate() {
        deltas[i] = field_delta(&state, &slug, *field, &from, &to).await?;
    }

    Ok(Json(StatisticsResponse {
        confirmed_delta: deltas[0],
        deaths_delta: deltas[1],
        recovered_delta: deltas[2],
    }))
}

/// 拉取单个字段的序列并计算增量
async fn field_delta(
    state: &AppState,
    slug: &str,
    field: CaseField,
    from: &str,
    to: &str,
) -> Result<i64, ApiError> {
    let records = state.covid_stats.case_series(slug, field, from, to).await?;
    let cases: Vec<i64> = records.iter().map(|record| record.cases).collect();

    series_delta(&cases).ok_or_else(|| {
        ApiError::from(UpstreamError::UnexpectedShape(format!(
            "empty case series for {}/{}",
            slug, field
        )))
    })
}
