//! Travel Advisory Port - 旅行风险评分抽象

use async_trait::async_trait;

use crate::application::error::UpstreamError;

/// Travel Advisory Port
#[async_trait]
pub trait TravelAdvisoryPort: Send + Sync {
    /// 查询指定两位国家代码的风险评分（0.0 - 5.0）
    ///
    /// 上游载荷中没有该国家代码时返回 `UnexpectedShape`
    async fn advisory_score(&self, country_code: &str) -> Result<f64, UpstreamError>;
}
