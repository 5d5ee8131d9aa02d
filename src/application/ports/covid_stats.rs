//! Covid Stats Port - COVID 病例统计抽象
//!
//! 两个操作对应上游的两类端点：国家列表（解析 slug）和按字段的时间序列

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::error::UpstreamError;
use crate::domain::statistics::CaseField;

/// 时间序列中的一条记录
///
/// 只关心累计计数，日期等其余字段忽略
#[derive(Debug, Clone, Deserialize)]
pub struct CaseRecord {
    /// 累计计数
    #[serde(rename = "Cases")]
    pub cases: i64,
}

/// Covid Stats Port
#[async_trait]
pub trait CovidStatsPort: Send + Sync {
    /// 在上游国家列表中线性查找两位代码对应的 slug
    ///
    /// 扫完整个列表仍未命中时返回 `Ok(None)`，由调用方决定回退
    async fn country_slug(&self, iso2: &str) -> Result<Option<String>, UpstreamError>;

    /// 获取指定 slug、指定字段、指定时间窗口的累计序列
    ///
    /// `from` / `to` 为 UTC 零点锚定的日期字符串
    async fn case_series(
        &self,
        slug: &str,
        field: CaseField,
        from: &str,
        to: &str,
    ) -> Result<Vec<CaseRecord>, UpstreamError>;
}
