//! Country Lookup Port - 国家元数据查询抽象
//!
//! 按自由文本名称查询国家的两/三位代码，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::error::UpstreamError;

/// 国家元数据记录
///
/// 只保留本服务需要的两个代码字段，其余上游字段忽略
#[derive(Debug, Clone, Deserialize)]
pub struct CountryRecord {
    /// 两位国家代码（ISO 3166-1 alpha-2）
    #[serde(rename = "alpha2Code")]
    pub alpha2_code: String,

    /// 三位国家代码（ISO 3166-1 alpha-3）
    #[serde(rename = "alpha3Code")]
    pub alpha3_code: String,
}

/// Country Lookup Port
#[async_trait]
pub trait CountryLookupPort: Send + Sync {
    /// 按名称查询国家
    ///
    /// - `Ok(Some)` - 上游找到至少一条记录，返回第一条
    /// - `Ok(None)` - 上游明确报告未找到（逻辑缺失，不是错误）
    async fn lookup_by_name(&self, name: &str) -> Result<Option<CountryRecord>, UpstreamError>;
}
