//! Indicators Port - 欧盟重新开放指标抽象

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::error::UpstreamError;

/// 单个指标记录
///
/// `value` 在上游可能是数字或字符串，原样透传；
/// `comment` 缺失视为结构异常（解码失败）
#[derive(Debug, Clone, Deserialize)]
pub struct Indicator {
    /// 人类可读的指标名称（未清洗）
    #[serde(rename = "indicator_name")]
    pub name: String,

    /// 指标值，原样透传给客户端
    #[serde(default)]
    pub value: serde_json::Value,

    /// 指标注释
    pub comment: String,
}

/// Indicators Port
#[async_trait]
pub trait IndicatorsPort: Send + Sync {
    /// 获取指定三位国家代码的全部固定指标
    async fn fetch_indicators(&self, country_code: &str) -> Result<Vec<Indicator>, UpstreamError>;
}
