//! Travel Advisory Client - 旅行风险评分
//!
//! 实现 TravelAdvisoryPort trait
//!
//! 上游 API:
//! GET {base}/api?countrycode={code}
//! Response: {"data": {"{code}": {"advisory": {"score": 3.5, ...}, ...}}, ...}

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use super::transport_error;
use crate::application::{TravelAdvisoryPort, UpstreamError};

/// Travel Advisory 客户端配置
#[derive(Debug, Clone)]
pub struct TravelAdvisoryClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for TravelAdvisoryClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.travel-advisory.info".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Travel Advisory 客户端
pub struct TravelAdvisoryClient {
    client: Client,
    config: TravelAdvisoryClientConfig,
}

#[derive(Debug, Deserialize)]
struct AdvisoryBody {
    data: HashMap<String, AdvisoryEntry>,
}

#[derive(Debug, Deserialize)]
struct AdvisoryEntry {
    advisory: Advisory,
}

#[derive(Debug, Deserialize)]
struct Advisory {
    score: f64,
}

impl TravelAdvisoryClient {
    /// 创建新的客户端
    pub fn new(config: TravelAdvisoryClientConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn advisory_url(&self, country_code: &str) -> String {
        format!("{}/api?countrycode={}", self.config.base_url, country_code)
    }
}

#[async_trait]
impl TravelAdvisoryPort for TravelAdvisoryClient {
    async fn advisory_score(&self, country_code: &str) -> Result<f64, UpstreamError> {
        let url = self.advisory_url(country_code);
        tracing::debug!(url = %url, "Fetching travel advisory score");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Service(format!(
                "advisory API returned HTTP {}",
                status
            )));
        }

        let body: AdvisoryBody = response
            .json()
            .await
            .map_err(|e| UpstreamError::UnexpectedShape(e.to_string()))?;

        extract_score(&body, country_code)
    }
}

/// 从载荷中取出指定国家的评分，缺键视为结构异常
fn extract_score(body: &AdvisoryBody, country_code: &str) -> Result<f64, UpstreamError> {
    body.data
        .get(country_code)
        .map(|entry| entry.advisory.score)
        .ok_or_else(|| {
            UpstreamError::UnexpectedShape(format!(
                "advisory payload has no entry for '{}'",
                country_code
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = TravelAdvisoryClientConfig::default();
        assert_eq!(config.base_url, "https://www.travel-advisory.info");
    }

    #[test]
    fn test_extract_score() {
        let body: AdvisoryBody = serde_json::from_str(
            r#"{"data":{"FR":{"iso_alpha2":"FR","advisory":{"score":3.2,"sources_active":5}}}}"#,
        )
        .unwrap();
        assert_eq!(extract_score(&body, "FR").unwrap(), 3.2);
    }

    #[test]
    fn test_missing_country_is_shape_error() {
        let body: AdvisoryBody = serde_json::from_str(r#"{"data":{}}"#).unwrap();
        assert!(matches!(
            extract_score(&body, "FR"),
            Err(UpstreamError::UnexpectedShape(_))
        ));
    }
}
