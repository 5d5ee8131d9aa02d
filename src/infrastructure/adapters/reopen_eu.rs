//! Reopen EU Client - 欧盟重新开放指标
//!
//! 实现 IndicatorsPort trait
//!
//! 上游 API:
//! GET {base}/eutcdata/data/en/{code}/{id1,id2,...}
//! Response: [{"indicators": [{"indicator_name": "...", "value": ..., "comment": "..."}]}]
//! 只消费数组的第一个元素

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::transport_error;
use crate::application::{Indicator, IndicatorsPort, UpstreamError};
use crate::domain::indicator::indicator_ids_segment;

/// Reopen EU 客户端配置
#[derive(Debug, Clone)]
pub struct ReopenEuClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for ReopenEuClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://reopen.europa.eu/api/covid/v1".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Reopen EU 客户端
pub struct ReopenEuClient {
    client: Client,
    config: ReopenEuClientConfig,
}

/// 响应数组的元素：一个国家的数据块
#[derive(Debug, Deserialize)]
struct DataBlock {
    indicators: Vec<Indicator>,
}

impl ReopenEuClient {
    /// 创建新的客户端
    pub fn new(config: ReopenEuClientConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn data_url(&self, country_code: &str) -> String {
        format!(
            "{}/eutcdata/data/en/{}/{}",
            self.config.base_url,
            country_code,
            indicator_ids_segment()
        )
    }
}

#[async_trait]
impl IndicatorsPort for ReopenEuClient {
    async fn fetch_indicators(&self, country_code: &str) -> Result<Vec<Indicator>, UpstreamError> {
        let url = self.data_url(country_code);
        tracing::debug!(url = %url, "Fetching reopening indicators");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Service(format!(
                "reopen API returned HTTP {}",
                status
            )));
        }

        let blocks: Vec<DataBlock> = response
            .json()
            .await
            .map_err(|e| UpstreamError::UnexpectedShape(e.to_string()))?;

        let block = blocks.into_iter().next().ok_or_else(|| {
            UpstreamError::UnexpectedShape(format!("no data block for '{}'", country_code))
        })?;

        tracing::debug!(
            country_code = %country_code,
            indicator_count = block.indicators.len(),
            "Indicators fetched"
        );

        Ok(block.indicators)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_contains_full_indicator_list() {
        let client = ReopenEuClient::new(ReopenEuClientConfig::default()).unwrap();
        let url = client.data_url("FRA");
        assert!(url.starts_with("https://reopen.europa.eu/api/covid/v1/eutcdata/data/en/FRA/2001,"));
        assert!(url.ends_with("4010"));
    }

    #[test]
    fn test_decode_block() {
        let blocks: Vec<DataBlock> = serde_json::from_str(
            r#"[{"indicators":[
                {"indicator_name":"Quarantine (mandatory)","value":"yes","comment":"14 days"},
                {"indicator_name":"Restaurants","value":1,"comment":"Open with limits"}
            ]}]"#,
        )
        .unwrap();
        let block = &blocks[0];
        assert_eq!(block.indicators.len(), 2);
        assert_eq!(block.indicators[0].name, "Quarantine (mandatory)");
        assert_eq!(block.indicators[1].value, serde_json::json!(1));
    }
}
