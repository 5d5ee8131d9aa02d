//! REST Countries Client - 国家元数据查询
//!
//! 实现 CountryLookupPort trait，通过 HTTP 调用 REST Countries API
//!
//! 上游 API:
//! GET {base}/name/{name}
//! Response: 国家记录数组；未找到时返回 `{"status": 404, ...}` 对象
//! （上游把"未找到"编码在响应体里，因此这里不按 HTTP 状态码短路，
//! 而是对响应体做结构化解码）

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::transport_error;
use crate::application::{CountryLookupPort, CountryRecord, UpstreamError};

/// REST Countries 客户端配置
#[derive(Debug, Clone)]
pub struct RestCountriesClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for RestCountriesClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://restcountries.eu/rest/v2".to_string(),
            timeout_secs: 30,
        }
    }
}

/// REST Countries 客户端
pub struct RestCountriesClient {
    client: Client,
    config: RestCountriesClientConfig,
}

/// 按名称查询的两种响应体形态
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LookupBody {
    /// 命中：国家记录数组
    Matches(Vec<CountryRecord>),
    /// 未命中：带 status 字段的错误对象
    Status { status: i64 },
}

impl RestCountriesClient {
    /// 创建新的客户端
    pub fn new(config: RestCountriesClientConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn name_url(&self, name: &str) -> String {
        format!("{}/name/{}", self.config.base_url, name)
    }
}

#[async_trait]
impl CountryLookupPort for RestCountriesClient {
    async fn lookup_by_name(&self, name: &str) -> Result<Option<CountryRecord>, UpstreamError> {
        let url = self.name_url(name);
        tracing::debug!(url = %url, "Looking up country by name");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;

        let body: LookupBody = response
            .json()
            .await
            .map_err(|e| UpstreamError::UnexpectedShape(e.to_string()))?;

        decode_lookup(body, name)
    }
}

/// 解码查询响应：取第一条记录，404 视为逻辑未找到
fn decode_lookup(body: LookupBody, name: &str) -> Result<Option<CountryRecord>, UpstreamError> {
    match body {
        LookupBody::Matches(records) => {
            let first = records.into_iter().next().ok_or_else(|| {
                UpstreamError::UnexpectedShape(format!("empty match list for '{}'", name))
            })?;
            tracing::debug!(
                name = %name,
                code2 = %first.alpha2_code,
                code3 = %first.alpha3_code,
                "Country lookup matched"
            );
            Ok(Some(first))
        }
        LookupBody::Status { status: 404 } => {
            tracing::debug!(name = %name, "Country lookup reported not found");
            Ok(None)
        }
        LookupBody::Status { status } => Err(UpstreamError::Service(format!(
            "country lookup returned status {}",
            status
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> LookupBody {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_config_default() {
        let config = RestCountriesClientConfig::default();
        assert_eq!(config.base_url, "https://restcountries.eu/rest/v2");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_decode_first_match() {
        let body = parse(
            r#"[{"name":"France","alpha2Code":"FR","alpha3Code":"FRA"},
                {"name":"French Guiana","alpha2Code":"GF","alpha3Code":"GUF"}]"#,
        );
        let record = decode_lookup(body, "france").unwrap().unwrap();
        assert_eq!(record.alpha2_code, "FR");
        assert_eq!(record.alpha3_code, "FRA");
    }

    #[test]
    fn test_decode_not_found_body() {
        let body = parse(r#"{"status":404,"message":"Not Found"}"#);
        assert!(decode_lookup(body, "atlantis").unwrap().is_none());
    }

    #[test]
    fn test_decode_other_status_is_service_error() {
        let body = parse(r#"{"status":400,"message":"Bad Request"}"#);
        assert!(matches!(
            decode_lookup(body, "x"),
            Err(UpstreamError::Service(_))
        ));
    }

    #[test]
    fn test_decode_empty_match_list_is_shape_error() {
        let body = parse("[]");
        assert!(matches!(
            decode_lookup(body, "x"),
            Err(UpstreamError::UnexpectedShape(_))
        ));
    }
}
