//! Covid19 Client - COVID 病例统计
//!
//! 实现 CovidStatsPort trait
//!
//! 上游 API:
//! GET {base}/countries
//!   Response: [{"Country": "...", "Slug": "...", "ISO2": "FR"}]
//! GET {base}/country/{slug}/status/{field}?from={start}&to={end}
//!   Response: [{"Cases": 123, "Date": "..."}]

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::transport_error;
use crate::application::{CaseRecord, CovidStatsPort, UpstreamError};
use crate::domain::statistics::CaseField;

/// Covid19 客户端配置
#[derive(Debug, Clone)]
pub struct Covid19ClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for Covid19ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.covid19api.com".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Covid19 客户端
pub struct Covid19Client {
    client: Client,
    config: Covid19ClientConfig,
}

/// 国家列表中的一条记录
#[derive(Debug, Deserialize)]
struct CountryEntry {
    #[serde(rename = "ISO2")]
    iso2: String,
    #[serde(rename = "Slug")]
    slug: String,
}

impl Covid19Client {
    /// 创建新的客户端
    pub fn new(config: Covid19ClientConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn countries_url(&self) -> String {
        format!("{}/countries", self.config.base_url)
    }

    fn series_url(&self, slug: &str, field: CaseField, from: &str, to: &str) -> String {
        format!(
            "{}/country/{}/status/{}?from={}&to={}",
            self.config.base_url, slug, field, from, to
        )
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, UpstreamError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Service(format!(
                "covid API returned HTTP {}",
                status
            )));
        }

        response
            .json()
            .await
            .map_err(|e| UpstreamError::UnexpectedShape(e.to_string()))
    }
}

#[async_trait]
impl CovidStatsPort for Covid19Client {
    async fn country_slug(&self, iso2: &str) -> Result<Option<String>, UpstreamError> {
        let url = self.countries_url();
        tracing::debug!(url = %url, iso2 = %iso2, "Resolving country slug");

        let countries: Vec<CountryEntry> = self.fetch_json(&url).await?;
        let slug = countries
            .into_iter()
            .find(|entry| entry.iso2 == iso2)
            .map(|entry| entry.slug);

        if slug.is_none() {
            tracing::debug!(iso2 = %iso2, "Country not in upstream list");
        }

        Ok(slug)
    }

    async fn case_series(
        &self,
        slug: &str,
        field: CaseField,
        from: &str,
        to: &str,
    ) -> Result<Vec<CaseRecord>, UpstreamError> {
        let url = self.series_url(slug, field, from, to);
        tracing::debug!(url = %url, "Fetching case series");

        self.fetch_json(&url).await
    }
}
