//! Fake Upstream Clients - 用于测试的上游客户端
//!
//! 返回预设的固定响应，不发起真实 HTTP 调用

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::application::{
    CaseRecord, CountryLookupPort, CountryRecord, CovidStatsPort, Indicator, IndicatorsPort,
    TravelAdvisoryPort, UpstreamError,
};
use crate::domain::statistics::CaseField;

/// Fake 国家元数据查询
pub struct FakeCountryLookup {
    record: Option<CountryRecord>,
}

impl FakeCountryLookup {
    /// 始终命中，返回给定的两/三位代码
    pub fn found(code2: &str, code3: &str) -> Self {
        Self {
            record: Some(CountryRecord {
                alpha2_code: code2.to_string(),
                alpha3_code: code3.to_string(),
            }),
        }
    }

    /// 始终报告未找到
    pub fn not_found() -> Self {
        Self { record: None }
    }
}

#[async_trait]
impl CountryLookupPort for FakeCountryLookup {
    async fn lookup_by_name(&self, _name: &str) -> Result<Option<CountryRecord>, UpstreamError> {
        Ok(self.record.clone())
    }
}

/// Fake 旅行风险评分
pub struct FakeTravelAdvisory {
    score: Option<f64>,
}

impl FakeTravelAdvisory {
    /// 始终返回给定评分
    pub fn with_score(score: f64) -> Self {
        Self { score: Some(score) }
    }

    /// 模拟上游载荷缺少该国家（结构异常）
    pub fn missing_country() -> Self {
        Self { score: None }
    }
}

#[async_trait]
impl TravelAdvisoryPort for FakeTravelAdvisory {
    async fn advisory_score(&self, country_code: &str) -> Result<f64, UpstreamError> {
        self.score.ok_or_else(|| {
            UpstreamError::UnexpectedShape(format!(
                "advisory payload has no entry for '{}'",
                country_code
            ))
        })
    }
}

/// Fake 重新开放指标
pub struct FakeIndicators {
    indicators: Vec<Indicator>,
}

impl FakeIndicators {
    pub fn new(indicators: Vec<Indicator>) -> Self {
        Self { indicators }
    }
}

#[async_trait]
impl IndicatorsPort for FakeIndicators {
    async fn fetch_indicators(&self, _country_code: &str) -> Result<Vec<Indicator>, UpstreamError> {
        Ok(self.indicators.clone())
    }
}

/// Fake COVID 病例统计
///
/// 记录每次 case_series 调用使用的 slug，供测试断言回退行为
pub struct FakeCovidStats {
    slugs: Vec<(String, String)>,
    series: HashMap<CaseField, Vec<i64>>,
    requested_slugs: Mutex<Vec<String>>,
}

impl FakeCovidStats {
    pub fn new() -> Self {
        Self {
            slugs: Vec::new(),
            series: HashMap::new(),
            requested_slugs: Mutex::new(Vec::new()),
        }
    }

    /// 在国家列表中登记一条 (ISO2, slug) 映射
    pub fn with_slug(mut self, iso2: &str, slug: &str) -> Self {
        self.slugs.push((iso2.to_string(), slug.to_string()));
        self
    }

    /// 登记某字段的累计序列
    pub fn with_series(mut self, field: CaseField, cases: &[i64]) -> Self {
        self.series.insert(field, cases.to_vec());
        self
    }

    /// 已请求过序列的 slug 列表（按调用顺序）
    pub fn requested_slugs(&self) -> Vec<String> {
        self.requested_slugs.lock().expect("lock poisoned").clone()
    }
}

impl Default for FakeCovidStats {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CovidStatsPort for FakeCovidStats {
    async fn country_slug(&self, iso2: &str) -> Result<Option<String>, UpstreamError> {
        Ok(self
            .slugs
            .iter()
            .find(|(code, _)| code == iso2)
            .map(|(_, slug)| slug.clone()))
    }

    async fn case_series(
        &self,
        slug: &str,
        field: CaseField,
        _from: &str,
        _to: &str,
    ) -> Result<Vec<CaseRecord>, UpstreamError> {
        self.requested_slugs
            .lock()
            .expect("lock poisoned")
            .push(slug.to_string());

        let cases = self.series.get(&field).cloned().unwrap_or_default();
        Ok(cases.into_iter().map(|cases| CaseRecord { cases }).collect())
    }
}
