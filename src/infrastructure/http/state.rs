//! Application State
//!
//! 每个请求只读共享的四个上游端口

use std::sync::Arc;

use crate::application::{CountryLookupPort, CovidStatsPort, IndicatorsPort, TravelAdvisoryPort};

/// 应用状态
///
/// 启动时构建一次，之后不可变；Handler 之间没有共享可变状态
pub struct AppState {
    pub country_lookup: Arc<dyn CountryLookupPort>,
    pub travel_advisory: Arc<dyn TravelAdvisoryPort>,
    pub indicators: Arc<dyn IndicatorsPort>,
    pub covid_stats: Arc<dyn CovidStatsPort>,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        country_lookup: Arc<dyn CountryLookupPort>,
        travel_advisory: Arc<dyn TravelAdvisoryPort>,
        indicators: Arc<dyn IndicatorsPort>,
        covid_stats: Arc<dyn CovidStatsPort>,
    ) -> Self {
        Self {
            country_lookup,
            travel_advisory,
            indicators,
            covid_stats,
        }
    }
}
