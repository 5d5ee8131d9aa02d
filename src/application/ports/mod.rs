//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口，每个上游 API 一个端口

mod country_lookup;
mod covid_stats;
mod indicators;
mod travel_advisory;

pub use country_lookup::{CountryLookupPort, CountryRecord};
pub use covid_stats::{CaseRecord, CovidStatsPort};
pub use indicators::{Indicator, IndicatorsPort};
pub use travel_advisory::TravelAdvisoryPort;
