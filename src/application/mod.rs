//! 应用层
//!
//! 包含：
//! - ports: 六边形架构端口定义（四个上游 API 的抽象接口）
//! - error: 统一的上游错误类型

pub mod error;
pub mod ports;

pub use error::UpstreamError;
pub use ports::{
    CaseRecord, CountryLookupPort, CountryRecord, CovidStatsPort, Indicator, IndicatorsPort,
    TravelAdvisoryPort,
};
