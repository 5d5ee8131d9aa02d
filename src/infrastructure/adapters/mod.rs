//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现：四个上游公共 API 的 reqwest 客户端，
//! 以及测试用的 Fake 实现

mod covid19;
mod fake;
mod reopen_eu;
mod rest_countries;
mod travel_advisory;

pub use covid19::{Covid19Client, Covid19ClientConfig};
pub use fake::{FakeCountryLookup, FakeCovidStats, FakeIndicators, FakeTravelAdvisory};
pub use reopen_eu::{ReopenEuClient, ReopenEuClientConfig};
pub use rest_countries::{RestCountriesClient, RestCountriesClientConfig};
pub use travel_advisory::{TravelAdvisoryClient, TravelAdvisoryClientConfig};

use crate::application::UpstreamError;

/// 把 reqwest 传输错误映射为上游错误
pub(crate) fn transport_error(err: reqwest::Error) -> UpstreamError {
    if err.is_timeout() {
        UpstreamError::Timeout
    } else if err.is_connect() {
        UpstreamError::Network(format!("Cannot connect to upstream: {}", err))
    } else {
        UpstreamError::Network(err.to_string())
    }
}
