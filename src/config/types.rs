//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 上游 API 配置
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8787
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 上游 API 配置
///
/// 四个上游均为只读的公共 JSON API，这里只保存 Base URL 和共享超时。
/// Base URL 可重定向到测试桩服务。
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// 国家元数据 API（按名称查询两/三位国家代码）
    #[serde(default = "default_country_api_url")]
    pub country_api_url: String,

    /// 旅行风险评分 API
    #[serde(default = "default_advisory_api_url")]
    pub advisory_api_url: String,

    /// 欧盟重新开放指标 API
    #[serde(default = "default_reopen_api_url")]
    pub reopen_api_url: String,

    /// COVID 病例统计 API（国家列表 + 时间序列）
    #[serde(default = "default_covid_api_url")]
    pub covid_api_url: String,

    /// 请求超时时间（秒），四个上游共享
    #[serde(default = "default_upstream_timeout")]
    pub timeout_secs: u64,
}

fn default_country_api_url() -> String {
    "https://restcountries.eu/rest/v2".to_string()
}

fn default_advisory_api_url() -> String {
    "https://www.travel-advisory.info".to_string()
}

fn default_reopen_api_url() -> String {
    "https://reopen.europa.eu/api/covid/v1".to_string()
}

fn default_covid_api_url() -> String {
    "https://api.covid19api.com".to_string()
}

fn default_upstream_timeout() -> u64 {
    30
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            country_api_url: default_country_api_url(),
            advisory_api_url: default_advisory_api_url(),
            reopen_api_url: default_reopen_api_url(),
            covid_api_url: default_covid_api_url(),
            timeout_secs: default_upstream_timeout(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8787);
        assert_eq!(config.upstream.country_api_url, "https://restcountries.eu/rest/v2");
        assert_eq!(config.upstream.timeout_secs, 30);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8787");
    }
}
