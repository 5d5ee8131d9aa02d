//! Wayfare - 旅行数据聚合边缘服务
//!
//! 按路径前缀把请求分发到四个上游公共 API 的聚合 Handler：
//! - 国家元数据（两/三位代码）
//! - 旅行风险评分
//! - 欧盟重新开放指标
//! - COVID 病例增量统计

use std::sync::Arc;

use wayfare::config::{load_config, print_config};
use wayfare::infrastructure::adapters::{
    Covid19Client, Covid19ClientConfig, ReopenEuClient, ReopenEuClientConfig, RestCountriesClient,
    RestCountriesClientConfig, TravelAdvisoryClient, TravelAdvisoryClientConfig,
};
use wayfare::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},wayfare={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Wayfare - 旅行数据聚合边缘服务");
    print_config(&config);

    // 创建四个上游客户端
    let upstream = &config.upstream;
    let country_lookup = Arc::new(RestCountriesClient::new(RestCountriesClientConfig {
        base_url: upstream.country_api_url.clone(),
        timeout_secs: upstream.timeout_secs,
    })?);
    let travel_advisory = Arc::new(TravelAdvisoryClient::new(TravelAdvisoryClientConfig {
        base_url: upstream.advisory_api_url.clone(),
        timeout_secs: upstream.timeout_secs,
    })?);
    let indicators = Arc::new(ReopenEuClient::new(ReopenEuClientConfig {
        base_url: upstream.reopen_api_url.clone(),
        timeout_secs: upstream.timeout_secs,
    })?);
    let covid_stats = Arc::new(Covid19Client::new(Covid19ClientConfig {
        base_url: upstream.covid_api_url.clone(),
        timeout_secs: upstream.timeout_secs,
    })?);

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(country_lookup, travel_advisory, indicators, covid_stats);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
