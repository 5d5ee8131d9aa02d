//! HTTP Routes
//!
//! 路由表 - 启动时构建一次，之后不可变
//!
//! API Endpoints:
//! - /hello                          GET  存活检查，固定响应
//! - /code/{name}                    GET  按名称查询两/三位国家代码
//! - /risk/{code}                    GET  旅行风险评分
//! - /status/{code}[?maxlength=N]    GET  重新开放指标（code=help 时返回 HTML 键列表）
//! - /statistics/{code}              GET  近 14 天确诊/死亡/康复增量
//! - 其余任何方法/路径               →    404 Not Found
//!
//! 四个业务路由用通配符匹配任意后缀（只要求前缀命中），
//! Handler 自行取最后一个路径段；已注册路径上的非 GET 方法
//! 也回落到 404 而不是 405

use axum::{http::StatusCode, routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/hello", get(handlers::hello).fallback(not_found))
        .route("/code/*name", get(handlers::lookup_code).fallback(not_found))
        .route("/risk/*code", get(handlers::lookup_risk).fallback(not_found))
        .route(
            "/status/*code",
            get(handlers::lookup_status).fallback(not_found),
        )
        .route(
            "/statistics/*code",
            get(handlers::lookup_statistics).fallback(not_found),
        )
        .fallback(not_found)
}

/// 默认的未匹配响应
async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
