//! Hello Handler
//!
//! 健康检查端点

/// Hello endpoint - 固定响应的存活检查
pub async fn hello() -> &'static str {
    "Hello worker!"
}
