//! 应用层错误定义
//!
//! 四个上游端口共享的错误类型

use thiserror::Error;

/// 上游调用错误
///
/// `UnexpectedShape` 对应上游返回了无法按预期结构解码的 JSON
/// （缺键、空序列等），取代对动态 JSON 的盲目索引
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    Service(String),

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}
