//! HTTP Handlers
//!
//! 五个路由的 Handler，每个文件一个

mod code;
mod hello;
mod risk;
mod statistics;
mod status;

pub use code::*;
pub use hello::*;
pub use risk::*;
pub use statistics::*;
pub use status::*;

/// 取通配尾部的最后一个路径段
///
/// 路由模式只匹配前缀，剩余部分可能还含 `/`，沿用原始的
/// "取最后一段" 解析方式
pub(crate) fn final_segment(tail: &str) -> &str {
    match tail.rfind('/') {
        Some(idx) => &tail[idx + 1..],
        None => tail,
    }
}

#[cfg(test)]
mod tests {
    use super::final_segment;

    #[test]
    fn test_final_segment_plain() {
        assert_eq!(final_segment("France"), "France");
    }

    #[test]
    fn test_final_segment_nested() {
        assert_eq!(final_segment("extra/FR"), "FR");
    }

    #[test]
    fn test_final_segment_trailing_slash() {
        assert_eq!(final_segment("FR/"), "");
    }
}
