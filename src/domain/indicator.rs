//! 重新开放指标
//!
//! 欧盟重新开放 API 的指标 ID 表，以及指标名称清洗与注释截断规则

/// 请求上游时携带的固定指标 ID 集合
///
/// 覆盖出行限制（2001-2011）、卫生措施（3001-3010）、服务开放（4001-4010）
pub const INDICATOR_IDS: [u16; 31] = [
    2001, 2002, 2003, 2004, 2005, 2006, 2007, 2008, 2009, 2010, 2011, //
    3001, 3002, 3003, 3004, 3005, 3006, 3007, 3008, 3009, 3010, //
    4001, 4002, 4003, 4004, 4005, 4006, 4007, 4008, 4009, 4010,
];

/// `help` 分支使用的固定参考国家代码
pub const REFERENCE_COUNTRY: &str = "FRA";

/// 指标 ID 列表的 URL 片段（逗号分隔，按表内顺序）
pub fn indicator_ids_segment() -> String {
    INDICATOR_IDS
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// 检查字符是否需要从指标名称中剔除
#[inline]
fn is_stripped(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '|' | '?' | ',' | '"' | '(' | ')' | '”' | '“' | '.' | 'é' | '-' | '/'
    )
}

/// 清洗人类可读的指标名称
///
/// 剔除固定字符集（空格、标点、中文引号、é 等），结果用作响应 JSON 的键
pub fn sanitize_indicator_name(name: &str) -> String {
    name.chars().filter(|ch| !is_stripped(*ch)).collect()
}

/// 按 `maxlength` 规则处理指标注释
///
/// - `maxlength` 存在且非负：截断到该字符数并追加 `"..."`，
///   即使注释本来就没超长也追加（保留原始行为）
/// - `maxlength` 缺失或为负：原样返回
pub fn present_comment(comment: &str, maxlength: Option<i64>) -> String {
    match maxlength {
        Some(limit) if limit >= 0 => {
            let mut truncated: String = comment.chars().take(limit as usize).collect();
            truncated.push_str("...");
            truncated
        }
        _ => comment.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_ids_segment() {
        let segment = indicator_ids_segment();
        assert!(segment.starts_with("2001,2002"));
        assert!(segment.ends_with("4009,4010"));
        assert_eq!(segment.matches(',').count(), 30);
    }

    #[test]
    fn test_sanitize_strips_full_character_set() {
        let name = "Mandatory quarantine? (14 days) | \"entry\" - rules, déconfinement. a/b ”quote“";
        let sanitized = sanitize_indicator_name(name);
        for ch in [' ', '|', '?', ',', '"', '(', ')', '”', '“', '.', 'é', '-', '/'] {
            assert!(!sanitized.contains(ch), "'{}' should be stripped", ch);
        }
        assert!(sanitized.contains("Mandatoryquarantine"));
        assert!(sanitized.contains("dconfinement"));
    }

    #[test]
    fn test_sanitize_keeps_other_characters() {
        assert_eq!(sanitize_indicator_name("Open123!"), "Open123!");
    }

    #[test]
    fn test_comment_truncated_with_ellipsis() {
        assert_eq!(
            present_comment("This is a long comment", Some(5)),
            "This ..."
        );
    }

    #[test]
    fn test_comment_shorter_than_limit_still_gets_ellipsis() {
        assert_eq!(present_comment("Hi", Some(10)), "Hi...");
    }

    #[test]
    fn test_comment_unmodified_without_maxlength() {
        assert_eq!(
            present_comment("This is a long comment", None),
            "This is a long comment"
        );
    }

    #[test]
    fn test_negative_maxlength_disables_truncation() {
        assert_eq!(
            present_comment("This is a long comment", Some(-1)),
            "This is a long comment"
        );
    }

    #[test]
    fn test_zero_maxlength_yields_bare_ellipsis() {
        assert_eq!(present_comment("anything", Some(0)), "...");
    }
}
