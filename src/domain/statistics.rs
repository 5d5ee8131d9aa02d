//! 病例统计
//!
//! 累计病例序列的增量计算，以及查询上游时间序列用的 14 天 UTC 时间窗口

use chrono::{DateTime, Duration, Utc};

/// 统计时间窗口长度（天）
pub const WINDOW_DAYS: i64 = 14;

/// 国家代码在上游列表中找不到时回退的 slug
pub const DEFAULT_SLUG: &str = "france";

/// 统计字段
///
/// 每个字段对应上游一条独立的时间序列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseField {
    Confirmed,
    Deaths,
    Recovered,
}

impl CaseField {
    /// 全部字段，按响应中出现的顺序
    pub const ALL: [CaseField; 3] = [
        CaseField::Confirmed,
        CaseField::Deaths,
        CaseField::Recovered,
    ];

    /// 上游 URL 中使用的字段名
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseField::Confirmed => "confirmed",
            CaseField::Deaths => "deaths",
            CaseField::Recovered => "recovered",
        }
    }
}

impl std::fmt::Display for CaseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 计算累计序列的增量：最后一条减第一条
///
/// 序列为空时返回 None（上游返回空窗口）。序列只有一条时增量为 0。
pub fn series_delta(cases: &[i64]) -> Option<i64> {
    let first = cases.first()?;
    let last = cases.last()?;
    Some(last - first)
}

/// 当前统计时间窗口：14 天前到现在
///
/// 两端都是 UTC 零点锚定的日期字符串，如 `2020-06-01T00:00:00Z`
pub fn report_window() -> (String, String) {
    report_window_at(Utc::now())
}

/// 以指定时刻为终点的统计时间窗口（便于测试）
pub fn report_window_at(now: DateTime<Utc>) -> (String, String) {
    let start = now - Duration::days(WINDOW_DAYS);
    (midnight_anchored(&start), midnight_anchored(&now))
}

/// UTC 零点锚定的日期字符串
fn midnight_anchored(instant: &DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT00:00:00Z").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_delta_is_last_minus_first() {
        assert_eq!(series_delta(&[10, 15, 20]), Some(10));
    }

    #[test]
    fn test_delta_can_be_negative() {
        assert_eq!(series_delta(&[20, 5]), Some(-15));
    }

    #[test]
    fn test_delta_single_record_is_zero() {
        assert_eq!(series_delta(&[7]), Some(0));
    }

    #[test]
    fn test_delta_empty_series_is_none() {
        assert_eq!(series_delta(&[]), None);
    }

    #[test]
    fn test_report_window_format() {
        let now = Utc.with_ymd_and_hms(2020, 6, 15, 13, 45, 9).unwrap();
        let (start, end) = report_window_at(now);
        assert_eq!(start, "2020-06-01T00:00:00Z");
        assert_eq!(end, "2020-06-15T00:00:00Z");
    }

    #[test]
    fn test_report_window_crosses_month_boundary() {
        let now = Utc.with_ymd_and_hms(2021, 3, 5, 0, 0, 0).unwrap();
        let (start, end) = report_window_at(now);
        assert_eq!(start, "2021-02-19T00:00:00Z");
        assert_eq!(end, "2021-03-05T00:00:00Z");
    }

    #[test]
    fn test_case_field_names() {
        let names: Vec<_> = CaseField::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, ["confirmed", "deaths", "recovered"]);
    }
}
