//! Domain Layer - 领域层
//!
//! 纯函数计算，不做任何 I/O：
//! - indicator: 指标 ID 表、指标名称清洗、注释截断
//! - statistics: 病例序列增量计算、14 天 UTC 时间窗口

pub mod indicator;
pub mod statistics;

pub use indicator::{
    indicator_ids_segment, present_comment, sanitize_indicator_name, INDICATOR_IDS,
    REFERENCE_COUNTRY,
};
pub use statistics::{report_window, series_delta, CaseField, DEFAULT_SLUG, WINDOW_DAYS};
