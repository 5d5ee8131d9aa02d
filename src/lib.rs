//! Wayfare - 旅行数据聚合边缘服务
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Indicator: 重新开放指标的名称清洗与注释截断
//! - Statistics: 累计病例序列的增量计算与时间窗口
//!
//! 应用层 (application/):
//! - Ports: 上游端口定义（CountryLookup, TravelAdvisory, Indicators, CovidStats）
//! - Error: 统一的上游错误类型
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（路由表 + 五个 Handler）
//! - Adapters: 四个上游公共 API 的 reqwest 客户端 + 测试用 Fake

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
