//! # 批量处理模块
//!
//! 提供视频文件的批量调用能力。
//!
//! ## 功能
//! - 按扩展名分组收集视频文件
//! - 从文件名解析章节标记
//! - 串行调用外部处理器，失败不中断
//! - 汇总表格与 CSV 报告
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 使用
//! - 使用 `glob`, `regex`, `indicatif`, `tabled`, `csv`

pub mod collector;
pub mod report;
pub mod runner;
pub mod section;

pub use collector::VideoCollector;
pub use runner::BatchRunner;
