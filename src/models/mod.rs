//! # 数据模型模块
//!
//! 定义运行配置与处理器调用请求。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `batch/` 使用
//! - 子模块: invocation

pub mod invocation;

pub use invocation::{InvocationRequest, ProcessorCommand, RunConfig};
