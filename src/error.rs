//! # 统一错误处理模块
//!
//! 定义 clipbatch 的运行级（致命）错误类型，使用 `thiserror` 派生。
//! 单个文件处理失败不属于错误，见 `batch::runner::ProcessResult`。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// clipbatch 统一错误类型
#[derive(Error, Debug)]
pub enum BatchError {
    // ─────────────────────────────────────────────────────────────
    // 输入校验错误
    // ─────────────────────────────────────────────────────────────
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Spreadsheet file not found: {path}")]
    FileNotFound { path: String },

    #[error("No video files found in {path}")]
    NoVideoFiles { path: String },

    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid processor command: {0}")]
    InvalidProcessor(String),

    #[error("Invalid file pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read directory: {path}")]
    DirectoryReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, BatchError>;
