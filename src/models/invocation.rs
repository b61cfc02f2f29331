//! # 调用数据模型
//!
//! 描述一次批处理运行的不可变配置，以及每个视频文件对应的处理器调用请求。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 构建
//! - 被 `batch/runner.rs` 消费

use crate::error::{BatchError, Result};

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// 外部处理器命令（程序名 + 固定前置参数）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorCommand {
    /// 可执行程序
    pub program: String,
    /// 固定前置参数（例如脚本路径）
    pub leading_args: Vec<String>,
}

impl ProcessorCommand {
    /// 按空白切分命令字符串，例如 `python app.py`
    pub fn parse(command: &str) -> Result<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or_else(|| {
            BatchError::InvalidProcessor("processor command is empty".to_string())
        })?;

        Ok(ProcessorCommand {
            program,
            leading_args: parts.collect(),
        })
    }
}

impl std::fmt::Display for ProcessorCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.leading_args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// 一次运行的配置，启动时构建一次，之后只读
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// 视频目录
    pub directory: PathBuf,
    /// 表格文件
    pub spreadsheet: PathBuf,
    /// 转发给每次调用的额外参数（保持原始顺序）
    pub extra_args: Vec<String>,
    /// 外部处理器
    pub processor: ProcessorCommand,
    /// 只打印命令，不执行
    pub dry_run: bool,
    /// 执行前打印完整命令行
    pub verbose: bool,
    /// CSV 报告输出路径
    pub report: Option<PathBuf>,
    /// 是否显示进度条
    pub progress: bool,
}

impl RunConfig {
    /// 为单个视频文件构建调用请求
    pub fn request_for(&self, video_path: &Path, section: Option<String>) -> InvocationRequest {
        InvocationRequest {
            video_path: video_path.to_path_buf(),
            spreadsheet_path: self.spreadsheet.clone(),
            section,
            extra_args: self.extra_args.clone(),
        }
    }
}

/// 单个视频文件的处理器调用请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub video_path: PathBuf,
    pub spreadsheet_path: PathBuf,
    pub section: Option<String>,
    pub extra_args: Vec<String>,
}

impl InvocationRequest {
    /// 组装处理器参数：视频、表格、[--section 值]、转发参数
    pub fn to_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            self.video_path.clone().into_os_string(),
            self.spreadsheet_path.clone().into_os_string(),
        ];

        if let Some(ref section) = self.section {
            args.push("--section".into());
            args.push(section.into());
        }

        args.extend(self.extra_args.iter().map(OsString::from));
        args
    }

    /// 便于打印的参数列表
    pub fn display_args(&self) -> Vec<String> {
        self.to_args()
            .iter()
            .map(|a| {
                let s = a.to_string_lossy();
                if s.is_empty() || s.contains(char::is_whitespace) {
                    format!("\"{}\"", s)
                } else {
                    s.into_owned()
                }
            })
            .collect()
    }
}
