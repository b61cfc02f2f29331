//! # 批量执行器
//!
//! 依次为每个视频文件调用外部处理器。
//!
//! ## 功能
//! - 严格串行，逐个等待子进程结束
//! - 单个文件失败不会中断批处理
//! - 进度条显示与结果统计
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `batch/section.rs` 解析章节
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::collector::display_name;
use crate::batch::section::section_for_path;
use crate::models::{InvocationRequest, RunConfig};
use crate::utils::{output, progress};

use std::path::{Path, PathBuf};
use std::process::Command;

/// 单个文件处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessResult {
    /// 处理器返回 0
    Success,
    /// dry-run 模式下未执行
    Skipped,
    /// 非 0 退出、被信号终止或无法启动
    Failed { code: Option<i32>, reason: String },
}

/// 单个文件的结果记录
#[derive(Debug, Clone)]
pub struct FileOutcome {
    /// 文件名（含扩展名）
    pub file: String,
    /// 检测到的章节值
    pub section: Option<String>,
    /// 处理结果
    pub result: ProcessResult,
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 按处理顺序的结果
    pub outcomes: Vec<FileOutcome>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, outcome: FileOutcome) {
        match outcome.result {
            ProcessResult::Success => self.success += 1,
            ProcessResult::Skipped => self.skipped += 1,
            ProcessResult::Failed { .. } => self.failed += 1,
        }
        self.outcomes.push(outcome);
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner<'a> {
    config: &'a RunConfig,
}

impl<'a> BatchRunner<'a> {
    /// 创建新的批量执行器
    pub fn new(config: &'a RunConfig) -> Self {
        Self { config }
    }

    /// 依次处理文件列表
    pub fn run(&self, files: &[PathBuf]) -> BatchResult {
        let pb =
            progress::create_progress_bar(files.len() as u64, "Processing", self.config.progress);
        let mut batch_result = BatchResult::default();

        for file in files {
            let name = display_name(file);
            pb.set_message(name.clone());

            let outcome = pb.suspend(|| self.process_file(file, name));
            batch_result.merge(outcome);

            pb.inc(1);
        }

        pb.finish_and_clear();
        batch_result
    }

    /// 处理单个文件：解析章节、组装参数、调用处理器、报告结果
    fn process_file(&self, file: &Path, name: String) -> FileOutcome {
        output::print_info(&format!("Processing {}", name));

        let section = section_for_path(file);
        let request = self.config.request_for(file, section.clone());

        if let Some(ref value) = section {
            output::print_info(&format!("Detected section: {}", value));
            if value.is_empty() {
                output::print_warning(&format!(
                    "Section marker in '{}' has no number, passing an empty --section value",
                    name
                ));
            }
        }

        let result = if self.config.dry_run {
            let mut line = vec![self.config.processor.to_string()];
            line.extend(request.display_args());
            output::print_dry(&line.join(" "));
            ProcessResult::Skipped
        } else {
            if self.config.verbose {
                let mut args = self.config.processor.leading_args.clone();
                args.extend(request.display_args());
                output::print_command(&self.config.processor.program, &args);
            }
            let result = self.invoke(&request);
            match &result {
                ProcessResult::Success => output::print_success(&format!("Completed {}", name)),
                ProcessResult::Failed { reason, .. } => {
                    output::print_error(&format!("Failed {} ({})", name, reason))
                }
                ProcessResult::Skipped => {}
            }
            result
        };

        FileOutcome {
            file: name,
            section,
            result,
        }
    }

    /// 启动处理器并同步等待退出
    fn invoke(&self, request: &InvocationRequest) -> ProcessResult {
        let status = Command::new(&self.config.processor.program)
            .args(&self.config.processor.leading_args)
            .args(request.to_args())
            .status();

        match status {
            Ok(status) if status.success() => ProcessResult::Success,
            Ok(status) => {
                let reason = match status.code() {
                    Some(code) => format!("exit code {}", code),
                    None => "terminated by signal".to_string(),
                };
                ProcessResult::Failed {
                    code: status.code(),
                    reason,
                }
            }
            Err(e) => ProcessResult::Failed {
                code: None,
                reason: format!("could not start '{}': {}", self.config.processor.program, e),
            },
        }
    }
}
