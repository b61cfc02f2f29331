//! # 命令执行模块
//!
//! 实现一次批处理运行：校验输入、收集视频、逐个调用处理器、汇总结果。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `models/`, `batch/`, `utils/`

use crate::batch::{report, BatchRunner, VideoCollector};
use crate::cli::Cli;
use crate::error::{BatchError, Result};
use crate::models::{ProcessorCommand, RunConfig};
use crate::utils::output;

/// 校验命令行参数并构建运行配置
pub fn build_config(cli: Cli) -> Result<RunConfig> {
    // 验证视频目录
    if !cli.directory.exists() {
        return Err(BatchError::DirectoryNotFound {
            path: cli.directory.display().to_string(),
        });
    }
    if !cli.directory.is_dir() {
        return Err(BatchError::NotADirectory {
            path: cli.directory.display().to_string(),
        });
    }

    // 验证表格文件
    if !cli.spreadsheet.is_file() {
        return Err(BatchError::FileNotFound {
            path: cli.spreadsheet.display().to_string(),
        });
    }

    let processor = ProcessorCommand::parse(&cli.processor)?;

    Ok(RunConfig {
        directory: cli.directory,
        spreadsheet: cli.spreadsheet,
        extra_args: cli.extra,
        processor,
        dry_run: cli.dry_run,
        verbose: cli.verbose,
        report: cli.report,
        progress: !cli.no_progress,
    })
}

/// 执行批处理
pub fn run(cli: Cli) -> Result<()> {
    let config = build_config(cli)?;

    output::print_header("Batch Video Processing");

    let files = VideoCollector::new(config.directory.clone()).collect_non_empty()?;
    output::print_info(&format!("Found {} video file(s)", files.len()));

    if !config.extra_args.is_empty() {
        output::print_info(&format!(
            "Extra arguments: {}",
            config.extra_args.join(" ")
        ));
    }

    let result = BatchRunner::new(&config).run(&files);

    output::print_separator();
    println!("{}", report::summary_table(&result));

    if let Some(ref path) = config.report {
        report::save_report_csv(&result, path)?;
        output::print_success(&format!("Report saved to '{}'", path.display()));
    }

    output::print_done(&report::summary_line(&result));
    output::print_done("Batch processing complete");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["clipbatch", "--processor", "true"];
        full.extend_from_slice(args);
        Cli::parse_args(full).unwrap()
    }

    #[test]
    fn test_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let sheet = tmp.path().join("data.xlsx");
        fs::write(&sheet, b"").unwrap();
        let missing = tmp.path().join("missing");

        let err = build_config(cli(&[
            missing.to_str().unwrap(),
            sheet.to_str().unwrap(),
        ]))
        .unwrap_err();
        assert!(matches!(err, BatchError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_directory_is_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let sheet = tmp.path().join("data.xlsx");
        fs::write(&sheet, b"").unwrap();

        let err = build_config(cli(&[sheet.to_str().unwrap(), sheet.to_str().unwrap()]))
            .unwrap_err();
        assert!(matches!(err, BatchError::NotADirectory { .. }));
    }

    #[test]
    fn test_missing_spreadsheet() {
        let tmp = tempfile::tempdir().unwrap();
        let sheet = tmp.path().join("data.xlsx");

        let err = build_config(cli(&[
            tmp.path().to_str().unwrap(),
            sheet.to_str().unwrap(),
        ]))
        .unwrap_err();
        assert!(matches!(err, BatchError::FileNotFound { .. }));
    }

    #[test]
    fn test_spreadsheet_is_a_directory() {
        let tmp = tempfile::tempdir().unwrap();

        let err = build_config(cli(&[
            tmp.path().to_str().unwrap(),
            tmp.path().to_str().unwrap(),
        ]))
        .unwrap_err();
        assert!(matches!(err, BatchError::FileNotFound { .. }));
    }

    #[test]
    fn test_valid_config_keeps_extra_args_in_order() {
        let tmp = tempfile::tempdir().unwrap();
        let sheet = tmp.path().join("data.xlsx");
        fs::write(&sheet, b"").unwrap();

        let config = build_config(cli(&[
            tmp.path().to_str().unwrap(),
            sheet.to_str().unwrap(),
            "--save-frames",
            "--window",
            "60",
        ]))
        .unwrap();

        assert_eq!(config.extra_args, vec!["--save-frames", "--window", "60"]);
        assert_eq!(config.processor.program, "true");
        assert!(config.progress);
    }

    #[test]
    fn test_run_without_videos_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let sheet = tmp.path().join("data.xlsx");
        fs::write(&sheet, b"").unwrap();

        let err = run(cli(&[
            "--no-progress",
            tmp.path().to_str().unwrap(),
            sheet.to_str().unwrap(),
        ]))
        .unwrap_err();
        assert!(matches!(err, BatchError::NoVideoFiles { .. }));
    }
}
