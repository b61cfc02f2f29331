//! # 批处理结果报告
//!
//! 终端汇总表格与可选的 CSV 报告。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `batch/runner.rs` 的 BatchResult
//! - 使用 `tabled` 打印表格，`csv` + `serde` 写入报告

use crate::batch::runner::{BatchResult, FileOutcome, ProcessResult};
use crate::error::{BatchError, Result};

use serde::Serialize;
use std::path::Path;
use tabled::{Table, Tabled};

/// 表格 / CSV 共用的结果行
#[derive(Debug, Clone, Serialize, Tabled)]
struct OutcomeRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Section")]
    section: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Exit code")]
    exit_code: String,
}

impl From<&FileOutcome> for OutcomeRow {
    fn from(outcome: &FileOutcome) -> Self {
        let (status, exit_code) = match &outcome.result {
            ProcessResult::Success => ("ok", "0".to_string()),
            ProcessResult::Skipped => ("skipped", String::new()),
            ProcessResult::Failed { code, .. } => (
                "failed",
                code.map(|c| c.to_string()).unwrap_or_default(),
            ),
        };

        OutcomeRow {
            file: outcome.file.clone(),
            section: outcome.section.clone().unwrap_or_default(),
            status: status.to_string(),
            exit_code,
        }
    }
}

fn rows(result: &BatchResult) -> Vec<OutcomeRow> {
    result.outcomes.iter().map(OutcomeRow::from).collect()
}

/// 生成汇总表格文本
pub fn summary_table(result: &BatchResult) -> String {
    Table::new(rows(result)).to_string()
}

/// 汇总统计行
pub fn summary_line(result: &BatchResult) -> String {
    let mut line = format!(
        "Processed {} files: {} succeeded, {} failed",
        result.total(),
        result.success,
        result.failed
    );
    if result.skipped > 0 {
        line.push_str(&format!(", {} skipped", result.skipped));
    }
    line
}

/// 保存结果到 CSV
pub fn save_report_csv(result: &BatchResult, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for row in rows(result) {
        wtr.serialize(row)?;
    }

    wtr.flush().map_err(|e| BatchError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample() -> BatchResult {
        let mut result = BatchResult::default();
        result.merge(FileOutcome {
            file: "clip.mp4".to_string(),
            section: None,
            result: ProcessResult::Success,
        });
        result.merge(FileOutcome {
            file: "Section2-4.avi".to_string(),
            section: Some("2-4".to_string()),
            result: ProcessResult::Failed {
                code: Some(1),
                reason: "exit code 1".to_string(),
            },
        });
        result.merge(FileOutcome {
            file: "Section.mov".to_string(),
            section: Some(String::new()),
            result: ProcessResult::Failed {
                code: None,
                reason: "terminated by signal".to_string(),
            },
        });
        result
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(
            summary_line(&sample()),
            "Processed 3 files: 1 succeeded, 2 failed"
        );
    }

    #[test]
    fn test_summary_table_lists_every_file() {
        let table = summary_table(&sample());
        assert!(table.contains("Exit code"));
        assert!(table.contains("clip.mp4"));
        assert!(table.contains("Section2-4.avi"));
        assert!(table.contains("failed"));
    }

    #[test]
    fn test_save_report_csv() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("report.csv");

        save_report_csv(&sample(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "file,section,status,exit_code");
        assert_eq!(lines[1], "clip.mp4,,ok,0");
        assert_eq!(lines[2], "Section2-4.avi,2-4,failed,1");
        assert_eq!(lines[3], "Section.mov,,failed,");
    }
}
