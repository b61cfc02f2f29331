//! # 章节标记解析
//!
//! 从文件名（不含目录与扩展名）中识别 `Section<N>` 或 `Section<N>-<M>`
//! 标记，得到传给处理器的 `--section` 值。
//!
//! ## 规则
//! 1. "Section" 之后允许一个空格（`Section 3` 与 `Section3` 等价）
//! 2. 以 `(?i)Section ?([0-9-]*)$` 搜索，只锚定结尾
//! 3. 捕获组即为章节值，可能为空字符串（裸 `Section`）
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `regex` + `once_cell`

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

// 标记后可选一个空格，只检查结尾处的那一个标记
static SECTION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)section ?([0-9-]*)$").expect("valid section regex"));

/// 解析文件名主干中的章节值
pub fn parse_section(stem: &str) -> Option<String> {
    SECTION_MARKER
        .captures(stem)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// 解析路径对应的章节值
pub fn section_for_path(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|s| s.to_string_lossy())
        .and_then(|stem| parse_section(&stem))
}
