//! # 视频文件收集器
//!
//! 在输入目录（不递归）中按扩展名分组收集视频文件。
//!
//! ## 功能
//! - 扩展名大小写不敏感匹配
//! - 按 `mp4, mkv, avi, mov` 的顺序逐组输出，组内按文件名排序
//! - 模式只匹配文件名，目录名中的 glob 元字符与大小写不影响结果
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `glob::Pattern` 匹配文件名

use crate::error::{BatchError, Result};

use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::{Path, PathBuf};

/// 支持的视频扩展名（按处理顺序）
pub const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "mkv", "avi", "mov"];

/// 视频文件收集器
pub struct VideoCollector {
    /// 输入目录
    directory: PathBuf,
    /// 扩展名分组
    extensions: Vec<String>,
}

impl VideoCollector {
    /// 创建新的收集器，使用默认扩展名
    pub fn new(directory: PathBuf) -> Self {
        Self {
            directory,
            extensions: VIDEO_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// 收集所有匹配的文件
    ///
    /// 只读取一次目录，glob 仅作用于文件名，目录路径本身不参与匹配。
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let options = MatchOptions {
            case_sensitive: false,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };

        let read_err = |e| BatchError::DirectoryReadError {
            path: self.directory.display().to_string(),
            source: e,
        };

        let mut entries: Vec<(String, PathBuf)> = Vec::new();
        for entry in fs::read_dir(&self.directory).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                entries.push((name.to_string(), path));
            }
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let mut files = Vec::new();
        for ext in &self.extensions {
            let pattern = format!("*.{}", ext);
            let matcher = Pattern::new(&pattern).map_err(|e| BatchError::InvalidPattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })?;

            for (name, path) in &entries {
                if matcher.matches_with(name, options) && !files.contains(path) {
                    files.push(path.clone());
                }
            }
        }

        Ok(files)
    }

    /// 收集文件，若一个也没有则返回错误
    pub fn collect_non_empty(&self) -> Result<Vec<PathBuf>> {
        let files = self.collect()?;
        if files.is_empty() {
            return Err(BatchError::NoVideoFiles {
                path: self.directory.display().to_string(),
            });
        }
        Ok(files)
    }
}

/// 显示用的文件名（含扩展名）
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    fn names(files: &[PathBuf]) -> Vec<String> {
        files.iter().map(|p| display_name(p)).collect()
    }

    #[test]
    fn test_grouped_by_extension() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "b.mov");
        touch(tmp.path(), "a.avi");
        touch(tmp.path(), "z.mp4");
        touch(tmp.path(), "c.mkv");
        touch(tmp.path(), "a.mp4");

        let files = VideoCollector::new(tmp.path().to_path_buf()).collect().unwrap();
        assert_eq!(names(&files), vec!["a.mp4", "z.mp4", "c.mkv", "a.avi", "b.mov"]);
    }

    #[test]
    fn test_case_insensitive_extension() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "LOUD.MP4");
        touch(tmp.path(), "mixed.Mkv");

        let files = VideoCollector::new(tmp.path().to_path_buf()).collect().unwrap();
        assert_eq!(names(&files), vec!["LOUD.MP4", "mixed.Mkv"]);
    }

    #[test]
    fn test_ignores_other_files_and_subdirectories() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "notes.txt");
        touch(tmp.path(), "data.xlsx");
        fs::create_dir(tmp.path().join("nested.mp4")).unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        touch(&tmp.path().join("sub"), "deep.mp4");
        touch(tmp.path(), "top.mp4");

        let files = VideoCollector::new(tmp.path().to_path_buf()).collect().unwrap();
        assert_eq!(names(&files), vec!["top.mp4"]);
    }

    #[test]
    fn test_directory_with_glob_metacharacters() {
        let tmp = tempfile::tempdir().unwrap();
        let odd = tmp.path().join("course [2024]");
        fs::create_dir(&odd).unwrap();
        touch(&odd, "Section1.mp4");

        let files = VideoCollector::new(odd).collect().unwrap();
        assert_eq!(names(&files), vec!["Section1.mp4"]);
    }

    #[test]
    fn test_sibling_directory_differing_in_case_is_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        let lower = tmp.path().join("course [2024]");
        let upper = tmp.path().join("COURSE [2024]");
        fs::create_dir(&lower).unwrap();
        fs::create_dir(&upper).unwrap();
        touch(&lower, "Section1.mp4");
        touch(&upper, "Section9.mp4");

        let files = VideoCollector::new(lower.clone()).collect().unwrap();
        assert_eq!(files, vec![lower.join("Section1.mp4")]);
    }

    #[test]
    fn test_no_files_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "readme.md");

        let err = VideoCollector::new(tmp.path().to_path_buf())
            .collect_non_empty()
            .unwrap_err();
        assert!(matches!(err, BatchError::NoVideoFiles { .. }));
    }
}
