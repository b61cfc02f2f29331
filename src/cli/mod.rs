//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 参数结构
//! - `<DIRECTORY>`: 视频目录（必填）
//! - `<SPREADSHEET>`: 课程结构表格文件（必填）
//! - `[EXTRA]...`: 原样转发给外部处理器的参数
//!
//! 选项必须写在两个位置参数之前；表格路径之后的所有内容（包括以 `-`
//! 开头、与本程序选项同名的参数）都原样转发，见 [`Cli::parse_args`]。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/mod.rs`

use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// 默认外部处理器命令
pub const DEFAULT_PROCESSOR: &str = "python app.py";

/// clipbatch - 视频片段批量分析前端
#[derive(Parser, Debug)]
#[command(name = "clipbatch")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Run an external video analysis tool on every clip in a directory",
    long_about = None
)]
pub struct Cli {
    /// Directory containing the video files (.mp4, .mkv, .avi, .mov)
    pub directory: PathBuf,

    /// Spreadsheet passed to every invocation of the processor
    pub spreadsheet: PathBuf,

    /// Extra arguments forwarded verbatim to the processor (everything after SPREADSHEET)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,

    // ─────────────────────────────────────────────────────────────
    // Processor
    // ─────────────────────────────────────────────────────────────
    /// Processor command line (program followed by any fixed leading arguments)
    #[arg(long, env = "CLIPBATCH_PROCESSOR", default_value = DEFAULT_PROCESSOR)]
    pub processor: String,

    // ─────────────────────────────────────────────────────────────
    // Execution control
    // ─────────────────────────────────────────────────────────────
    /// Print the command for each file without running it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Print the full command line before each invocation
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Write a per-file outcome report to this CSV file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Disable the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}

/// 位置参数个数（目录 + 表格）
const POSITIONAL_COUNT: usize = 2;

impl Cli {
    /// 解析命令行：表格路径之前交给 clap，之后的参数全部原样作为转发参数
    pub fn parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let (own, extra) = split_passthrough(args.into_iter().map(Into::into).collect());
        let mut cli = Cli::try_parse_from(own)?;
        cli.extra = extra;
        Ok(cli)
    }
}

/// 在第二个位置参数处切分 argv
///
/// 选项是否带值由 clap 的参数定义决定（`--processor`, `--report`），
/// 所以 `--report out.csv` 中的 `out.csv` 不会被当作位置参数。
fn split_passthrough(args: Vec<OsString>) -> (Vec<OsString>, Vec<String>) {
    let cmd = Cli::command();
    let takes_value = |token: &str| -> bool {
        let arg = if let Some(long) = token.strip_prefix("--") {
            if long.contains('=') {
                return false;
            }
            cmd.get_arguments().find(|a| a.get_long() == Some(long))
        } else {
            let mut chars = token.chars().skip(1);
            match (chars.next(), chars.next()) {
                (Some(short), None) => cmd.get_arguments().find(|a| a.get_short() == Some(short)),
                _ => None,
            }
        };
        arg.map(|a| !a.is_positional() && a.get_action().takes_values())
            .unwrap_or(false)
    };

    let mut iter = args.into_iter();
    let mut own: Vec<OsString> = iter.next().into_iter().collect();
    let mut positionals = 0;
    let mut escaped = false;

    while positionals < POSITIONAL_COUNT {
        let Some(token) = iter.next() else { break };
        let text = token.to_string_lossy().into_owned();
        own.push(token);

        if escaped || text == "-" || !text.starts_with('-') {
            positionals += 1;
        } else if text == "--" {
            escaped = true;
        } else if takes_value(&text) {
            if let Some(value) = iter.next() {
                own.push(value);
            }
        }
    }

    let extra = iter.map(|t| t.to_string_lossy().into_owned()).collect();
    (own, extra)
}
