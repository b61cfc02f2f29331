//! # clipbatch - 视频片段批量分析前端
//!
//! 扫描目录中的视频文件，对每个文件调用一次外部分析工具，并根据文件名中的
//! `Section<N>` / `Section<N>-<M>` 标记附加 `--section` 参数。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (运行流程：校验 → 收集 → 调用 → 汇总)
//!   │     ├── batch/     (收集器、章节解析、执行器、报告)
//!   │     └── models/    (运行配置与调用请求)
//!   ├── utils/      (输出与进度条)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod utils;

use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = match Cli::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        // --help / --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            // 用法错误写到标准输出，统一以状态码 1 退出
            println!("{}", e.render());
            std::process::exit(1);
        }
    };

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
