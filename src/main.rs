//! # ssbtool - 固态电池物理建模统一工具箱
//!
//! 将白皮书配套的分散计算脚本用 Rust 重构，统一成单一可执行文件。
//!
//! ## 子命令
//! - `sieve`   - Born 溶剂化模型 / 脱溶剂化能垒分析
//! - `cycle`   - 基于物理退化模型的循环寿命模拟
//! - `figures` - 批量生成白皮书图表
//! - `verify`  - 验证套件（校验数据与文献值的一致性）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   ├── physics/    (闭式物理公式)
//!   ├── models/     (参数表与数据模型)
//!   ├── data/       (验证数据读取)
//!   ├── sieve/ cycle/ figures/ verify/ (各子命令领域模块)
//!   ├── batch/      (并行图表任务执行)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod cycle;
mod data;
mod error;
mod figures;
mod models;
mod physics;
mod sieve;
mod utils;
mod verify;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
