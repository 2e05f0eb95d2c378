//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `physics/`, `models/`, `data/`, `utils/`
//! - 子模块: sieve, cycle, figures, verify

pub mod cycle;
pub mod figures;
pub mod sieve;
pub mod verify;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Sieve(args) => sieve::execute(args),
        Commands::Cycle(args) => cycle::execute(args),
        Commands::Figures(args) => figures::execute(args),
        Commands::Verify(args) => verify::execute(args),
    }
}
