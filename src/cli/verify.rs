//! # verify 子命令 CLI 定义
//!
//! 验证套件的参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/verify.rs`

use clap::Args;
use std::path::PathBuf;

/// verify 子命令参数
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Directory containing the validation data files
    #[arg(short, long, default_value = "validation_data")]
    pub data_dir: PathBuf,

    /// Path for the plain-text verification report
    #[arg(short, long, default_value = "verification_output/verification_report.txt")]
    pub output: PathBuf,

    /// Print every check result in full detail
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
