//! # sieve 子命令 CLI 定义
//!
//! Born 溶剂化 / 脱溶剂化能垒分析的参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/sieve.rs`

use clap::Args;
use std::path::PathBuf;

/// sieve 子命令参数
#[derive(Args, Debug)]
pub struct SieveArgs {
    /// Output directory for JSON results, report and figure
    #[arg(short, long, default_value = "outputs/quantum_sieve")]
    pub output_dir: PathBuf,

    /// Pore diameter sweep range in nm (e.g., "0.3-3.0")
    #[arg(long, default_value = "0.3-3.0")]
    pub pore_range: String,

    /// Number of points in the pore diameter sweep
    #[arg(long, default_value_t = 500)]
    pub points: usize,

    /// Bulk solvent dielectric constant (EC/DMC mixture)
    #[arg(long, default_value_t = 30.0)]
    pub epsilon_bulk: f64,

    /// Target pore diameter for the selectivity analysis (nm)
    #[arg(long, default_value_t = 0.70)]
    pub target_pore: f64,

    /// Temperature for the selectivity analysis (K)
    #[arg(long, default_value_t = 300.0)]
    pub temperature: f64,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1400)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Render the figure as SVG instead of PNG
    #[arg(long, default_value_t = false)]
    pub svg: bool,

    /// Skip figure generation
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,
}
