//! # cycle 子命令 CLI 定义
//!
//! 物理退化循环寿命模拟的参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/cycle.rs`

use clap::Args;
use std::path::PathBuf;

/// cycle 子命令参数
#[derive(Args, Debug)]
pub struct CycleArgs {
    /// Output directory for JSON results, CSV history and figure
    #[arg(short, long, default_value = "outputs/cycle_life")]
    pub output_dir: PathBuf,

    /// Maximum number of cycles to simulate
    #[arg(long, default_value_t = 2000)]
    pub cycles: u32,

    /// Ambient temperature (Celsius)
    #[arg(long, default_value_t = 25.0)]
    pub temperature: f64,

    /// Charge/discharge rate (C-rate, e.g., 0.33 for C/3)
    #[arg(long, default_value_t = 0.33)]
    pub c_rate: f64,

    /// Depth of discharge (0-1)
    #[arg(long, default_value_t = 0.80)]
    pub dod: f64,

    /// Current density for dendrite nucleation (mA/cm2)
    #[arg(long, default_value_t = 1.0)]
    pub current_density: f64,

    /// Random seed for the dendrite nucleation draws
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

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
