//! # figures 子命令 CLI 定义
//!
//! 白皮书图表批量生成的参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/figures.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 图表种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FigureKind {
    /// Weibull pressure-failure probability curve
    Pressure,
    /// Norton lithium creep rate (log-log)
    Creep,
    /// Cycle life validation from CSV data
    Cycling,
    /// Arrhenius conductivity panels
    Conductivity,
    /// Dendrite suppression comparison from JSON data
    Dendrite,
    /// Industry investment landscape
    Landscape,
}

impl FigureKind {
    /// 全部图表（默认渲染集合）
    pub fn all() -> Vec<FigureKind> {
        vec![
            FigureKind::Pressure,
            FigureKind::Creep,
            FigureKind::Cycling,
            FigureKind::Conductivity,
            FigureKind::Dendrite,
            FigureKind::Landscape,
        ]
    }

    /// 输出文件主名
    pub fn file_stem(&self) -> &'static str {
        match self {
            FigureKind::Pressure => "pressure_failure_curve",
            FigureKind::Creep => "lithium_creep_rate",
            FigureKind::Cycling => "cycle_life_validation",
            FigureKind::Conductivity => "conductivity_arrhenius",
            FigureKind::Dendrite => "dendrite_suppression_comparison",
            FigureKind::Landscape => "investment_landscape",
        }
    }
}

impl std::fmt::Display for FigureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_stem())
    }
}

/// figures 子命令参数
#[derive(Args, Debug)]
pub struct FiguresArgs {
    /// Output directory for the rendered figures
    #[arg(short, long, default_value = "figures")]
    pub output_dir: PathBuf,

    /// Directory containing the validation data files
    #[arg(short, long, default_value = "validation_data")]
    pub data_dir: PathBuf,

    /// Render only the listed figures (default: all)
    #[arg(long, value_enum, num_args = 1..)]
    pub only: Option<Vec<FigureKind>>,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Render figures as SVG instead of PNG
    #[arg(long, default_value_t = false)]
    pub svg: bool,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
