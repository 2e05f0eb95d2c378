//! # 脱溶剂化筛分析模块
//!
//! Born 溶剂化模型在孔径扫描上的完整分析：能垒剖面、物种选择性、
//! 结果导出与图表。
//!
//! ## 依赖关系
//! - 被 `commands/sieve.rs` 调用
//! - 使用 `physics/born.rs` 与 `models/ion.rs`
//! - 子模块: profile, export, plot

pub mod export;
pub mod plot;
pub mod profile;

pub use profile::{
    compute_selectivity, compute_sieve_profiles, SelectivityAnalysis, SelectivityClass,
    SelectivityEntry, SieveStatus, SieveSweep, SpeciesProfile,
};
