//! # 循环寿命模拟模块
//!
//! 由架构参数驱动的物理退化模拟：SEI 生长 + 疲劳 + 枝晶形核的
//! 逐循环累积，以及结果导出与图表。
//!
//! ## 依赖关系
//! - 被 `commands/cycle.rs` 调用
//! - 使用 `physics/degradation.rs` 与 `models/architecture.rs`
//! - 子模块: simulator, export, plot

pub mod export;
pub mod plot;
pub mod simulator;

pub use simulator::{run_cycle_life, CycleOutcome, CycleParams, CycleSample};
