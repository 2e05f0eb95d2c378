//! # 批量执行模块
//!
//! 并行执行一组独立任务（图表渲染），带进度条与结果统计。
//!
//! ## 依赖关系
//! - 被 `commands/figures.rs` 调用
//! - 子模块: runner

pub mod runner;

pub use runner::{BatchResult, BatchRunner, ProcessResult};
