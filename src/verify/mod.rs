//! # 验证套件模块
//!
//! 从第一性原理重新计算白皮书的关键指标，与验证数据文件中的
//! 声称值按容差交叉核对，并生成纯文本报告。
//!
//! ## 依赖关系
//! - 被 `commands/verify.rs` 调用
//! - 使用 `data/` 的读取器与 `physics/` 的公式
//! - 子模块: checks, report

pub mod checks;
pub mod report;

pub use checks::{
    check_critical_pressure, check_cycle_life, check_dendrite_suppression,
    check_ionic_conductivity,
};
pub use report::write_verification_report;
