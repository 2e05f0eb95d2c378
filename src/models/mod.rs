//! # 数据模型模块
//!
//! 定义各计算共用的静态参数记录：离子物种表、电池架构参数、
//! 验证检查结果。均为构造后只读的配置型数据。
//!
//! ## 依赖关系
//! - 被 `physics/`, `sieve/`, `cycle/`, `verify/` 使用
//! - 无外部模块依赖

pub mod architecture;
pub mod ion;
pub mod verification;

pub use architecture::{baseline_architecture, gyroid_architecture, Architecture};
pub use ion::{ion_species, IonSpecies};
pub use verification::VerificationResult;
