//! # 物理公式模块
//!
//! 白皮书用到的全部闭式物理公式，均为纯函数（数组/标量进，标量出），
//! 除简单的定义域保护外无任何错误分支。
//!
//! ## 子模块
//! - `constants`    - 物理常数与单位换算
//! - `born`         - Born 溶剂化能与受限介电常数
//! - `degradation`  - SEI 抛物线生长 / Paris 疲劳 / 枝晶形核概率
//! - `fracture`     - Weibull 失效统计与临界压力
//! - `creep`        - Norton 幂律蠕变
//! - `conductivity` - Arrhenius 电导率与 Nernst-Einstein 关系
//!
//! ## 依赖关系
//! - 被 `sieve/`, `cycle/`, `figures/`, `verify/` 调用
//! - 使用 `models/` 的参数记录

pub mod born;
pub mod conductivity;
pub mod constants;
pub mod creep;
pub mod degradation;
pub mod fracture;
