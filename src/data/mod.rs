//! # 验证数据读取模块
//!
//! 读取白皮书随附的外部验证数据文件并映射为类型化记录：
//! - `dendrite_suppression_results.json` (相场模拟结果)
//! - `conductivity_results.json` (MD 模拟结果)
//! - `zero_pressure_cycling.csv` (循环寿命数据)
//!
//! 文件缺失或格式错误直接以错误中止所属流程，无重试。
//!
//! ## 依赖关系
//! - 被 `figures/` 与 `verify/` 调用
//! - 使用 `serde_json` / `csv` 解析

pub mod conductivity;
pub mod cycling;
pub mod dendrite;

pub use conductivity::{load_conductivity_data, ConductivityData};
pub use cycling::{load_cycling_data, CyclingRecord};
pub use dendrite::{load_dendrite_data, DendriteData};

use crate::error::{Result, SsbError};

use std::fs::File;
use std::path::Path;

/// 打开数据文件，统一包装读取错误
pub(crate) fn open_data_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| SsbError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}
