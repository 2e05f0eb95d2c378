//! # 枝晶抑制数据
//!
//! 相场模拟输出 `dendrite_suppression_results.json` 的类型化映射。
//! 字段名与数据文件的既有 JSON 键保持一致。
//!
//! ## 依赖关系
//! - 被 `figures/dendrite.rs` 与 `verify/checks.rs` 使用

use crate::data::open_data_file;
use crate::error::Result;

use serde::Deserialize;
use std::io::BufReader;
use std::path::Path;

/// 整份枝晶抑制结果文件
#[derive(Debug, Clone, Deserialize)]
pub struct DendriteData {
    /// 均匀致密 LLZO 基线算例
    pub baseline_case: DendriteCase,
    /// 点阵架构算例
    pub genesis_case: DendriteCase,
    /// 改善指标
    pub improvement_metrics: ImprovementMetrics,
}

/// 单个算例
#[derive(Debug, Clone, Deserialize)]
pub struct DendriteCase {
    pub results: DendriteCaseResults,
}

/// 单个算例的结果字段
#[derive(Debug, Clone, Deserialize)]
pub struct DendriteCaseResults {
    /// 最大枝晶挠度 (nm)
    pub max_deflection_nm: f64,
    /// 峰值应力 (MPa)
    pub peak_stress_mpa: f64,
    /// 枝晶穿透深度 (%)
    pub dendrite_penetration_percent: f64,
}

/// 改善指标
#[derive(Debug, Clone, Deserialize)]
pub struct ImprovementMetrics {
    /// 声称的枝晶抑制因子（基线挠度 / 点阵挠度）
    pub dendrite_suppression_factor: f64,
}

/// 读取枝晶抑制结果文件
pub fn load_dendrite_data(path: &Path) -> Result<DendriteData> {
    let file = open_data_file(path)?;
    let data = serde_json::from_reader(BufReader::new(file))?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dendrite_json() {
        let raw = r#"{
            "baseline_case": {
                "results": {
                    "max_deflection_nm": 115.6,
                    "peak_stress_mpa": 1576.9,
                    "dendrite_penetration_percent": 100.0
                }
            },
            "genesis_case": {
                "results": {
                    "max_deflection_nm": 9.1,
                    "peak_stress_mpa": 780.1,
                    "dendrite_penetration_percent": 15.0
                }
            },
            "improvement_metrics": {
                "dendrite_suppression_factor": 12.7
            }
        }"#;

        let data: DendriteData = serde_json::from_str(raw).unwrap();
        assert!((data.baseline_case.results.max_deflection_nm - 115.6).abs() < 1e-9);
        assert!((data.improvement_metrics.dendrite_suppression_factor - 12.7).abs() < 1e-9);
    }
}
