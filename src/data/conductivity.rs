//! # 离子电导率数据
//!
//! MD 模拟输出 `conductivity_results.json` 的类型化映射，供验证
//! 套件用 Nernst-Einstein 关系交叉核对。
//!
//! ## 依赖关系
//! - 被 `verify/checks.rs` 使用

use crate::data::open_data_file;
use crate::error::Result;

use serde::Deserialize;
use std::io::BufReader;
use std::path::Path;

/// 整份电导率结果文件
#[derive(Debug, Clone, Deserialize)]
pub struct ConductivityData {
    pub simulation_parameters: SimulationParameters,
    pub results: ConductivityResults,
}

/// 模拟参数块
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationParameters {
    pub composition: Composition,
    /// 模拟晶胞体积 (nm³)
    pub volume_nm3: f64,
}

/// 成分计数
#[derive(Debug, Clone, Deserialize)]
pub struct Composition {
    /// 晶胞内 Li 原子数
    pub lithium: f64,
}

/// 结果块
#[derive(Debug, Clone, Deserialize)]
pub struct ConductivityResults {
    pub diffusion_coefficient: DiffusionCoefficient,
    pub ionic_conductivity: IonicConductivity,
    pub msd_analysis: MsdAnalysis,
}

/// 扩散系数
#[derive(Debug, Clone, Deserialize)]
pub struct DiffusionCoefficient {
    /// 数值 (m²/s)
    pub value: f64,
}

/// 离子电导率声称值
#[derive(Debug, Clone, Deserialize)]
pub struct IonicConductivity {
    /// 数值 (mS/cm)
    pub value: f64,
    /// 测定温度 (K)
    #[serde(rename = "temperature_K")]
    pub temperature_k: f64,
}

/// MSD 线性拟合质量
#[derive(Debug, Clone, Deserialize)]
pub struct MsdAnalysis {
    pub r_squared: f64,
}

impl ConductivityData {
    /// 载流子数密度 (1/m³)
    pub fn carrier_density_per_m3(&self) -> f64 {
        let volume_m3 = self.simulation_parameters.volume_nm3 * 1e-27;
        self.simulation_parameters.composition.lithium / volume_m3
    }
}

/// 读取电导率结果文件
pub fn load_conductivity_data(path: &Path) -> Result<ConductivityData> {
    let file = open_data_file(path)?;
    let data = serde_json::from_reader(BufReader::new(file))?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_conductivity_json() {
        let raw = r#"{
            "simulation_parameters": {
                "composition": { "lithium": 448, "lanthanum": 192 },
                "volume_nm3": 17.576
            },
            "results": {
                "diffusion_coefficient": { "value": 3.4e-13, "unit": "m^2/s" },
                "ionic_conductivity": { "value": 0.5485, "temperature_K": 300.0 },
                "msd_analysis": { "r_squared": 0.994 }
            }
        }"#;

        let data: ConductivityData = serde_json::from_str(raw).unwrap();
        assert!((data.results.ionic_conductivity.temperature_k - 300.0).abs() < 1e-9);

        // 448 Li / 17.576 nm³ ≈ 2.55e28 /m³
        let n = data.carrier_density_per_m3();
        assert!((n - 2.549e28).abs() / 2.549e28 < 0.01);
    }
}
