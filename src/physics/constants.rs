//! # 物理常数（SI 单位）
//!
//! 集中定义各模型共用的物理常数、材料常数与单位换算因子。
//!
//! ## 依赖关系
//! - 被 `physics/` 各子模块与 `verify/checks.rs` 使用
//! - 无外部模块依赖

/// Avogadro 常数 (mol⁻¹)
pub const AVOGADRO: f64 = 6.02214076e23;

/// 元电荷 (C)
pub const ELEMENTARY_CHARGE: f64 = 1.602176634e-19;

/// 真空介电常数 (F/m)
pub const EPSILON_0: f64 = 8.854187817e-12;

/// Boltzmann 常数 (J/K)
pub const BOLTZMANN_J: f64 = 1.380649e-23;

/// Boltzmann 常数 (eV/K)
pub const BOLTZMANN_EV: f64 = 8.617e-5;

/// Faraday 常数 (C/mol)
pub const FARADAY: f64 = 96485.0;

// ─────────────────────────────────────────────────────────────
// 材料常数
// ─────────────────────────────────────────────────────────────

/// 金属锂摩尔体积 (m³/mol)，约 13 cm³/mol
pub const LI_MOLAR_VOLUME: f64 = 13.0e-6;

/// LLZO 陶瓷断裂韧性 (MPa·√m)
pub const LLZO_FRACTURE_TOUGHNESS: f64 = 1.0;

/// 多晶陶瓷晶界应力集中系数（文献范围 5-10）
pub const STRESS_CONCENTRATION_FACTOR: f64 = 7.0;

/// 循环应变速率下锂的屈服强度 (MPa)
pub const LI_YIELD_STRENGTH_MPA: f64 = 2.0;

// ─────────────────────────────────────────────────────────────
// 单位换算
// ─────────────────────────────────────────────────────────────

/// 纳米 → 米
pub const NM_TO_M: f64 = 1e-9;

/// J/mol → kJ/mol
pub const J_TO_KJ: f64 = 1e-3;

/// 摄氏度 → 开尔文
pub fn celsius_to_kelvin(t_celsius: f64) -> f64 {
    t_celsius + 273.15
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_conversion() {
        assert!((celsius_to_kelvin(25.0) - 298.15).abs() < 1e-12);
        assert!((celsius_to_kelvin(-273.15)).abs() < 1e-12);
    }

    #[test]
    fn test_rt_energy_scale() {
        // RT ≈ 2.494 kJ/mol @ 300 K，选择性分析以此为能量尺度
        let rt = BOLTZMANN_J * 300.0 * AVOGADRO / 1000.0;
        assert!((rt - 2.494).abs() < 0.01);
    }
}
