//! # 离子电导率
//!
//! - Arrhenius 温度依赖：σ(T) = σ₀ exp(-E_a/(k_B T))
//! - Nernst-Einstein 关系：由扩散系数反算电导率，用于验证套件
//!   交叉核对模拟声称值
//!
//! ## 依赖关系
//! - 被 `figures/conductivity.rs` 与 `verify/checks.rs` 调用
//! - 使用 `physics/constants.rs`

use crate::physics::constants::{BOLTZMANN_EV, BOLTZMANN_J, ELEMENTARY_CHARGE};

/// Arrhenius 电导率模型参数（来自 MD 模拟拟合）
#[derive(Debug, Clone, Copy)]
pub struct ArrheniusModel {
    /// 前指数因子 (S/cm)
    pub sigma0_s_cm: f64,
    /// 激活能 (eV)
    pub ea_ev: f64,
}

impl Default for ArrheniusModel {
    fn default() -> Self {
        Self {
            sigma0_s_cm: 1250.0,
            ea_ev: 0.31,
        }
    }
}

impl ArrheniusModel {
    /// 给定温度下的电导率 (mS/cm)
    pub fn conductivity_ms_cm(&self, t_kelvin: f64) -> f64 {
        self.sigma0_s_cm * (-self.ea_ev / (BOLTZMANN_EV * t_kelvin)).exp() * 1000.0
    }

    /// Arrhenius 图中 log₁₀σ 对 1000/T 的斜率
    pub fn log10_slope_per_1000_over_t(&self) -> f64 {
        -self.ea_ev / (BOLTZMANN_EV * 1000.0 * std::f64::consts::LN_10)
    }
}

/// Nernst-Einstein 电导率 (mS/cm)
///
/// σ = n q² D / (k_B T)，n 为载流子数密度 (1/m³)，D 为扩散系数
/// (m²/s)。S/m → mS/cm 的换算系数为 10。
pub fn nernst_einstein_ms_cm(n_per_m3: f64, d_m2_s: f64, t_kelvin: f64) -> f64 {
    let sigma_s_m =
        n_per_m3 * ELEMENTARY_CHARGE * ELEMENTARY_CHARGE * d_m2_s / (BOLTZMANN_J * t_kelvin);
    sigma_s_m * 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrhenius_monotonic_in_temperature() {
        let model = ArrheniusModel::default();
        let cold = model.conductivity_ms_cm(233.15);
        let room = model.conductivity_ms_cm(298.15);
        let hot = model.conductivity_ms_cm(373.15);
        assert!(cold < room && room < hot);
    }

    #[test]
    fn test_arrhenius_log_linearity() {
        // log₁₀σ 对 1/T 严格线性：等间距 1/T 下差分恒定
        let model = ArrheniusModel::default();
        let inv_t = [3.0e-3, 3.2e-3, 3.4e-3];
        let logs: Vec<f64> = inv_t
            .iter()
            .map(|&it| model.conductivity_ms_cm(1.0 / it).log10())
            .collect();
        let d1 = logs[1] - logs[0];
        let d2 = logs[2] - logs[1];
        assert!((d1 - d2).abs() < 1e-9);
    }

    #[test]
    fn test_arrhenius_slope_matches_activation_energy() {
        let model = ArrheniusModel::default();
        // 斜率 = -E_a / (k_B ln10 × 1000) ≈ -1.56 每 (1000/T)
        let slope = model.log10_slope_per_1000_over_t();
        assert!((slope + 0.31 / (8.617e-5 * std::f64::consts::LN_10 * 1000.0)).abs() < 1e-12);
        assert!(slope < 0.0);
    }

    #[test]
    fn test_nernst_einstein_llzo_scale() {
        // 典型 LLZO：448 个 Li 于 (2.6 nm)³ 晶胞，D = 2.5e-13 m²/s，
        // 300 K → σ 量级 0.5 mS/cm
        let volume_m3 = 17.576e-27;
        let n = 448.0 / volume_m3;
        let sigma = nernst_einstein_ms_cm(n, 2.5e-13, 300.0);
        assert!(sigma > 0.1 && sigma < 10.0, "got {} mS/cm", sigma);
    }

    #[test]
    fn test_nernst_einstein_linear_in_diffusivity() {
        let sigma1 = nernst_einstein_ms_cm(1e28, 1e-13, 300.0);
        let sigma2 = nernst_einstein_ms_cm(1e28, 2e-13, 300.0);
        assert!((sigma2 / sigma1 - 2.0).abs() < 1e-12);
    }
}
