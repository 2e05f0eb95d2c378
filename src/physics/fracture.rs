//! # 断裂统计与临界压力
//!
//! 脆性陶瓷在堆叠压力下的失效模型：
//! - Weibull 分布给出微裂纹萌生概率
//! - 断裂力学给出晶界缺陷的临界压力阈值
//!
//! ## 依赖关系
//! - 被 `figures/fracture.rs` 与 `verify/checks.rs` 调用
//! - 使用 `physics/constants.rs`

use std::f64::consts::PI;

/// LLZO 的 Weibull 失效参数（由断裂力学分析估计）
#[derive(Debug, Clone, Copy)]
pub struct WeibullParams {
    /// 损伤萌生阈值应力 (MPa)
    pub threshold_mpa: f64,
    /// 特征强度 (MPa)
    pub scale_mpa: f64,
    /// Weibull 模数（形状参数）
    pub modulus: f64,
}

impl Default for WeibullParams {
    fn default() -> Self {
        Self {
            threshold_mpa: 15.0,
            scale_mpa: 25.0,
            modulus: 3.5,
        }
    }
}

/// 微裂纹萌生概率（0-1）
///
/// P = 1 - exp(-((σ - σ_th)/σ₀)^m)，σ ≤ σ_th 时恒为 0。
pub fn weibull_failure_probability(sigma_mpa: f64, params: &WeibullParams) -> f64 {
    if sigma_mpa <= params.threshold_mpa {
        return 0.0;
    }
    let x = (sigma_mpa - params.threshold_mpa) / params.scale_mpa;
    1.0 - (-x.powf(params.modulus)).exp()
}

/// 晶界微裂纹萌生的临界外加压力 (MPa)
///
/// σ_crit = K_IC / √(π a)，P_crit = σ_crit / K_t。
/// LLZO 默认参数（K_IC = 1.0 MPa·√m，K_t = 7，a = 10 μm）下约 25 MPa。
pub fn critical_pressure_mpa(k_ic: f64, k_t: f64, flaw_size_m: f64) -> f64 {
    let sigma_critical = k_ic / (PI * flaw_size_m).sqrt();
    sigma_critical / k_t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::constants::{LLZO_FRACTURE_TOUGHNESS, STRESS_CONCENTRATION_FACTOR};

    #[test]
    fn test_weibull_zero_below_threshold() {
        let params = WeibullParams::default();
        assert_eq!(weibull_failure_probability(0.0, &params), 0.0);
        assert_eq!(weibull_failure_probability(15.0, &params), 0.0);
    }

    #[test]
    fn test_weibull_monotonic_and_saturating() {
        let params = WeibullParams::default();
        let p20 = weibull_failure_probability(20.0, &params);
        let p40 = weibull_failure_probability(40.0, &params);
        let p100 = weibull_failure_probability(100.0, &params);
        assert!(p20 > 0.0);
        assert!(p40 > p20);
        assert!(p100 > 0.999, "got {}", p100);
    }

    #[test]
    fn test_weibull_characteristic_point() {
        // σ - σ_th = σ₀ 处 P = 1 - 1/e
        let params = WeibullParams::default();
        let p = weibull_failure_probability(40.0, &params);
        assert!((p - (1.0 - (-1.0f64).exp())).abs() < 1e-12);
    }

    #[test]
    fn test_critical_pressure_llzo() {
        // 10 μm 晶界缺陷：σ_crit ≈ 178 MPa，P_crit ≈ 25.5 MPa
        let p = critical_pressure_mpa(
            LLZO_FRACTURE_TOUGHNESS,
            STRESS_CONCENTRATION_FACTOR,
            10e-6,
        );
        assert!((p - 25.0).abs() / 25.0 < 0.10, "got {} MPa", p);
    }
}
