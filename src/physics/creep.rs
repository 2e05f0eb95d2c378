//! # Norton 幂律蠕变
//!
//! 金属锂在外加压力下的室温蠕变速率，解释高压为何加速锂向
//! 微裂纹的渗透。
//!
//! ## 依赖关系
//! - 被 `figures/creep.rs` 调用
//! - 无外部模块依赖

/// 室温锂的 Norton 蠕变参数包络
///
/// ε̇ = A σⁿ（等温形式）。位错蠕变区 n ≈ 3-5，A 的量级约
/// 10⁻⁹-10⁻⁸ s⁻¹·MPa⁻ⁿ。
#[derive(Debug, Clone, Copy)]
pub struct NortonEnvelope {
    /// 保守前因子 (s⁻¹·MPa⁻ⁿ)
    pub a_low: f64,
    /// 激进前因子 (s⁻¹·MPa⁻ⁿ)
    pub a_high: f64,
    /// 应力指数下界
    pub n_low: f64,
    /// 应力指数上界
    pub n_high: f64,
}

impl Default for NortonEnvelope {
    fn default() -> Self {
        Self {
            a_low: 1e-9,
            a_high: 1e-8,
            n_low: 3.0,
            n_high: 4.5,
        }
    }
}

/// Norton 幂律蠕变速率 (1/s)
///
/// ε̇ = A σⁿ，非正应力返回 0。
pub fn norton_creep_rate(sigma_mpa: f64, a: f64, n: f64) -> f64 {
    if sigma_mpa <= 0.0 {
        return 0.0;
    }
    a * sigma_mpa.powf(n)
}

impl NortonEnvelope {
    /// 包络下界速率
    pub fn rate_low(&self, sigma_mpa: f64) -> f64 {
        norton_creep_rate(sigma_mpa, self.a_low, self.n_low)
    }

    /// 包络上界速率
    pub fn rate_high(&self, sigma_mpa: f64) -> f64 {
        norton_creep_rate(sigma_mpa, self.a_high, self.n_high)
    }

    /// 包络中线（上下界几何平均）
    pub fn rate_mid(&self, sigma_mpa: f64) -> f64 {
        (self.rate_low(sigma_mpa) * self.rate_high(sigma_mpa)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norton_power_law() {
        // n = 3：应力 ×10 → 速率 ×1000
        let r1 = norton_creep_rate(1.0, 1e-9, 3.0);
        let r10 = norton_creep_rate(10.0, 1e-9, 3.0);
        assert!((r10 / r1 - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_norton_domain_guard() {
        assert_eq!(norton_creep_rate(0.0, 1e-8, 4.0), 0.0);
        assert_eq!(norton_creep_rate(-5.0, 1e-8, 4.0), 0.0);
    }

    #[test]
    fn test_envelope_ordering() {
        let env = NortonEnvelope::default();
        // 1 MPa 以上包络上界严格高于下界，中线居于两者之间
        for &sigma in &[1.0, 10.0, 100.0, 300.0] {
            let lo = env.rate_low(sigma);
            let hi = env.rate_high(sigma);
            let mid = env.rate_mid(sigma);
            assert!(hi > lo);
            assert!(mid > lo && mid < hi);
        }
    }

    #[test]
    fn test_low_pressure_creep_negligible() {
        // 0.5 MPa 下的蠕变远低于 10⁻⁶ s⁻¹ 的可忽略阈值
        let env = NortonEnvelope::default();
        assert!(env.rate_high(0.5) < 1e-6);
    }
}
