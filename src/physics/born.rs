//! # Born 溶剂化模型
//!
//! 计算离子从体相溶剂进入受限纳米孔的自由能代价。
//!
//! ## 算法概述
//! 1. Born 方程给出给定介电环境下的溶剂化自由能
//! 2. 纳米受限使有效介电常数按 sigmoid 规律坍缩
//! 3. 脱溶剂化能垒 = 孔内溶剂化能 - 体相溶剂化能
//! 4. 孔径小于溶剂化壳直径的 80% 时视为空间位阻完全阻断
//!
//! ## 参考
//! - Born (1920) Z. Phys. 1, 45
//! - Marcus (1991) J. Chem. Soc. Faraday Trans. 87, 2995
//! - Chmiola et al. (2006) Science 313, 1760
//!
//! ## 依赖关系
//! - 被 `sieve/profile.rs` 调用
//! - 使用 `models/ion.rs` 的 IonSpecies
//! - 使用 `physics/constants.rs`

use crate::models::IonSpecies;
use crate::physics::constants::{
    AVOGADRO, ELEMENTARY_CHARGE, EPSILON_0, J_TO_KJ, NM_TO_M,
};

use std::f64::consts::PI;

/// 受限介电模型参数
#[derive(Debug, Clone, Copy)]
pub struct ConfinementModel {
    /// 体相溶剂介电常数（EC/DMC 约 30）
    pub epsilon_bulk: f64,
    /// 极端受限下的极限介电常数（约 2）
    pub epsilon_vacuum: f64,
    /// 介电坍缩的临界孔径 (nm)
    pub d_critical_nm: f64,
    /// sigmoid 过渡宽度 (nm)
    pub transition_width_nm: f64,
}

impl Default for ConfinementModel {
    fn default() -> Self {
        Self {
            epsilon_bulk: 30.0,
            epsilon_vacuum: 2.0,
            d_critical_nm: 0.70,
            transition_width_nm: 0.10,
        }
    }
}

/// Born 溶剂化自由能 (kJ/mol)
///
/// ΔG_solv = -(N_A z² e²) / (8π ε₀ r_eff) × (1 - 1/ε_r)
///
/// 负值表示溶剂化有利；半径或介电常数非正时返回 0。
pub fn born_solvation_energy(charge: i32, r_eff_m: f64, epsilon_r: f64) -> f64 {
    if r_eff_m <= 0.0 || epsilon_r <= 0.0 {
        return 0.0;
    }

    let z2 = (charge as f64).powi(2);
    let delta_g = -(AVOGADRO * z2 * ELEMENTARY_CHARGE * ELEMENTARY_CHARGE)
        / (8.0 * PI * EPSILON_0 * r_eff_m)
        * (1.0 - 1.0 / epsilon_r);

    // J/mol → kJ/mol
    delta_g * J_TO_KJ
}

/// 纳米孔内的有效介电常数
///
/// ε_r(d) = ε_vacuum + (ε_bulk - ε_vacuum) × σ((d - d_crit)/δ)
///
/// σ 为 logistic sigmoid；指数参数截断在 ±50 以避免溢出。
pub fn confined_dielectric(pore_diameter_nm: f64, model: &ConfinementModel) -> f64 {
    let x = (pore_diameter_nm - model.d_critical_nm) / model.transition_width_nm;
    let x = x.clamp(-50.0, 50.0);
    let sigmoid = 1.0 / (1.0 + (-x).exp());

    model.epsilon_vacuum + (model.epsilon_bulk - model.epsilon_vacuum) * sigmoid
}

/// 离子进入纳米孔的脱溶剂化能垒 (kJ/mol)
///
/// ΔH(d) = ΔG_solv(ε_pore(d)) - ΔG_solv(ε_bulk)，正值为进入能垒。
///
/// 孔径小于溶剂化壳直径 80% 时，空间位阻使能垒实际为无穷大，
/// 以 `None` 表示。
pub fn dehydration_enthalpy(
    pore_diameter_nm: f64,
    ion: &IonSpecies,
    model: &ConfinementModel,
) -> Option<f64> {
    // 空间位阻检查
    let solvated_diameter_nm = 2.0 * ion.solvated_radius_nm;
    if pore_diameter_nm < solvated_diameter_nm * 0.8 {
        return None;
    }

    let r_eff = ion.bare_radius_nm * NM_TO_M;
    let g_bulk = born_solvation_energy(ion.charge, r_eff, model.epsilon_bulk);

    let epsilon_pore = confined_dielectric(pore_diameter_nm, model);
    let g_pore = born_solvation_energy(ion.charge, r_eff, epsilon_pore);

    // 体相溶剂化更有利（更负），故 ΔH = G_pore - G_bulk > 0
    Some(g_pore - g_bulk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ion_species;

    #[test]
    fn test_born_energy_domain_guard() {
        assert_eq!(born_solvation_energy(1, -1.0, 30.0), 0.0);
        assert_eq!(born_solvation_energy(1, 0.0, 30.0), 0.0);
        assert_eq!(born_solvation_energy(1, 1e-10, 0.0), 0.0);
    }

    #[test]
    fn test_born_energy_li_bulk() {
        // 裸 Li⁺ (r = 0.076 nm) 在 ε = 30 的体相溶剂中：
        // ΔG = -(N_A e²)/(8π ε₀ r)(1 - 1/30) ≈ -883 kJ/mol
        let g = born_solvation_energy(1, 0.076e-9, 30.0);
        assert!(g < 0.0, "solvation must be favorable");
        assert!((g + 883.0).abs() < 10.0, "got {}", g);
    }

    #[test]
    fn test_born_energy_charge_scaling() {
        // 能量按 z² 缩放
        let g1 = born_solvation_energy(1, 1e-10, 30.0);
        let g2 = born_solvation_energy(2, 1e-10, 30.0);
        assert!((g2 / g1 - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_confined_dielectric_limits() {
        let model = ConfinementModel::default();

        // 临界孔径处 sigmoid 中点：ε = (30 + 2)/2 = 16
        let mid = confined_dielectric(0.70, &model);
        assert!((mid - 16.0).abs() < 1e-9);

        // 大孔趋于体相，小孔趋于真空极限
        assert!((confined_dielectric(3.0, &model) - 30.0).abs() < 1e-3);
        assert!((confined_dielectric(0.3, &model) - 2.0).abs() < 0.6);
    }

    #[test]
    fn test_dehydration_steric_cutoff() {
        let model = ConfinementModel::default();
        let species = ion_species();
        let li_ec4 = species
            .iter()
            .find(|s| s.key == "Li_EC4")
            .expect("Li_EC4 in species table");

        // 溶剂化复合物 (d_solv = 0.90 nm) 在 0.7 nm 孔处被位阻阻断
        assert!(dehydration_enthalpy(0.70, li_ec4, &model).is_none());
        // 足够大的孔则存在有限能垒
        assert!(dehydration_enthalpy(1.0, li_ec4, &model).is_some());
    }

    #[test]
    fn test_dehydration_barrier_positive_in_cliff() {
        let model = ConfinementModel::default();
        let species = ion_species();
        let li = species.iter().find(|s| s.key == "Li+").unwrap();

        // 悬崖以下（强受限，但高于 Li⁺ 自身的位阻截止 0.61 nm）
        // 能垒为正且远大于悬崖以上
        let below = dehydration_enthalpy(0.65, li, &model).unwrap();
        let above = dehydration_enthalpy(2.0, li, &model).unwrap();
        assert!(below > 0.0);
        assert!(below > 100.0 * above.max(1e-6));
    }
}
