//! # 脱溶剂化能垒剖面计算
//!
//! 对全部离子物种在给定孔径范围上计算脱溶剂化能垒剖面，并在目标
//! 孔径处做选择性分析。
//!
//! ## 算法概述
//! 1. 逐物种、逐孔径求 Born 脱溶剂化能垒（物种间 rayon 并行）
//! 2. 位阻阻断以 `None` 表示（无穷能垒）
//! 3. 目标孔径处按 ΔΔG/RT 划分选择性等级
//!
//! ## 依赖关系
//! - 被 `commands/sieve.rs` 与 `sieve/export.rs`, `sieve/plot.rs` 使用
//! - 使用 `physics/born.rs` 的模型函数
//! - 使用 `rayon` 并行扫描

use crate::models::{ion_species, IonSpecies};
use crate::physics::born::{dehydration_enthalpy, ConfinementModel};
use crate::physics::constants::{AVOGADRO, BOLTZMANN_J};

use rayon::prelude::*;
use std::fmt;

/// 物种在目标孔径处的通过状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SieveStatus {
    /// 自由通过
    Passes,
    /// 低能垒通过
    PassesLowBarrier,
    /// 部分阻断（能垒型）
    PartiallyBlocked,
    /// 完全阻断（位阻型）
    BlockedSteric,
}

impl fmt::Display for SieveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SieveStatus::Passes => write!(f, "PASSES"),
            SieveStatus::PassesLowBarrier => write!(f, "PASSES (low barrier)"),
            SieveStatus::PartiallyBlocked => write!(f, "PARTIALLY BLOCKED (energetic)"),
            SieveStatus::BlockedSteric => write!(f, "BLOCKED (steric)"),
        }
    }
}

/// 单一物种的能垒剖面
#[derive(Debug, Clone)]
pub struct SpeciesProfile {
    /// 物种参数
    pub ion: IonSpecies,
    /// 各孔径处的能垒 (kJ/mol)，`None` 为位阻阻断
    pub profile: Vec<Option<f64>>,
    /// 目标孔径处的能垒
    pub barrier_at_target: Option<f64>,
    /// 最小可通过孔径 (nm)
    pub min_passable_pore_nm: Option<f64>,
    /// 目标孔径处的通过状态
    pub status: SieveStatus,
}

/// 完整的孔径扫描结果
#[derive(Debug, Clone)]
pub struct SieveSweep {
    /// 孔径网格 (nm)
    pub pore_diameters_nm: Vec<f64>,
    /// 目标孔径 (nm)
    pub target_pore_nm: f64,
    /// 受限介电模型
    pub model: ConfinementModel,
    /// 各物种剖面
    pub species: Vec<SpeciesProfile>,
}

impl SieveSweep {
    /// 目标孔径在网格中的索引（最近点）
    pub fn target_index(&self) -> usize {
        nearest_index(&self.pore_diameters_nm, self.target_pore_nm)
    }

    /// 按键查找物种剖面
    pub fn species_by_key(&self, key: &str) -> Option<&SpeciesProfile> {
        self.species.iter().find(|p| p.ion.key == key)
    }
}

/// 计算全部物种的脱溶剂化能垒剖面
pub fn compute_sieve_profiles(
    pore_diameters_nm: Vec<f64>,
    model: ConfinementModel,
    target_pore_nm: f64,
) -> SieveSweep {
    let target_idx = nearest_index(&pore_diameters_nm, target_pore_nm);

    let species: Vec<SpeciesProfile> = ion_species()
        .into_par_iter()
        .map(|ion| {
            let profile: Vec<Option<f64>> = pore_diameters_nm
                .iter()
                .map(|&d| dehydration_enthalpy(d, &ion, &model))
                .collect();

            let barrier_at_target = profile.get(target_idx).copied().flatten();

            let min_passable_pore_nm = profile
                .iter()
                .position(Option::is_some)
                .map(|i| pore_diameters_nm[i]);

            let status = classify_status(&ion, barrier_at_target, target_pore_nm);

            SpeciesProfile {
                ion,
                profile,
                barrier_at_target,
                min_passable_pore_nm,
                status,
            }
        })
        .collect();

    SieveSweep {
        pore_diameters_nm,
        target_pore_nm,
        model,
        species,
    }
}

/// 目标孔径处的通过状态判定
///
/// 裸碱金属离子（直径小于目标孔径）自由通过；其余物种按能垒
/// 大小分级：位阻或 > 200 kJ/mol 视为阻断，< 50 kJ/mol 视为
/// 低能垒通过，其间为部分阻断。
fn classify_status(ion: &IonSpecies, barrier: Option<f64>, target_pore_nm: f64) -> SieveStatus {
    let bare_fits = ion.bare_diameter_nm() < target_pore_nm;

    // 裸离子目标物种直接通过
    if bare_fits && matches!(ion.key, "Li+" | "Na+") {
        return SieveStatus::Passes;
    }

    if !bare_fits {
        return SieveStatus::BlockedSteric;
    }

    match barrier {
        None => SieveStatus::BlockedSteric,
        Some(b) if b > 200.0 => SieveStatus::BlockedSteric,
        Some(b) if b < 50.0 => SieveStatus::PassesLowBarrier,
        Some(_) => SieveStatus::PartiallyBlocked,
    }
}

// ─────────────────────────────────────────────────────────────
// 选择性分析
// ─────────────────────────────────────────────────────────────

/// 选择性等级
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectivityClass {
    /// 位阻阻断，选择性无穷大
    Infinite,
    /// ΔΔG > 100 kJ/mol：数值溢出，以数量级表示 (>10^k)
    OrderOfMagnitude(i64),
    /// ΔΔG > 20 kJ/mol：指数比值（科学计数）
    Ratio(f64),
    /// ΔΔG > 5 kJ/mol：部分选择 (N:1)
    Partial(f64),
    /// 自由通过 (1:1)
    Pass,
}

impl SelectivityClass {
    /// 表格中的选择性数值列
    pub fn label(&self) -> String {
        match self {
            SelectivityClass::Infinite => "INFINITE".to_string(),
            SelectivityClass::OrderOfMagnitude(k) => format!(">10^{}", k),
            SelectivityClass::Ratio(r) => format!("{:.1e}", r),
            SelectivityClass::Partial(r) => format!("{:.0}:1", r),
            SelectivityClass::Pass => "1:1 (passes)".to_string(),
        }
    }

    /// 表格中的状态列
    pub fn status(&self) -> &'static str {
        match self {
            SelectivityClass::Infinite
            | SelectivityClass::OrderOfMagnitude(_)
            | SelectivityClass::Ratio(_) => "BLOCKED",
            SelectivityClass::Partial(_) => "PARTIAL",
            SelectivityClass::Pass => "PASS",
        }
    }
}

/// 单一物种的选择性条目
#[derive(Debug, Clone)]
pub struct SelectivityEntry {
    pub key: &'static str,
    pub name: &'static str,
    /// 目标孔径处的能垒，`None` 为位阻阻断
    pub barrier_kj_mol: Option<f64>,
    pub class: SelectivityClass,
}

/// 目标孔径处的选择性分析
#[derive(Debug, Clone)]
pub struct SelectivityAnalysis {
    pub target_pore_nm: f64,
    pub temperature_k: f64,
    /// RT 能量尺度 (kJ/mol)
    pub rt_kj_mol: f64,
    /// 参考物种（裸 Li⁺）的能垒
    pub li_barrier_kj_mol: f64,
    pub entries: Vec<SelectivityEntry>,
}

/// 相对裸 Li⁺ 的选择性：ratio = exp(ΔΔG / RT)
pub fn compute_selectivity(sweep: &SieveSweep, temperature_k: f64) -> SelectivityAnalysis {
    let rt_kj_mol = BOLTZMANN_J * temperature_k * AVOGADRO / 1000.0;

    let li_barrier = sweep
        .species_by_key("Li+")
        .and_then(|p| p.barrier_at_target)
        .unwrap_or(0.0);

    let entries = sweep
        .species
        .iter()
        .map(|p| {
            let class = match p.barrier_at_target {
                None => SelectivityClass::Infinite,
                Some(barrier) => {
                    let delta = barrier - li_barrier;
                    if delta > 100.0 {
                        SelectivityClass::OrderOfMagnitude(
                            (delta / (std::f64::consts::LN_10 * rt_kj_mol)) as i64,
                        )
                    } else if delta > 20.0 {
                        SelectivityClass::Ratio((delta / rt_kj_mol).exp())
                    } else if delta > 5.0 {
                        SelectivityClass::Partial((delta / rt_kj_mol).exp())
                    } else {
                        SelectivityClass::Pass
                    }
                }
            };

            SelectivityEntry {
                key: p.ion.key,
                name: p.ion.name,
                barrier_kj_mol: p.barrier_at_target,
                class,
            }
        })
        .collect();

    SelectivityAnalysis {
        target_pore_nm: sweep.target_pore_nm,
        temperature_k,
        rt_kj_mol,
        li_barrier_kj_mol: li_barrier,
        entries,
    }
}

/// 等间距网格
pub fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    if points < 2 {
        return vec![start];
    }
    let step = (end - start) / (points - 1) as f64;
    (0..points).map(|i| start + step * i as f64).collect()
}

/// 最接近目标值的索引
fn nearest_index(grid: &[f64], target: f64) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, &v) in grid.iter().enumerate() {
        let dist = (v - target).abs();
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_sweep() -> SieveSweep {
        compute_sieve_profiles(linspace(0.3, 3.0, 500), ConfinementModel::default(), 0.70)
    }

    #[test]
    fn test_linspace() {
        let grid = linspace(0.3, 3.0, 500);
        assert_eq!(grid.len(), 500);
        assert!((grid[0] - 0.3).abs() < 1e-12);
        assert!((grid[499] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_bare_ions_pass() {
        let sweep = default_sweep();
        assert_eq!(sweep.species_by_key("Li+").unwrap().status, SieveStatus::Passes);
        assert_eq!(sweep.species_by_key("Na+").unwrap().status, SieveStatus::Passes);
    }

    #[test]
    fn test_solvated_complexes_blocked() {
        let sweep = default_sweep();

        // Li(EC)₄⁺：溶剂化直径 0.90 nm，0.7 nm 孔处位阻阻断
        let ec4 = sweep.species_by_key("Li_EC4").unwrap();
        assert!(ec4.barrier_at_target.is_none());
        assert_eq!(ec4.status, SieveStatus::BlockedSteric);

        // 枝晶尖端（直径 100 nm）在整个扫描范围内永不通过
        let tip = sweep.species_by_key("dendrite_tip").unwrap();
        assert!(tip.min_passable_pore_nm.is_none());
        assert_eq!(tip.status, SieveStatus::BlockedSteric);
    }

    #[test]
    fn test_min_passable_pore_matches_steric_cutoff() {
        let sweep = default_sweep();
        let ec4 = sweep.species_by_key("Li_EC4").unwrap();
        // 位阻截止 0.8 × 0.90 nm = 0.72 nm
        let min_pore = ec4.min_passable_pore_nm.unwrap();
        assert!((min_pore - 0.72).abs() < 0.01, "got {}", min_pore);
    }

    #[test]
    fn test_selectivity_classes() {
        let sweep = default_sweep();
        let analysis = compute_selectivity(&sweep, 300.0);

        assert!((analysis.rt_kj_mol - 2.494).abs() < 0.01);

        let class_of = |key: &str| {
            analysis
                .entries
                .iter()
                .find(|e| e.key == key)
                .unwrap()
                .class
        };

        // 参考物种自身必为自由通过
        assert_eq!(class_of("Li+"), SelectivityClass::Pass);
        // 位阻阻断的复合物选择性无穷大
        assert_eq!(class_of("Li_EC4"), SelectivityClass::Infinite);
        assert_eq!(class_of("dendrite_tip"), SelectivityClass::Infinite);
    }

    #[test]
    fn test_selectivity_labels() {
        assert_eq!(SelectivityClass::Infinite.label(), "INFINITE");
        assert_eq!(SelectivityClass::OrderOfMagnitude(20).label(), ">10^20");
        assert_eq!(SelectivityClass::Pass.status(), "PASS");
        assert_eq!(SelectivityClass::Partial(12.0).status(), "PARTIAL");
    }
}
