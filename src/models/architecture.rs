//! # 电池架构参数
//!
//! 描述一种固态电池架构的力学/几何属性，以及两个由字段按需派生的
//! 标量：循环应力幅与枝晶应变能垒。构造后不再修改。
//!
//! ## 依赖关系
//! - 被 `physics/degradation.rs` 与 `cycle/` 使用

use crate::physics::constants::LI_YIELD_STRENGTH_MPA;

use serde::Serialize;

/// 枝晶尖端的失配应变（5%）
const EPSILON_MISFIT: f64 = 0.05;

/// 固态电池架构的物理属性
#[derive(Debug, Clone, Serialize)]
pub struct Architecture {
    /// 架构名称
    pub name: &'static str,

    // ─────────────────────────────────────────────────────────────
    // 力学属性
    // ─────────────────────────────────────────────────────────────
    /// 有效内部约束刚度 (GPa)
    pub k_constraint_gpa: f64,
    /// 隔膜杨氏模量 (GPa)
    pub e_separator_gpa: f64,
    /// 孔隙率
    pub porosity: f64,

    // ─────────────────────────────────────────────────────────────
    // 界面属性
    // ─────────────────────────────────────────────────────────────
    /// 隔膜与锂接触的面积分数
    pub contact_area_fraction: f64,
    /// 界面应力集中系数 K_t
    pub stress_concentration_factor: f64,

    // ─────────────────────────────────────────────────────────────
    // 几何
    // ─────────────────────────────────────────────────────────────
    /// 点阵架构的杆件厚度 (μm)
    pub strut_thickness_um: f64,
    /// 单胞尺寸 (μm)
    pub unit_cell_um: f64,
}

impl Architecture {
    /// 锂体积变化引起的循环应力幅 (MPa)
    ///
    /// 锂极软（σ_yield ≈ 0.6-5 MPa），弹性应力尚未累积即发生塑性
    /// 蠕变，故界面应力以屈服强度为上限：均匀分布的点阵架构
    /// σ ≈ σ_yield，而应力集中于晶界三叉点的致密基线
    /// σ_local = K_t × σ_yield。
    pub fn cycling_stress_amplitude_mpa(&self) -> f64 {
        LI_YIELD_STRENGTH_MPA * self.stress_concentration_factor
    }

    /// 约束刚度带来的枝晶应变能垒 (MPa)
    ///
    /// W = ½ × K_constraint × ε_misfit²，约束刚度越高，枝晶生长
    /// 需克服的能垒越高。
    pub fn dendrite_barrier_mpa(&self) -> f64 {
        0.5 * self.k_constraint_gpa * 1000.0 * EPSILON_MISFIT * EPSILON_MISFIT
    }
}

/// 陀螺型（Gyroid）点阵架构：内部约束分散载荷
pub fn gyroid_architecture() -> Architecture {
    Architecture {
        name: "Gyroid Lattice (internal constraint)",
        // E_s × f_s × (t/a)^n
        k_constraint_gpa: 6.7,
        // 多孔 LLZO 的有效模量
        e_separator_gpa: 22.5,
        porosity: 0.40,
        // TPMS 曲面：高接触、低应力集中
        contact_area_fraction: 0.60,
        stress_concentration_factor: 2.0,
        strut_thickness_um: 2.5,
        unit_cell_um: 10.0,
    }
}

/// 致密 LLZO 基线架构：无内部约束，依赖外部夹持
pub fn baseline_architecture() -> Architecture {
    Architecture {
        name: "Dense LLZO Baseline (external clamping)",
        k_constraint_gpa: 0.0,
        e_separator_gpa: 150.0,
        porosity: 0.0,
        // 致密接触但应力集中于晶界三叉点
        contact_area_fraction: 0.95,
        stress_concentration_factor: 7.0,
        strut_thickness_um: 0.0,
        unit_cell_um: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stress_amplitude() {
        // σ = σ_yield × K_t
        assert!((gyroid_architecture().cycling_stress_amplitude_mpa() - 4.0).abs() < 1e-12);
        assert!((baseline_architecture().cycling_stress_amplitude_mpa() - 14.0).abs() < 1e-12);
    }

    #[test]
    fn test_dendrite_barrier() {
        // W = 0.5 × 6.7 GPa × 0.05² = 8.375 MPa
        assert!((gyroid_architecture().dendrite_barrier_mpa() - 8.375).abs() < 1e-9);
        assert_eq!(baseline_architecture().dendrite_barrier_mpa(), 0.0);
    }
}
