//! # 离子物种参数表
//!
//! 文献取值的静态参考数据：
//! - 裸离子半径: Shannon (1976) Acta Cryst. A32, 751
//! - 溶剂化半径: Marcus (1988) Chem. Rev. 88, 1475
//! - 水合焓: Marcus (1991) J. Chem. Soc. Faraday Trans.
//!
//! ## 依赖关系
//! - 被 `physics/born.rs` 与 `sieve/` 使用

use serde::Serialize;

/// 离子物种属性（只读参考数据）
#[derive(Debug, Clone, Serialize)]
pub struct IonSpecies {
    /// 查找键（JSON 输出中的物种标识）
    pub key: &'static str,
    /// 显示名称
    pub name: &'static str,
    /// 化学式
    pub formula: &'static str,
    /// 裸离子半径 (nm)
    pub bare_radius_nm: f64,
    /// 含完整溶剂化壳的半径 (nm)
    pub solvated_radius_nm: f64,
    /// 形式电荷
    pub charge: i32,
    /// 第一溶剂化壳配位数
    pub coordination_number: u32,
    /// 文献水合焓 (kJ/mol)
    pub hydration_enthalpy_kj_mol: f64,
    /// 说明
    pub description: &'static str,
}

impl IonSpecies {
    /// 裸离子直径 (nm)
    pub fn bare_diameter_nm(&self) -> f64 {
        2.0 * self.bare_radius_nm
    }

    /// 溶剂化直径 (nm)
    pub fn solvated_diameter_nm(&self) -> f64 {
        2.0 * self.solvated_radius_nm
    }
}

/// 全部离子物种参数表
pub fn ion_species() -> Vec<IonSpecies> {
    vec![
        IonSpecies {
            key: "Li+",
            name: "Li⁺ (bare)",
            formula: "Li+",
            bare_radius_nm: 0.076,
            // 碳酸酯电解液中的 Li(EC)₄⁺
            solvated_radius_nm: 0.382,
            charge: 1,
            coordination_number: 4,
            // 水中取值；EC/DMC 中约 450
            hydration_enthalpy_kj_mol: 520.0,
            description: "Target transport species",
        },
        IonSpecies {
            key: "Na+",
            name: "Na⁺ (bare)",
            formula: "Na+",
            bare_radius_nm: 0.102,
            solvated_radius_nm: 0.358,
            charge: 1,
            coordination_number: 6,
            hydration_enthalpy_kj_mol: 405.0,
            description: "Reference alkali ion",
        },
        IonSpecies {
            key: "Li_EC4",
            name: "Li⁺(EC)₄ (solvated)",
            formula: "Li(EC)4+",
            bare_radius_nm: 0.076,
            solvated_radius_nm: 0.450,
            charge: 1,
            coordination_number: 4,
            hydration_enthalpy_kj_mol: 520.0,
            description: "Solvated complex, must be blocked",
        },
        IonSpecies {
            key: "Li_H2O4",
            name: "Li⁺(H₂O)₄ (hydrated)",
            formula: "Li(H2O)4+",
            bare_radius_nm: 0.076,
            solvated_radius_nm: 0.340,
            charge: 1,
            coordination_number: 4,
            hydration_enthalpy_kj_mol: 520.0,
            description: "Hydrated complex",
        },
        IonSpecies {
            key: "dendrite_tip",
            name: "Dendrite Tip",
            formula: "Li(metal)",
            // 枝晶尖端半径 50-500 nm
            bare_radius_nm: 50.0,
            solvated_radius_nm: 50.0,
            charge: 0,
            coordination_number: 0,
            hydration_enthalpy_kj_mol: 0.0,
            description: "Metallic lithium protrusion, must be blocked",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_table() {
        let species = ion_species();
        assert_eq!(species.len(), 5);

        let li = species.iter().find(|s| s.key == "Li+").unwrap();
        // 裸 Li⁺ 直径 0.152 nm，可通过 0.7 nm 孔
        assert!(li.bare_diameter_nm() < 0.70);
        // 其溶剂化壳直径 0.764 nm，不可通过
        assert!(li.solvated_diameter_nm() > 0.70);

        let tip = species.iter().find(|s| s.key == "dendrite_tip").unwrap();
        assert_eq!(tip.charge, 0);
        assert!(tip.bare_diameter_nm() > 0.70);
    }
}
