//! # 筛分析数据导出
//!
//! 导出脱溶剂化能垒剖面与选择性分析到 JSON，以及纯文本验证报告。
//!
//! ## 输出文件
//! - `dehydration_enthalpy_profile.json` - 完整剖面与关键结果
//! - `species_selectivity.json`          - 目标孔径处的选择性
//! - `sieve_validation_report.txt`       - 设计判据核对报告
//!
//! ## 依赖关系
//! - 被 `commands/sieve.rs` 调用
//! - 使用 `sieve/profile.rs` 的扫描结果
//! - 使用 `serde_json` 序列化

use crate::error::{Result, SsbError};
use crate::sieve::profile::{SelectivityAnalysis, SieveSweep};

use chrono::Local;
use serde_json::{json, Map, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 有限能垒 → 数值（保留 2 位小数），位阻阻断 → "INFINITE"
fn barrier_value(barrier: Option<f64>) -> Value {
    match barrier {
        Some(b) => json!(round2(b)),
        None => json!("INFINITE"),
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// 导出完整剖面 JSON
pub fn write_profile_json(sweep: &SieveSweep, path: &Path) -> Result<()> {
    let mut species_map = Map::new();
    for p in &sweep.species {
        let profile: Vec<Value> = p
            .profile
            .iter()
            .map(|v| match v {
                Some(x) => json!(round2(*x)),
                None => Value::Null,
            })
            .collect();

        let min_passable = match p.min_passable_pore_nm {
            Some(d) => json!(round3(d)),
            None => json!("NEVER"),
        };

        species_map.insert(
            p.ion.key.to_string(),
            json!({
                "name": p.ion.name,
                "formula": p.ion.formula,
                "bare_radius_nm": p.ion.bare_radius_nm,
                "solvated_radius_nm": p.ion.solvated_radius_nm,
                "charge": p.ion.charge,
                "coordination_number": p.ion.coordination_number,
                "lit_hydration_enthalpy_kJ_mol": p.ion.hydration_enthalpy_kj_mol,
                "barrier_at_target_kJ_mol": barrier_value(p.barrier_at_target),
                "min_passable_pore_nm": min_passable,
                "status_at_target": p.status.to_string(),
                "enthalpy_profile_kJ_mol": profile,
            }),
        );
    }

    // 设计判据直接由扫描结果导出
    let solvated_blocked = ["Li_EC4", "Li_H2O4"].iter().all(|key| {
        sweep
            .species_by_key(key)
            .map(|p| p.barrier_at_target.map_or(true, |b| b > 400.0))
            .unwrap_or(false)
    });

    let document = json!({
        "simulation_id": "dehydration-sieve-v1",
        "method": "Modified Born solvation model",
        "date": Local::now().to_rfc3339(),
        "solvent": "EC/DMC (ethylene carbonate / dimethyl carbonate)",
        "epsilon_bulk": sweep.model.epsilon_bulk,
        "d_critical_nm": sweep.model.d_critical_nm,
        "target_pore_nm": sweep.target_pore_nm,
        "physics_basis": {
            "equation": "dG = -(N_A z^2 e^2)/(8 pi eps0 r) (1 - 1/eps_r)",
            "confinement_model": "Sigmoid dielectric collapse",
            "references": [
                "Born (1920) Z. Phys. 1, 45",
                "Marcus (1991) JCSFT 87, 2995",
                "Chmiola et al. (2006) Science 313, 1760",
            ],
        },
        "pore_diameters_nm": sweep.pore_diameters_nm,
        "species": Value::Object(species_map),
        "key_results": {
            "Li_barrier_at_target_kJ_mol": barrier_value(
                sweep.species_by_key("Li+").and_then(|p| p.barrier_at_target),
            ),
            "Li_EC4_barrier_at_target": barrier_value(
                sweep.species_by_key("Li_EC4").and_then(|p| p.barrier_at_target),
            ),
            "Li_H2O4_barrier_at_target": barrier_value(
                sweep.species_by_key("Li_H2O4").and_then(|p| p.barrier_at_target),
            ),
        },
        "design_criteria": {
            "solvated_barrier_above_400_kJ_mol": solvated_blocked,
            "critical_pore_within_0.6_to_0.8_nm":
                sweep.model.d_critical_nm >= 0.6 && sweep.model.d_critical_nm <= 0.8,
        },
    });

    write_json(&document, path)
}

/// 导出选择性 JSON
pub fn write_selectivity_json(analysis: &SelectivityAnalysis, path: &Path) -> Result<()> {
    let mut species_map = Map::new();
    for entry in &analysis.entries {
        species_map.insert(
            entry.key.to_string(),
            json!({
                "name": entry.name,
                "barrier_kJ_mol": barrier_value(entry.barrier_kj_mol),
                "selectivity": entry.class.label(),
                "status": entry.class.status(),
            }),
        );
    }

    let document = json!({
        "target_pore_nm": analysis.target_pore_nm,
        "temperature_K": analysis.temperature_k,
        "RT_kJ_mol": round3(analysis.rt_kj_mol),
        "Li_barrier_kJ_mol": round2(analysis.li_barrier_kj_mol),
        "species_selectivity": Value::Object(species_map),
    });

    write_json(&document, path)
}

/// 导出验证报告（纯文本）
pub fn write_validation_report(
    sweep: &SieveSweep,
    analysis: &SelectivityAnalysis,
    path: &Path,
) -> Result<()> {
    let mut file = BufWriter::new(File::create(path).map_err(|e| SsbError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?);

    write_report_body(&mut file, sweep, analysis).map_err(|e| SsbError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

fn write_report_body(
    out: &mut impl Write,
    sweep: &SieveSweep,
    analysis: &SelectivityAnalysis,
) -> std::io::Result<()> {
    let bar = "=".repeat(70);
    let dash = "-".repeat(70);

    writeln!(out, "{}", bar)?;
    writeln!(out, "DEHYDRATION SIEVE VALIDATION REPORT")?;
    writeln!(out, "{}", bar)?;
    writeln!(out, "Date: {}", Local::now().to_rfc3339())?;
    writeln!(out, "Method: Modified Born solvation model")?;
    writeln!(
        out,
        "Solvent: EC/DMC (eps_bulk = {})",
        sweep.model.epsilon_bulk
    )?;
    writeln!(out)?;

    writeln!(out, "DESIGN CRITERIA:")?;
    writeln!(out, "{}", dash)?;

    writeln!(
        out,
        "Criterion 1: Barrier > 400 kJ/mol for solvated species at {} nm",
        sweep.target_pore_nm
    )?;
    for key in ["Li_EC4", "Li_H2O4"] {
        if let Some(p) = sweep.species_by_key(key) {
            let barrier = match p.barrier_at_target {
                Some(b) => format!("{:.1} kJ/mol", b),
                None => "INFINITE (steric)".to_string(),
            };
            let ok = p.barrier_at_target.map_or(true, |b| b > 400.0);
            writeln!(
                out,
                "  {}: {} {}",
                p.ion.name,
                barrier,
                if ok { "PASS" } else { "FAIL" }
            )?;
        }
    }
    writeln!(out)?;

    writeln!(out, "Criterion 2: Selectivity > 1000:1 vs solvated complexes")?;
    for entry in &analysis.entries {
        if matches!(entry.key, "Li_EC4" | "Li_H2O4") {
            writeln!(
                out,
                "  Li+ (bare) vs {}: {} {}",
                entry.name,
                entry.class.label(),
                if entry.class.status() == "BLOCKED" {
                    "PASS"
                } else {
                    "FAIL"
                }
            )?;
        }
    }
    writeln!(out)?;

    let d_crit_ok = sweep.model.d_critical_nm >= 0.6 && sweep.model.d_critical_nm <= 0.8;
    writeln!(out, "Criterion 3: d_crit between 0.6-0.8 nm")?;
    writeln!(
        out,
        "  Model d_crit = {:.2} nm {}",
        sweep.model.d_critical_nm,
        if d_crit_ok { "PASS" } else { "FAIL" }
    )?;
    writeln!(out)?;
    writeln!(out, "{}", bar)?;

    Ok(())
}

fn write_json(document: &Value, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| SsbError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), document)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::born::ConfinementModel;
    use crate::sieve::profile::{compute_selectivity, compute_sieve_profiles, linspace};

    #[test]
    fn test_barrier_value_markers() {
        assert_eq!(barrier_value(None), json!("INFINITE"));
        assert_eq!(barrier_value(Some(26.654)), json!(26.65));
    }

    #[test]
    fn test_profile_json_roundtrip() {
        let sweep =
            compute_sieve_profiles(linspace(0.3, 3.0, 50), ConfinementModel::default(), 0.70);
        let analysis = compute_selectivity(&sweep, 300.0);

        let dir = std::env::temp_dir().join(format!("ssbtool_sieve_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let profile_path = dir.join("profile.json");
        let selectivity_path = dir.join("selectivity.json");
        let report_path = dir.join("report.txt");

        write_profile_json(&sweep, &profile_path).unwrap();
        write_selectivity_json(&analysis, &selectivity_path).unwrap();
        write_validation_report(&sweep, &analysis, &report_path).unwrap();

        // 位阻阻断的物种在 JSON 中必须是 "INFINITE" 标记
        let parsed: Value =
            serde_json::from_str(&std::fs::read_to_string(&profile_path).unwrap()).unwrap();
        assert_eq!(
            parsed["species"]["Li_EC4"]["barrier_at_target_kJ_mol"],
            json!("INFINITE")
        );
        assert_eq!(parsed["design_criteria"]["solvated_barrier_above_400_kJ_mol"], json!(true));

        let report = std::fs::read_to_string(&report_path).unwrap();
        assert!(report.contains("DESIGN CRITERIA"));
        assert!(report.contains("PASS"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
