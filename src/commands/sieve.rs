//! # sieve 子命令实现
//!
//! 计算脱溶剂化能垒剖面与物种选择性，导出 JSON/报告并渲染图表。
//!
//! ## 流程
//! 1. 解析孔径范围，构建受限介电模型
//! 2. 全物种能垒剖面扫描（rayon 并行）
//! 3. 目标孔径处选择性分析
//! 4. JSON / 报告 / 图表输出
//!
//! ## 依赖关系
//! - 使用 `cli/sieve.rs` 定义的 SieveArgs
//! - 使用 `sieve/` 模块进行计算与导出
//! - 使用 `utils/output.rs` 打印

use crate::cli::sieve::SieveArgs;
use crate::cli::parse_range;
use crate::error::{Result, SsbError};
use crate::physics::born::ConfinementModel;
use crate::sieve::{
    compute_selectivity, compute_sieve_profiles, export, plot, profile::linspace,
    SelectivityAnalysis, SieveSweep,
};
use crate::utils::output;

use std::fs;

/// 执行 sieve 分析
pub fn execute(args: SieveArgs) -> Result<()> {
    output::print_header("Born Solvation Analysis: Dehydration Sieve");

    let (pore_min, pore_max) =
        parse_range(&args.pore_range).map_err(SsbError::InvalidRange)?;
    if args.points < 2 {
        return Err(SsbError::InvalidArgument(
            "--points must be at least 2".to_string(),
        ));
    }

    let model = ConfinementModel {
        epsilon_bulk: args.epsilon_bulk,
        ..ConfinementModel::default()
    };

    output::print_info(&format!(
        "Solvent: EC/DMC mixture (eps_bulk = {})",
        model.epsilon_bulk
    ));
    output::print_info(&format!(
        "Pore range: {:.2} - {:.2} nm ({} points)",
        pore_min, pore_max, args.points
    ));
    output::print_info(&format!(
        "Target pore: {:.2} nm at {} K",
        args.target_pore, args.temperature
    ));

    // 能垒剖面扫描
    let sweep = compute_sieve_profiles(
        linspace(pore_min, pore_max, args.points),
        model,
        args.target_pore,
    );
    print_profile_table(&sweep);

    // 选择性分析
    let selectivity = compute_selectivity(&sweep, args.temperature);
    print_selectivity_table(&selectivity);

    // 输出文件
    fs::create_dir_all(&args.output_dir).map_err(|e| SsbError::FileWriteError {
        path: args.output_dir.display().to_string(),
        source: e,
    })?;

    let profile_path = args.output_dir.join("dehydration_enthalpy_profile.json");
    export::write_profile_json(&sweep, &profile_path)?;
    output::print_success(&format!("Profile saved: {}", profile_path.display()));

    let selectivity_path = args.output_dir.join("species_selectivity.json");
    export::write_selectivity_json(&selectivity, &selectivity_path)?;
    output::print_success(&format!(
        "Selectivity saved: {}",
        selectivity_path.display()
    ));

    let report_path = args.output_dir.join("sieve_validation_report.txt");
    export::write_validation_report(&sweep, &selectivity, &report_path)?;
    output::print_success(&format!("Report saved: {}", report_path.display()));

    if args.no_plot {
        output::print_skip("Figure generation skipped (--no-plot)");
    } else {
        let ext = if args.svg { "svg" } else { "png" };
        let plot_path = args.output_dir.join(format!("dehydration_cliff.{}", ext));
        plot::generate_cliff_plot(&sweep, &plot_path, args.width, args.height, args.svg)?;
        output::print_success(&format!("Figure saved: {}", plot_path.display()));
    }

    output::print_done("Dehydration sieve analysis complete");
    Ok(())
}

/// 打印各物种剖面摘要表
fn print_profile_table(sweep: &SieveSweep) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct ProfileRow {
        #[tabled(rename = "Species")]
        name: String,
        #[tabled(rename = "Bare d (nm)")]
        bare: String,
        #[tabled(rename = "Solvated d (nm)")]
        solvated: String,
        #[tabled(rename = "Barrier (kJ/mol)")]
        barrier: String,
        #[tabled(rename = "Min pore (nm)")]
        min_pore: String,
        #[tabled(rename = "Status")]
        status: String,
    }

    let rows: Vec<ProfileRow> = sweep
        .species
        .iter()
        .map(|p| ProfileRow {
            name: p.ion.name.to_string(),
            bare: format!("{:.3}", p.ion.bare_diameter_nm()),
            solvated: format!("{:.3}", p.ion.solvated_diameter_nm()),
            barrier: match p.barrier_at_target {
                Some(b) => format!("{:.1}", b),
                None => "INFINITE (steric)".to_string(),
            },
            min_pore: match p.min_passable_pore_nm {
                Some(d) => format!("{:.3}", d),
                None => "NEVER".to_string(),
            },
            status: p.status.to_string(),
        })
        .collect();

    output::print_header(&format!(
        "Dehydration Barriers at {:.2} nm",
        sweep.target_pore_nm
    ));
    println!("{}", Table::new(&rows));
}

/// 打印选择性表
fn print_selectivity_table(analysis: &SelectivityAnalysis) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct SelectivityRow {
        #[tabled(rename = "Species")]
        name: String,
        #[tabled(rename = "Barrier (kJ/mol)")]
        barrier: String,
        #[tabled(rename = "Selectivity vs Li+")]
        selectivity: String,
        #[tabled(rename = "Status")]
        status: String,
    }

    let rows: Vec<SelectivityRow> = analysis
        .entries
        .iter()
        .map(|e| SelectivityRow {
            name: e.name.to_string(),
            barrier: match e.barrier_kj_mol {
                Some(b) => format!("{:.1}", b),
                None => "INFINITE".to_string(),
            },
            selectivity: e.class.label(),
            status: e.class.status().to_string(),
        })
        .collect();

    output::print_header(&format!(
        "Selectivity at {:.2} nm, {} K (RT = {:.3} kJ/mol)",
        analysis.target_pore_nm, analysis.temperature_k, analysis.rt_kj_mol
    ));
    println!("{}", Table::new(&rows));
}
