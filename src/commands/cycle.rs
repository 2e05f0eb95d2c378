//! # cycle 子命令实现
//!
//! 对点阵架构与致密基线各跑一次循环寿命模拟，打印对比表并导出
//! JSON / CSV / 图表。
//!
//! ## 依赖关系
//! - 使用 `cli/cycle.rs` 定义的 CycleArgs
//! - 使用 `cycle/` 模块进行模拟与导出
//! - 使用 `models/architecture.rs` 的两个内置架构

use crate::cli::cycle::CycleArgs;
use crate::cycle::{export, plot, run_cycle_life, CycleOutcome, CycleParams};
use crate::error::{Result, SsbError};
use crate::models::{baseline_architecture, gyroid_architecture, Architecture};
use crate::utils::output;

use std::fs;

/// 执行循环寿命模拟
pub fn execute(args: CycleArgs) -> Result<()> {
    output::print_header("Physics-Based Cycle Life Simulation");

    if args.dod <= 0.0 || args.dod > 1.0 {
        return Err(SsbError::InvalidArgument(
            "--dod must be within (0, 1]".to_string(),
        ));
    }
    if args.c_rate <= 0.0 {
        return Err(SsbError::InvalidArgument(
            "--c-rate must be positive".to_string(),
        ));
    }

    let params = CycleParams {
        n_cycles: args.cycles,
        t_celsius: args.temperature,
        c_rate: args.c_rate,
        dod: args.dod,
        current_density_ma_cm2: args.current_density,
        seed: args.seed,
    };

    output::print_info(&format!(
        "C-rate: C/{:.0}, DoD: {:.0}%, T: {} C, {} cycles max, seed {}",
        1.0 / params.c_rate,
        params.dod * 100.0,
        params.t_celsius,
        params.n_cycles,
        params.seed
    ));

    // 两种架构各模拟一次
    let gyroid_arch = gyroid_architecture();
    let baseline_arch = baseline_architecture();

    let gyroid = simulate(&gyroid_arch, &params);
    let baseline = simulate(&baseline_arch, &params);

    // 对比汇总
    print_comparison_table(&gyroid, &baseline);

    let improvement =
        f64::from(gyroid.cycles_to_80_pct) / f64::from(baseline.cycles_to_80_pct.max(1));
    output::print_info(&format!("Cycle life improvement: {:.1}x", improvement));

    // 输出文件
    fs::create_dir_all(&args.output_dir).map_err(|e| SsbError::FileWriteError {
        path: args.output_dir.display().to_string(),
        source: e,
    })?;

    let json_path = args.output_dir.join("cycle_life_results.json");
    export::write_results_json(&gyroid, &baseline, improvement, &json_path)?;
    output::print_success(&format!("Results saved: {}", json_path.display()));

    let csv_path = args.output_dir.join("cycle_life_physics.csv");
    export::write_history_csv(&gyroid, &csv_path)?;
    output::print_success(&format!("History saved: {}", csv_path.display()));

    if args.no_plot {
        output::print_skip("Figure generation skipped (--no-plot)");
    } else {
        let ext = if args.svg { "svg" } else { "png" };
        let plot_path = args.output_dir.join(format!("cycle_life_physics.{}", ext));
        plot::generate_cycle_life_plot(
            &gyroid,
            &baseline,
            &plot_path,
            args.width,
            args.height,
            args.svg,
        )?;
        output::print_success(&format!("Figure saved: {}", plot_path.display()));
    }

    output::print_done("Cycle life simulation complete");
    Ok(())
}

/// 运行单个架构并打印摘要
fn simulate(architecture: &Architecture, params: &CycleParams) -> CycleOutcome {
    output::print_info(&format!("Running: {}", architecture.name));
    output::print_info(&format!(
        "  K_constraint: {:.1} GPa, cycling stress: {:.1} MPa, dendrite barrier: {:.1} MPa",
        architecture.k_constraint_gpa,
        architecture.cycling_stress_amplitude_mpa(),
        architecture.dendrite_barrier_mpa()
    ));

    let outcome = run_cycle_life(architecture, params);

    output::print_success(&format!(
        "  Final: {:.1}% after {} cycles ({} dendrite events, cycles to 80%: {})",
        outcome.final_capacity * 100.0,
        outcome.n_cycles_tested,
        outcome.total_dendrite_events,
        outcome.cycles_to_80_pct
    ));

    outcome
}

/// 打印双架构对比表
fn print_comparison_table(gyroid: &CycleOutcome, baseline: &CycleOutcome) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct ComparisonRow {
        #[tabled(rename = "Metric")]
        metric: String,
        #[tabled(rename = "Gyroid Lattice")]
        gyroid: String,
        #[tabled(rename = "Dense Baseline")]
        baseline: String,
    }

    let rows = vec![
        ComparisonRow {
            metric: "K_constraint (GPa)".to_string(),
            gyroid: format!("{:.1}", gyroid.k_constraint_gpa),
            baseline: format!("{:.1}", baseline.k_constraint_gpa),
        },
        ComparisonRow {
            metric: "Cycling stress (MPa)".to_string(),
            gyroid: format!("{:.1}", gyroid.cycling_stress_mpa),
            baseline: format!("{:.1}", baseline.cycling_stress_mpa),
        },
        ComparisonRow {
            metric: "Dendrite barrier (MPa)".to_string(),
            gyroid: format!("{:.1}", gyroid.dendrite_barrier_mpa),
            baseline: format!("{:.1}", baseline.dendrite_barrier_mpa),
        },
        ComparisonRow {
            metric: "Final capacity".to_string(),
            gyroid: format!("{:.1}%", gyroid.final_capacity * 100.0),
            baseline: format!("{:.1}%", baseline.final_capacity * 100.0),
        },
        ComparisonRow {
            metric: "Cycles to 80%".to_string(),
            gyroid: gyroid.cycles_to_80_pct.to_string(),
            baseline: baseline.cycles_to_80_pct.to_string(),
        },
        ComparisonRow {
            metric: "Dendrite events".to_string(),
            gyroid: gyroid.total_dendrite_events.to_string(),
            baseline: baseline.total_dendrite_events.to_string(),
        },
        ComparisonRow {
            metric: "Final SEI (nm)".to_string(),
            gyroid: format!("{:.1}", gyroid.final_sei_nm),
            baseline: format!("{:.1}", baseline.final_sei_nm),
        },
    ];

    output::print_header("Comparison: Gyroid Lattice vs Dense Baseline");
    println!("{}", Table::new(&rows));
}
