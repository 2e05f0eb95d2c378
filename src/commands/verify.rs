//! # verify 子命令实现
//!
//! 验证套件：读取验证数据，从第一性原理重算关键指标，与声称值
//! 交叉核对，写出报告。任一检查未通过时返回错误（进程退出码 1）。
//!
//! ## 依赖关系
//! - 使用 `cli/verify.rs` 定义的 VerifyArgs
//! - 使用 `data/` 读取验证数据
//! - 使用 `verify/` 的检查与报告生成

use crate::cli::verify::VerifyArgs;
use crate::data::{load_conductivity_data, load_cycling_data, load_dendrite_data};
use crate::error::{Result, SsbError};
use crate::models::VerificationResult;
use crate::utils::output;
use crate::verify::{
    check_critical_pressure, check_cycle_life, check_dendrite_suppression,
    check_ionic_conductivity, write_verification_report,
};

use std::fs;

/// 执行验证套件
pub fn execute(args: VerifyArgs) -> Result<()> {
    output::print_header("Solid-State Battery Claims: Verification Suite");

    let mut all_results: Vec<VerificationResult> = Vec::new();

    // 1. 读取数据文件
    output::print_info("[1/5] Loading validation data files...");
    let dendrite_path = args.data_dir.join("dendrite_suppression_results.json");
    let conductivity_path = args.data_dir.join("conductivity_results.json");
    let cycling_path = args.data_dir.join("zero_pressure_cycling.csv");

    output::print_info(&format!("  Loading: {}", dendrite_path.display()));
    let dendrite_data = load_dendrite_data(&dendrite_path)?;
    output::print_info(&format!("  Loading: {}", conductivity_path.display()));
    let conductivity_data = load_conductivity_data(&conductivity_path)?;
    output::print_info(&format!("  Loading: {}", cycling_path.display()));
    let cycling_records = load_cycling_data(&cycling_path)?;
    output::print_success("All data files loaded");

    // 2-5. 各组检查
    output::print_info("[2/5] Verifying dendrite suppression claims...");
    run_group(
        check_dendrite_suppression(&dendrite_data),
        &mut all_results,
        args.verbose,
    );

    output::print_info("[3/5] Verifying ionic conductivity claims...");
    run_group(
        check_ionic_conductivity(&conductivity_data),
        &mut all_results,
        args.verbose,
    );

    output::print_info("[4/5] Verifying cycle life claims...");
    run_group(
        check_cycle_life(&cycling_records),
        &mut all_results,
        args.verbose,
    );

    output::print_info("[5/5] Verifying critical pressure threshold...");
    run_group(check_critical_pressure(), &mut all_results, args.verbose);

    // 汇总
    print_summary_table(&all_results);

    let passed = all_results.iter().filter(|r| r.passed).count();
    let total = all_results.len();
    output::print_separator();
    if passed == total {
        output::print_success(&format!("Verification summary: {}/{} checks passed", passed, total));
    } else {
        output::print_warning(&format!("Verification summary: {}/{} checks passed", passed, total));
    }

    // 报告
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| SsbError::FileWriteError {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
    }
    write_verification_report(&all_results, &args.output)?;
    output::print_success(&format!("Report saved: {}", args.output.display()));

    if passed == total {
        output::print_done("All claims verified successfully");
        Ok(())
    } else {
        for r in all_results.iter().filter(|r| !r.passed) {
            output::print_error(&format!("  Failed: {}", r.name));
        }
        Err(SsbError::VerificationFailed {
            failed: total - passed,
            total,
        })
    }
}

/// 运行一组检查并打印逐项结果
fn run_group(results: Vec<VerificationResult>, all: &mut Vec<VerificationResult>, verbose: bool) {
    for r in &results {
        output::print_check(&r.name, r.passed);
        if verbose {
            println!("{}", r);
        }
    }
    all.extend(results);
}

/// 打印汇总表
fn print_summary_table(results: &[VerificationResult]) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct CheckRow {
        #[tabled(rename = "Check")]
        name: String,
        #[tabled(rename = "Expected")]
        expected: String,
        #[tabled(rename = "Calculated")]
        calculated: String,
        #[tabled(rename = "Unit")]
        unit: String,
        #[tabled(rename = "Status")]
        status: String,
    }

    let rows: Vec<CheckRow> = results
        .iter()
        .map(|r| CheckRow {
            name: r.name.clone(),
            expected: format!("{:.4}", r.expected_value),
            calculated: format!("{:.4}", r.calculated_value),
            unit: r.unit.clone(),
            status: if r.passed { "PASS" } else { "FAIL" }.to_string(),
        })
        .collect();

    output::print_header("Verification Results");
    println!("{}", Table::new(&rows));
}
