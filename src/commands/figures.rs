//! # figures 子命令实现
//!
//! 白皮书图表的批量渲染：每幅图作为独立任务经 `batch/` 并行执行，
//! 汇总成功/跳过/失败统计。
//!
//! ## 依赖关系
//! - 使用 `cli/figures.rs` 定义的 FiguresArgs 与 FigureKind
//! - 使用 `figures/` 各渲染模块
//! - 使用 `batch/` 并行执行

use crate::batch::{BatchRunner, ProcessResult};
use crate::cli::figures::{FigureKind, FiguresArgs};
use crate::error::{Result, SsbError};
use crate::figures::{self, FigureContext};
use crate::utils::output;

use std::fs;
use std::path::Path;
use std::sync::Arc;

/// 执行图表批量生成
pub fn execute(args: FiguresArgs) -> Result<()> {
    output::print_header("White-Paper Figure Generation");

    let kinds = args.only.clone().unwrap_or_else(FigureKind::all);
    output::print_info(&format!(
        "Rendering {} figure(s) to '{}'",
        kinds.len(),
        args.output_dir.display()
    ));
    output::print_info(&format!(
        "Validation data directory: '{}'",
        args.data_dir.display()
    ));

    fs::create_dir_all(&args.output_dir).map_err(|e| SsbError::FileWriteError {
        path: args.output_dir.display().to_string(),
        source: e,
    })?;

    let ctx = Arc::new(FigureContext {
        data_dir: args.data_dir.clone(),
        width: args.width,
        height: args.height,
        use_svg: args.svg,
    });
    let ext = if args.svg { "svg" } else { "png" };

    // 并行渲染
    let runner = BatchRunner::new(args.jobs);
    let output_dir = args.output_dir.clone();
    let overwrite = args.overwrite;

    let result = runner.run(kinds, move |&kind| {
        let out_path = output_dir.join(format!("{}.{}", kind.file_stem(), ext));

        if out_path.exists() && !overwrite {
            return ProcessResult::Skipped(format!(
                "Output exists, skipping: {}",
                out_path.display()
            ));
        }

        match render_figure(kind, &ctx, &out_path) {
            Ok(()) => ProcessResult::Success(out_path.display().to_string()),
            Err(e) => ProcessResult::Failed(kind.to_string(), e.to_string()),
        }
    });

    // 汇总
    output::print_separator();
    output::print_success(&format!(
        "Figure batch complete: {} success, {} skipped, {} failed",
        result.success, result.skipped, result.failed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed figures:");
        for (name, err) in &result.failures {
            output::print_error(&format!("  {}: {}", name, err));
        }
        return Err(SsbError::Other(format!(
            "{} figure(s) failed to render",
            result.failed
        )));
    }

    Ok(())
}

/// 渲染单幅图表
fn render_figure(kind: FigureKind, ctx: &FigureContext, out_path: &Path) -> Result<()> {
    match kind {
        FigureKind::Pressure => figures::fracture::render(ctx, out_path),
        FigureKind::Creep => figures::creep::render(ctx, out_path),
        FigureKind::Cycling => figures::cycling::render(ctx, out_path),
        FigureKind::Conductivity => figures::conductivity::render(ctx, out_path),
        FigureKind::Dendrite => figures::dendrite::render(ctx, out_path),
        FigureKind::Landscape => figures::landscape::render(ctx, out_path),
    }
}
