//! # 循环寿命图表
//!
//! 双栏图：左栏为两种架构的容量保持率曲线（含 80% EOL 阈值线），
//! 右栏为点阵架构的退化来源堆叠分解。
//!
//! ## 依赖关系
//! - 被 `commands/cycle.rs` 调用
//! - 使用 `cycle/simulator.rs` 的 CycleOutcome
//! - 使用 `plotters` 渲染图表

use crate::cycle::simulator::CycleOutcome;
use crate::error::{Result, SsbError};

use plotters::prelude::*;
use std::path::Path;

/// 生成循环寿命图 (PNG 或 SVG)
pub fn generate_cycle_life_plot(
    gyroid: &CycleOutcome,
    baseline: &CycleOutcome,
    output_path: &Path,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_cycle_chart(&root, gyroid, baseline)?;
        root.present().map_err(|e| SsbError::PlotError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_cycle_chart(&root, gyroid, baseline)?;
        root.present().map_err(|e| SsbError::PlotError(e.to_string()))?;
    }
    Ok(())
}

fn draw_cycle_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    gyroid: &CycleOutcome,
    baseline: &CycleOutcome,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?;

    let panels = root.split_evenly((1, 2));
    draw_retention_panel(&panels[0], gyroid, baseline)?;
    draw_breakdown_panel(&panels[1], gyroid)?;

    Ok(())
}

/// 左栏：容量保持率对比
fn draw_retention_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    gyroid: &CycleOutcome,
    baseline: &CycleOutcome,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let x_max = gyroid
        .history
        .last()
        .map(|s| s.cycle)
        .max(baseline.history.last().map(|s| s.cycle))
        .unwrap_or(1000) as f64;

    let mut chart = ChartBuilder::on(area)
        .caption("Physics-Based Cycle Life", ("sans-serif", 24).into_font())
        .margin(25)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max * 1.02, 50.0..102.0)
        .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Cycle Number")
        .y_desc("Capacity Retention (%)")
        .x_label_style(("sans-serif", 14))
        .y_label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?;

    let gyroid_color = RGBColor(46, 125, 50);
    let baseline_color = RGBColor(211, 47, 47);

    for (outcome, color) in [(gyroid, gyroid_color), (baseline, baseline_color)] {
        chart
            .draw_series(LineSeries::new(
                outcome
                    .history
                    .iter()
                    .map(|s| (s.cycle as f64, s.capacity_retention * 100.0)),
                color.stroke_width(2),
            ))
            .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?
            .label(format!(
                "{} (K = {} GPa)",
                outcome.architecture, outcome.k_constraint_gpa
            ))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        // 采样点标记
        chart
            .draw_series(outcome.history.iter().map(|s| {
                Circle::new(
                    (s.cycle as f64, s.capacity_retention * 100.0),
                    2,
                    color.filled(),
                )
            }))
            .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?;
    }

    // 80% EOL 阈值线
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(0.0, 80.0), (x_max * 1.02, 80.0)],
            RGBColor(255, 152, 0).stroke_width(2),
        )))
        .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?
        .label("80% EOL threshold")
        .legend(|(x, y)| {
            PathElement::new(
                vec![(x, y), (x + 20, y)],
                RGBColor(255, 152, 0).stroke_width(2),
            )
        });

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerLeft)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.3))
        .label_font(("sans-serif", 12))
        .draw()
        .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?;

    Ok(())
}

/// 右栏：点阵架构退化来源堆叠分解
fn draw_breakdown_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    outcome: &CycleOutcome,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let x_max = outcome.history.last().map(|s| s.cycle).unwrap_or(1000) as f64;
    let y_max = outcome
        .history
        .iter()
        .map(|s| s.cap_loss_sei_pct + s.cap_loss_fatigue_pct + s.cap_loss_dendrite_pct)
        .fold(0.0_f64, f64::max)
        .max(1.0)
        * 1.15;

    let mut chart = ChartBuilder::on(area)
        .caption("Degradation Breakdown", ("sans-serif", 24).into_font())
        .margin(25)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max * 1.02, 0.0..y_max)
        .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Cycle Number")
        .y_desc("Cumulative Capacity Loss (%)")
        .x_label_style(("sans-serif", 14))
        .y_label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?;

    let sei_color = RGBColor(255, 193, 7);
    let fatigue_color = RGBColor(255, 87, 34);
    let dendrite_color = RGBColor(156, 39, 176);

    // 堆叠面积：从总和到单项依次覆盖
    let layers: [(&str, RGBColor, Box<dyn Fn(&crate::cycle::simulator::CycleSample) -> f64>); 3] = [
        (
            "Dendrites",
            dendrite_color,
            Box::new(|s| s.cap_loss_sei_pct + s.cap_loss_fatigue_pct + s.cap_loss_dendrite_pct),
        ),
        (
            "Fatigue",
            fatigue_color,
            Box::new(|s| s.cap_loss_sei_pct + s.cap_loss_fatigue_pct),
        ),
        ("SEI growth", sei_color, Box::new(|s| s.cap_loss_sei_pct)),
    ];

    for (label, color, accessor) in &layers {
        chart
            .draw_series(AreaSeries::new(
                outcome
                    .history
                    .iter()
                    .map(|s| (s.cycle as f64, accessor(s))),
                0.0,
                color.mix(0.8),
            ))
            .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?
            .label(*label)
            .legend({
                let color = *color;
                move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.3))
        .label_font(("sans-serif", 12))
        .draw()
        .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::simulator::{run_cycle_life, CycleParams};
    use crate::models::{baseline_architecture, gyroid_architecture};

    #[test]
    fn test_cycle_plot_writes_file() {
        let params = CycleParams {
            n_cycles: 200,
            ..CycleParams::default()
        };
        let gyroid = run_cycle_life(&gyroid_architecture(), &params);
        let baseline = run_cycle_life(&baseline_architecture(), &params);

        let dir =
            std::env::temp_dir().join(format!("ssbtool_cycleplot_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("cycle_life.svg");

        generate_cycle_life_plot(&gyroid, &baseline, &path, 1400, 600, true).unwrap();
        assert!(path.exists());

        std::fs::remove_dir_all(&dir).ok();
    }
}
