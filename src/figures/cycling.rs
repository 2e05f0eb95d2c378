//! # 循环寿命验证图
//!
//! 从验证数据 CSV 读取零压循环数据并绘制容量保持率曲线，叠加
//! 行业基准、80%/95% 阈值线与 1000 循环标注。
//!
//! ## 依赖关系
//! - 被 `commands/figures.rs` 调用
//! - 使用 `data/cycling.rs` 读取 `zero_pressure_cycling.csv`

use crate::data::cycling::{load_cycling_data, CyclingRecord};
use crate::error::Result;
use crate::figures::{plot_err, with_backend, FigureContext};

use plotters::prelude::*;
use std::path::Path;

/// 验证数据文件名
pub const CYCLING_DATA_FILE: &str = "zero_pressure_cycling.csv";

/// 行业基准数据点（高压架构的公开估计值）
const INDUSTRY_BENCHMARK: [(f64, f64); 6] = [
    (0.0, 100.0),
    (100.0, 95.0),
    (200.0, 88.0),
    (300.0, 82.0),
    (400.0, 78.0),
    (500.0, 75.0),
];

/// 渲染循环寿命验证图
pub fn render(ctx: &FigureContext, output_path: &Path) -> Result<()> {
    let records = load_cycling_data(&ctx.data_dir.join(CYCLING_DATA_FILE))?;
    with_backend!(ctx, output_path, |root| draw_chart(root, &records))
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    records: &[CyclingRecord],
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let x_max = records
        .iter()
        .map(|r| r.cycle)
        .max()
        .unwrap_or(1000)
        .max(1000) as f64;

    let mut chart = ChartBuilder::on(root)
        .caption(
            "Cycle Life Validation: Zero-Pressure Architecture (C/3, 25 C)",
            ("sans-serif", 26).into_font(),
        )
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(-20.0..x_max * 1.05, 70.0..102.0)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Cycle Number")
        .y_desc("Capacity Retention (%)")
        .x_label_style(("sans-serif", 14))
        .y_label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(plot_err)?;

    let zero_pressure_color = RGBColor(46, 125, 50);
    let benchmark_color = RGBColor(211, 47, 47);

    // 零压架构数据
    chart
        .draw_series(LineSeries::new(
            records
                .iter()
                .map(|r| (r.cycle as f64, r.retention_percent)),
            zero_pressure_color.stroke_width(2),
        ))
        .map_err(plot_err)?
        .label("Zero-pressure architecture (0 MPa)")
        .legend(|(x, y)| {
            PathElement::new(
                vec![(x, y), (x + 20, y)],
                RGBColor(46, 125, 50).stroke_width(2),
            )
        });
    chart
        .draw_series(records.iter().map(|r| {
            Circle::new(
                (r.cycle as f64, r.retention_percent),
                3,
                zero_pressure_color.filled(),
            )
        }))
        .map_err(plot_err)?;

    // 行业基准（高压架构，估计值）
    chart
        .draw_series(LineSeries::new(
            INDUSTRY_BENCHMARK.iter().copied(),
            benchmark_color.stroke_width(2),
        ))
        .map_err(plot_err)?
        .label("Industry benchmark (high-pressure, estimated)")
        .legend(|(x, y)| {
            PathElement::new(
                vec![(x, y), (x + 20, y)],
                RGBColor(211, 47, 47).stroke_width(2),
            )
        });
    chart
        .draw_series(
            INDUSTRY_BENCHMARK
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, benchmark_color.filled())),
        )
        .map_err(plot_err)?;

    // 阈值线：80% 商用阈值与 95% 设计目标
    for (level, color, label) in [
        (80.0, RGBColor(255, 152, 0), "Commercial threshold (80%)"),
        (95.0, RGBColor(76, 175, 80), "Design target (95% @ 1000 cycles)"),
    ] {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(-20.0, level), (x_max * 1.05, level)],
                color.stroke_width(1),
            )))
            .map_err(plot_err)?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(1))
            });
    }

    // 1000 循环标线与标注
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(1000.0, 70.0), (1000.0, 102.0)],
            RGBColor(21, 101, 192).stroke_width(2),
        )))
        .map_err(plot_err)?;

    let retention_at_1000 = records
        .iter()
        .min_by_key(|r| r.cycle.abs_diff(1000))
        .map(|r| r.retention_percent);
    if let Some(retention) = retention_at_1000 {
        chart
            .draw_series(std::iter::once(Text::new(
                format!("1000 cycles: {:.1}%", retention),
                (x_max * 0.72, retention - 3.0),
                ("sans-serif", 14).into_font().color(&RGBColor(21, 101, 192)),
            )))
            .map_err(plot_err)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerLeft)
        .background_style(WHITE.mix(0.9))
        .border_style(BLACK.mix(0.3))
        .label_font(("sans-serif", 13))
        .draw()
        .map_err(plot_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_render_with_data_file() {
        let dir =
            std::env::temp_dir().join(format!("ssbtool_figcyc_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let mut file = std::fs::File::create(dir.join(CYCLING_DATA_FILE)).unwrap();
        writeln!(file, "# test data").unwrap();
        writeln!(file, "cycle,capacity_mah,retention_percent").unwrap();
        for i in 0..=20 {
            let cycle = i * 50;
            writeln!(file, "{},{:.1},{:.2}", cycle, 250.0, 100.0 - 0.005 * cycle as f64).unwrap();
        }
        drop(file);

        let ctx = FigureContext {
            data_dir: dir.clone(),
            width: 1200,
            height: 800,
            use_svg: true,
        };
        let path = dir.join("cycle_life_validation.svg");
        render(&ctx, &path).unwrap();
        assert!(path.exists());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_render_missing_data_is_error() {
        let dir = std::env::temp_dir().join(format!(
            "ssbtool_figcyc_missing_{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();

        let ctx = FigureContext {
            data_dir: dir.join("nope"),
            width: 800,
            height: 600,
            use_svg: true,
        };
        assert!(render(&ctx, &dir.join("out.svg")).is_err());

        std::fs::remove_dir_all(&dir).ok();
    }
}
