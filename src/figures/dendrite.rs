//! # 枝晶抑制对比图
//!
//! 从验证数据 JSON 读取相场模拟结果，绘制基线与点阵架构的
//! 分组柱状对比（挠度 / 峰值应力 / 穿透深度），并标注改善因子。
//!
//! ## 依赖关系
//! - 被 `commands/figures.rs` 调用
//! - 使用 `data/dendrite.rs` 读取 `dendrite_suppression_results.json`

use crate::data::dendrite::{load_dendrite_data, DendriteData};
use crate::error::Result;
use crate::figures::{plot_err, with_backend, FigureContext};

use plotters::prelude::*;
use std::path::Path;

/// 验证数据文件名
pub const DENDRITE_DATA_FILE: &str = "dendrite_suppression_results.json";

/// 峰值应力的显示缩放因子（与其余指标同轴显示）
const STRESS_DISPLAY_SCALE: f64 = 10.0;

/// 指标名称（按柱组顺序）
const METRIC_LABELS: [&str; 3] = [
    "Max Deflection (nm)",
    "Peak Stress (MPa / 10)",
    "Penetration (%)",
];

/// 渲染枝晶抑制对比图
pub fn render(ctx: &FigureContext, output_path: &Path) -> Result<()> {
    let data = load_dendrite_data(&ctx.data_dir.join(DENDRITE_DATA_FILE))?;
    with_backend!(ctx, output_path, |root| draw_chart(root, &data))
}

/// 按指标顺序取出两组数值（应力已缩放）
fn metric_values(data: &DendriteData) -> ([f64; 3], [f64; 3]) {
    let b = &data.baseline_case.results;
    let g = &data.genesis_case.results;
    (
        [
            b.max_deflection_nm,
            b.peak_stress_mpa / STRESS_DISPLAY_SCALE,
            b.dendrite_penetration_percent,
        ],
        [
            g.max_deflection_nm,
            g.peak_stress_mpa / STRESS_DISPLAY_SCALE,
            g.dendrite_penetration_percent,
        ],
    )
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    data: &DendriteData,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let (baseline_values, lattice_values) = metric_values(data);
    let y_max = baseline_values
        .iter()
        .chain(lattice_values.iter())
        .fold(0.0_f64, |acc, &v| acc.max(v))
        * 1.35;

    let mut chart = ChartBuilder::on(root)
        .caption(
            "Dendrite Suppression: Baseline vs Lattice Architecture",
            ("sans-serif", 26).into_font(),
        )
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..3.0, 0.0..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(4)
        .x_label_formatter(&|x: &f64| {
            // 整数刻度落在柱组左缘，标注右侧柱组的指标名
            METRIC_LABELS
                .get(x.round() as usize)
                .map(|s| s.to_string())
                .unwrap_or_default()
        })
        .y_desc("Value (see metric labels)")
        .x_label_style(("sans-serif", 13))
        .y_label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(plot_err)?;

    let baseline_color = RGBColor(211, 47, 47);
    let lattice_color = RGBColor(76, 175, 80);

    // 分组柱：每组 [基线, 点阵]
    for (i, (&b, &g)) in baseline_values.iter().zip(lattice_values.iter()).enumerate() {
        let x0 = i as f64;
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(x0 + 0.10, 0.0), (x0 + 0.45, b)],
                baseline_color.filled(),
            )))
            .map_err(plot_err)?;
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(x0 + 0.55, 0.0), (x0 + 0.90, g)],
                lattice_color.filled(),
            )))
            .map_err(plot_err)?;

        // 柱顶数值标签
        for (x_center, value, color) in [
            (x0 + 0.275, b, baseline_color),
            (x0 + 0.725, g, RGBColor(27, 94, 32)),
        ] {
            chart
                .draw_series(std::iter::once(Text::new(
                    format!("{:.1}", value),
                    (x_center - 0.08, value + y_max * 0.02),
                    ("sans-serif", 13).into_font().color(&color),
                )))
                .map_err(plot_err)?;
        }

        // 改善因子标注
        if g > 0.0 {
            chart
                .draw_series(std::iter::once(Text::new(
                    format!("{:.1}x lower", b / g),
                    (x0 + 0.30, b.max(g) + y_max * 0.10),
                    ("sans-serif", 15).into_font().color(&RGBColor(21, 101, 192)),
                )))
                .map_err(plot_err)?;
        }
    }

    // 图例（手工系列标签）
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(0.0, 0.0), (0.0, 0.0)],
            baseline_color.filled(),
        )))
        .map_err(plot_err)?
        .label("Baseline (uniform LLZO)")
        .legend(move |(x, y)| {
            Rectangle::new([(x, y - 5), (x + 12, y + 5)], baseline_color.filled())
        });
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(0.0, 0.0), (0.0, 0.0)],
            lattice_color.filled(),
        )))
        .map_err(plot_err)?
        .label("Lattice architecture")
        .legend(move |(x, y)| {
            Rectangle::new([(x, y - 5), (x + 12, y + 5)], lattice_color.filled())
        });

    // 关键结果注释
    chart
        .draw_series(std::iter::once(Text::new(
            format!(
                "Suppression factor: {:.1}x (penetration {}% vs {}%)",
                data.improvement_metrics.dendrite_suppression_factor,
                data.genesis_case.results.dendrite_penetration_percent,
                data.baseline_case.results.dendrite_penetration_percent,
            ),
            (1.1, y_max * 0.93),
            ("sans-serif", 14).into_font().color(&BLACK),
        )))
        .map_err(plot_err)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
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

    const SAMPLE_JSON: &str = r#"{
        "baseline_case": {
            "results": {
                "max_deflection_nm": 115.6,
                "peak_stress_mpa": 1576.9,
                "dendrite_penetration_percent": 100.0
            }
        },
        "genesis_case": {
            "results": {
                "max_deflection_nm": 9.1,
                "peak_stress_mpa": 780.1,
                "dendrite_penetration_percent": 15.0
            }
        },
        "improvement_metrics": { "dendrite_suppression_factor": 12.7 }
    }"#;

    #[test]
    fn test_metric_values_scaling() {
        let data: DendriteData = serde_json::from_str(SAMPLE_JSON).unwrap();
        let (baseline, lattice) = metric_values(&data);
        assert!((baseline[1] - 157.69).abs() < 1e-9);
        assert!((lattice[1] - 78.01).abs() < 1e-9);
        assert!((baseline[0] / lattice[0] - 12.7).abs() < 0.1);
    }

    #[test]
    fn test_render_with_data_file() {
        let dir =
            std::env::temp_dir().join(format!("ssbtool_figden_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let mut file = std::fs::File::create(dir.join(DENDRITE_DATA_FILE)).unwrap();
        file.write_all(SAMPLE_JSON.as_bytes()).unwrap();
        drop(file);

        let ctx = FigureContext {
            data_dir: dir.clone(),
            width: 1200,
            height: 800,
            use_svg: true,
        };
        let path = dir.join("dendrite_suppression_comparison.svg");
        render(&ctx, &path).unwrap();
        assert!(path.exists());

        std::fs::remove_dir_all(&dir).ok();
    }
}
