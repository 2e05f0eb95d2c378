//! # 压力-失效概率曲线
//!
//! "压力悖论"图：Weibull 统计给出的 LLZO 微裂纹萌生概率随外加
//! 堆叠压力的变化，叠加安全区/行业工作区底色与临界阈值标注。
//!
//! ## 依赖关系
//! - 被 `commands/figures.rs` 调用
//! - 使用 `physics/fracture.rs` 的 Weibull 模型

use crate::error::Result;
use crate::figures::{plot_err, with_backend, FigureContext};
use crate::physics::constants::{LLZO_FRACTURE_TOUGHNESS, STRESS_CONCENTRATION_FACTOR};
use crate::physics::fracture::{critical_pressure_mpa, weibull_failure_probability, WeibullParams};
use crate::sieve::profile::linspace;

use plotters::prelude::*;
use std::path::Path;

/// 渲染压力-失效概率曲线
pub fn render(ctx: &FigureContext, output_path: &Path) -> Result<()> {
    with_backend!(ctx, output_path, |root| draw_chart(root))
}

fn draw_chart<DB: DrawingBackend>(root: &DrawingArea<DB, plotters::coord::Shift>) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let params = WeibullParams::default();
    let pressure = linspace(0.0, 100.0, 1000);
    let p_critical =
        critical_pressure_mpa(LLZO_FRACTURE_TOUGHNESS, STRESS_CONCENTRATION_FACTOR, 10e-6);

    let mut chart = ChartBuilder::on(root)
        .caption(
            "The Pressure Paradox: Failure Probability vs Stack Pressure",
            ("sans-serif", 26).into_font(),
        )
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..100.0, 0.0..105.0)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Applied Clamping Pressure (MPa)")
        .y_desc("Probability of Micro-Crack Formation (%)")
        .x_label_style(("sans-serif", 14))
        .y_label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(plot_err)?;

    // 工作区底色：零压设计安全区与行业高压区
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(0.0, 0.0), (5.0, 105.0)],
            RGBColor(76, 175, 80).mix(0.15).filled(),
        )))
        .map_err(plot_err)?
        .label("Zero-pressure safe zone (<5 MPa)")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 5), (x + 12, y + 5)], RGBColor(76, 175, 80).mix(0.3).filled())
        });

    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(10.0, 0.0), (100.0, 105.0)],
            RGBColor(255, 87, 34).mix(0.10).filled(),
        )))
        .map_err(plot_err)?
        .label("Industry operating range (10-100 MPa)")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 5), (x + 12, y + 5)], RGBColor(255, 87, 34).mix(0.3).filled())
        });

    // 失效概率主曲线
    chart
        .draw_series(LineSeries::new(
            pressure
                .iter()
                .map(|&p| (p, weibull_failure_probability(p, &params) * 100.0)),
            RGBColor(211, 47, 47).stroke_width(3),
        ))
        .map_err(plot_err)?
        .label("Micro-crack initiation probability")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], RGBColor(211, 47, 47).stroke_width(3))
        });

    // 临界断裂阈值（由断裂力学导出）
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(p_critical, 0.0), (p_critical, 105.0)],
            RGBColor(21, 101, 192).stroke_width(2),
        )))
        .map_err(plot_err)?;
    chart
        .draw_series(std::iter::once(Text::new(
            format!("Critical fracture threshold (~{:.0} MPa)", p_critical),
            (p_critical + 2.0, 45.0),
            ("sans-serif", 14).into_font().color(&RGBColor(21, 101, 192)),
        )))
        .map_err(plot_err)?;

    // 方程注释
    chart
        .draw_series(std::iter::once(Text::new(
            format!(
                "P = 1 - exp(-((s - {:.0})/{:.0})^{:.1})",
                params.threshold_mpa, params.scale_mpa, params.modulus
            ),
            (60.0, 20.0),
            ("sans-serif", 14).into_font().color(&BLACK),
        )))
        .map_err(plot_err)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.9))
        .border_style(BLACK.mix(0.3))
        .label_font(("sans-serif", 13))
        .draw()
        .map_err(plot_err)?;

    Ok(())
}
