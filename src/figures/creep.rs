//! # 锂蠕变速率曲线
//!
//! Norton 幂律蠕变的双对数图：不确定性包络带 + 几何平均中线，
//! 展示高压下锂向微裂纹渗透的失控蠕变区。
//!
//! ## 依赖关系
//! - 被 `commands/figures.rs` 调用
//! - 使用 `physics/creep.rs` 的 Norton 包络

use crate::error::Result;
use crate::figures::{plot_err, with_backend, FigureContext};
use crate::physics::creep::NortonEnvelope;

use plotters::prelude::*;
use std::path::Path;

/// 可忽略蠕变的阈值速率 (1/s)
const NEGLIGIBLE_RATE: f64 = 1e-6;

/// 渲染蠕变速率曲线
pub fn render(ctx: &FigureContext, output_path: &Path) -> Result<()> {
    with_backend!(ctx, output_path, |root| draw_chart(root))
}

/// 对数间隔的压力网格 (1-300 MPa)
fn log_pressure_grid(points: usize) -> Vec<f64> {
    (0..points)
        .map(|i| 10f64.powf(2.5 * i as f64 / (points - 1) as f64))
        .collect()
}

fn draw_chart<DB: DrawingBackend>(root: &DrawingArea<DB, plotters::coord::Shift>) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let envelope = NortonEnvelope::default();
    let pressure = log_pressure_grid(200);

    let mut chart = ChartBuilder::on(root)
        .caption(
            "Stress-Driven Lithium Infiltration (Norton Power-Law Creep)",
            ("sans-serif", 26).into_font(),
        )
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d((0.1..300.0).log_scale(), (1e-12..10.0).log_scale())
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Applied Stack Pressure (MPa)")
        .y_desc("Lithium Strain Rate (1/s)")
        .x_label_style(("sans-serif", 14))
        .y_label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(plot_err)?;

    // 不确定性包络带（上界曲线 + 反向下界曲线围成多边形）
    let band: Vec<(f64, f64)> = pressure
        .iter()
        .map(|&p| (p, envelope.rate_high(p)))
        .chain(pressure.iter().rev().map(|&p| (p, envelope.rate_low(p))))
        .collect();
    chart
        .draw_series(std::iter::once(Polygon::new(
            band,
            RGBColor(25, 118, 210).mix(0.2),
        )))
        .map_err(plot_err)?
        .label("Creep rate uncertainty band")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 5), (x + 12, y + 5)], RGBColor(25, 118, 210).mix(0.3).filled())
        });

    // 包络中线与上下界
    chart
        .draw_series(LineSeries::new(
            pressure.iter().map(|&p| (p, envelope.rate_mid(p))),
            RGBColor(25, 118, 210).stroke_width(3),
        ))
        .map_err(plot_err)?
        .label("Lithium creep rate (power-law)")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], RGBColor(25, 118, 210).stroke_width(3))
        });
    for bound in [NortonEnvelope::rate_low, NortonEnvelope::rate_high] {
        chart
            .draw_series(LineSeries::new(
                pressure.iter().map(|&p| (p, bound(&envelope, p))),
                RGBColor(25, 118, 210).mix(0.6).stroke_width(1),
            ))
            .map_err(plot_err)?;
    }

    // 微裂纹萌生阈值（~25 MPa）
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(25.0, 1e-12), (25.0, 10.0)],
            RGBColor(211, 47, 47).stroke_width(2),
        )))
        .map_err(plot_err)?
        .label("Micro-crack initiation (~25 MPa)")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], RGBColor(211, 47, 47).stroke_width(2))
        });

    // 可忽略蠕变阈值
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(0.1, NEGLIGIBLE_RATE), (300.0, NEGLIGIBLE_RATE)],
            RGBColor(56, 142, 60).stroke_width(2),
        )))
        .map_err(plot_err)?
        .label("Negligible creep threshold")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], RGBColor(56, 142, 60).stroke_width(2))
        });

    // 注释：安全区 / 失控区 / 零压设计点
    chart
        .draw_series(std::iter::once(Text::new(
            "Safe operation (negligible creep)".to_string(),
            (0.15, 1e-9),
            ("sans-serif", 14).into_font().color(&RGBColor(46, 125, 50)),
        )))
        .map_err(plot_err)?;
    chart
        .draw_series(std::iter::once(Text::new(
            "Runaway creep (infiltration mode)".to_string(),
            (35.0, 0.5),
            ("sans-serif", 14).into_font().color(&RGBColor(198, 40, 40)),
        )))
        .map_err(plot_err)?;

    chart
        .draw_series(std::iter::once(Circle::new(
            (0.5, 1e-11),
            8,
            RGBColor(76, 175, 80).filled(),
        )))
        .map_err(plot_err)?;
    chart
        .draw_series(std::iter::once(Text::new(
            "Zero-pressure design (<0.5 MPa)".to_string(),
            (0.15, 1e-10),
            ("sans-serif", 13).into_font().color(&RGBColor(27, 94, 32)),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_grid_endpoints() {
        let grid = log_pressure_grid(200);
        assert!((grid[0] - 1.0).abs() < 1e-12);
        assert!((grid[199] - 10f64.powf(2.5)).abs() < 1e-9);
    }

    #[test]
    fn test_render_writes_file() {
        let dir =
            std::env::temp_dir().join(format!("ssbtool_figcreep_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("lithium_creep_rate.svg");

        let ctx = FigureContext {
            data_dir: dir.clone(),
            width: 1200,
            height: 800,
            use_svg: true,
        };
        render(&ctx, &path).unwrap();
        assert!(path.exists());

        std::fs::remove_dir_all(&dir).ok();
    }
}
