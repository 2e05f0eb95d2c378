//! # 行业格局图
//!
//! 双栏图：左栏为各公司固态电池投资额横向柱状图，右栏为工作压力
//! 对循环寿命的散点（气泡大小按投资额缩放），叠加临界压力阈值线
//! 与零压设计点。公开报道的估计值，作图内常量。
//!
//! ## 依赖关系
//! - 被 `commands/figures.rs` 调用
//! - 使用 `plotters` 渲染图表

use crate::error::Result;
use crate::figures::{plot_err, with_backend, FigureContext};

use plotters::prelude::*;
use std::path::Path;

/// 行业数据点：公司、投资额 ($B)、估计工作压力 (MPa)、估计循环寿命
const INDUSTRY: [(&str, f64, f64, f64); 6] = [
    ("QuantumScape", 4.2, 20.0, 300.0),
    ("Toyota", 15.0, 100.0, 200.0),
    ("CATL", 10.0, 50.0, 250.0),
    ("Samsung SDI", 3.0, 30.0, 400.0),
    ("Solid Power", 0.64, 40.0, 200.0),
    ("Apple", 2.0, 10.0, 500.0),
];

/// 公司柱色（左栏与右栏共用）
const COMPANY_COLORS: [RGBColor; 6] = [
    RGBColor(211, 47, 47),
    RGBColor(255, 87, 34),
    RGBColor(255, 152, 0),
    RGBColor(255, 193, 7),
    RGBColor(255, 235, 59),
    RGBColor(139, 195, 74),
];

/// 渲染行业格局图
pub fn render(ctx: &FigureContext, output_path: &Path) -> Result<()> {
    with_backend!(ctx, output_path, |root| draw_chart(root))
}

fn draw_chart<DB: DrawingBackend>(root: &DrawingArea<DB, plotters::coord::Shift>) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let panels = root.split_evenly((1, 2));
    draw_investment_panel(&panels[0])?;
    draw_tradeoff_panel(&panels[1])?;

    Ok(())
}

/// 左栏：投资额横向柱状图
fn draw_investment_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let total: f64 = INDUSTRY.iter().map(|&(_, inv, _, _)| inv).sum();

    let mut chart = ChartBuilder::on(area)
        .caption(
            "Solid-State Battery Investment by Company",
            ("sans-serif", 22).into_font(),
        )
        .margin(25)
        .x_label_area_size(50)
        .y_label_area_size(100)
        .build_cartesian_2d(0.0..18.0, 0.0..INDUSTRY.len() as f64)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(INDUSTRY.len() + 1)
        .y_label_formatter(&|y: &f64| {
            INDUSTRY
                .get(y.round() as usize)
                .map(|&(name, _, _, _)| name.to_string())
                .unwrap_or_default()
        })
        .x_desc("Investment ($B)")
        .x_label_style(("sans-serif", 14))
        .y_label_style(("sans-serif", 13))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(plot_err)?;

    for (i, &(_, investment, _, _)) in INDUSTRY.iter().enumerate() {
        let y0 = i as f64;
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(0.0, y0 + 0.15), (investment, y0 + 0.85)],
                COMPANY_COLORS[i].filled(),
            )))
            .map_err(plot_err)?;
        chart
            .draw_series(std::iter::once(Text::new(
                format!("${:.1}B", investment),
                (investment + 0.3, y0 + 0.4),
                ("sans-serif", 13).into_font().color(&BLACK),
            )))
            .map_err(plot_err)?;
    }

    chart
        .draw_series(std::iter::once(Text::new(
            format!("Total: >${:.0}B, commercial products: zero", total),
            (6.0, 0.25),
            ("sans-serif", 14).into_font().color(&RGBColor(198, 40, 40)),
        )))
        .map_err(plot_err)?;

    Ok(())
}

/// 右栏：压力-寿命散点（气泡大小 ~ 投资额）
fn draw_tradeoff_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let mut chart = ChartBuilder::on(area)
        .caption(
            "Pressure-Performance Trade-off (bubble = investment)",
            ("sans-serif", 22).into_font(),
        )
        .margin(25)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(-5.0..120.0, 0.0..1200.0)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Operating Pressure (MPa)")
        .y_desc("Cycle Life (cycles)")
        .x_label_style(("sans-serif", 14))
        .y_label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(plot_err)?;

    // 临界压力阈值
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(25.0, 0.0), (25.0, 1200.0)],
            RGBColor(211, 47, 47).stroke_width(2),
        )))
        .map_err(plot_err)?
        .label("Critical threshold (~25 MPa)")
        .legend(|(x, y)| {
            PathElement::new(
                vec![(x, y), (x + 20, y)],
                RGBColor(211, 47, 47).stroke_width(2),
            )
        });

    // 行业数据气泡与公司名
    for (i, &(name, investment, pressure, cycles)) in INDUSTRY.iter().enumerate() {
        let radius = (3.0 + investment * 1.2) as i32;
        chart
            .draw_series(std::iter::once(Circle::new(
                (pressure, cycles),
                radius,
                COMPANY_COLORS[i].mix(0.8).filled(),
            )))
            .map_err(plot_err)?;
        chart
            .draw_series(std::iter::once(Text::new(
                name.to_string(),
                (pressure + 3.0, cycles + 25.0),
                ("sans-serif", 12).into_font().color(&BLACK),
            )))
            .map_err(plot_err)?;
    }

    // 零压设计点
    chart
        .draw_series(std::iter::once(TriangleMarker::new(
            (0.5, 1000.0),
            10,
            RGBColor(76, 175, 80).filled(),
        )))
        .map_err(plot_err)?
        .label("Zero-pressure design (<0.5 MPa, >1000 cycles)")
        .legend(|(x, y)| TriangleMarker::new((x + 10, y), 7, RGBColor(76, 175, 80).filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.9))
        .border_style(BLACK.mix(0.3))
        .label_font(("sans-serif", 12))
        .draw()
        .map_err(plot_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_writes_file() {
        let dir =
            std::env::temp_dir().join(format!("ssbtool_figland_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("investment_landscape.svg");

        let ctx = FigureContext {
            data_dir: dir.clone(),
            width: 1400,
            height: 600,
            use_svg: true,
        };
        render(&ctx, &path).unwrap();
        assert!(path.exists());

        std::fs::remove_dir_all(&dir).ok();
    }
}
