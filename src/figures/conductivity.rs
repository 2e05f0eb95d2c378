//! # 电导率温度依赖图
//!
//! 双栏图：左栏为 σ(T) 曲线与模拟散点，右栏为 Arrhenius 图
//! （log₁₀σ 对 1000/T）及激活能标注。散点由种子化 RNG 在模型
//! 曲线上叠加 ±5% 抖动生成，结果可复现。
//!
//! ## 依赖关系
//! - 被 `commands/figures.rs` 调用
//! - 使用 `physics/conductivity.rs` 的 Arrhenius 模型
//! - 使用 `rand`（种子化 StdRng）生成散点抖动

use crate::error::Result;
use crate::figures::{plot_err, with_backend, FigureContext};
use crate::physics::conductivity::ArrheniusModel;
use crate::physics::constants::celsius_to_kelvin;

use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

/// 测温点 (℃)
const TEMPERATURES_C: [f64; 8] = [-40.0, -20.0, 0.0, 25.0, 40.0, 60.0, 80.0, 100.0];

/// 散点抖动种子
const SCATTER_SEED: u64 = 42;

/// 渲染电导率温度依赖图
pub fn render(ctx: &FigureContext, output_path: &Path) -> Result<()> {
    with_backend!(ctx, output_path, |root| draw_chart(root))
}

/// 模型曲线与叠加抖动的"模拟数据"点
fn model_and_scatter(model: &ArrheniusModel) -> Vec<(f64, f64, f64)> {
    let mut rng = StdRng::seed_from_u64(SCATTER_SEED);
    TEMPERATURES_C
        .iter()
        .map(|&t_c| {
            let sigma = model.conductivity_ms_cm(celsius_to_kelvin(t_c));
            let jitter = 1.0 + 0.05 * (rng.gen::<f64>() * 2.0 - 1.0);
            (t_c, sigma, sigma * jitter)
        })
        .collect()
}

fn draw_chart<DB: DrawingBackend>(root: &DrawingArea<DB, plotters::coord::Shift>) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let model = ArrheniusModel::default();
    let points = model_and_scatter(&model);

    let panels = root.split_evenly((1, 2));
    draw_linear_panel(&panels[0], &model, &points)?;
    draw_arrhenius_panel(&panels[1], &model, &points)?;

    Ok(())
}

/// 左栏：线性坐标的 σ(T)
fn draw_linear_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    model: &ArrheniusModel,
    points: &[(f64, f64, f64)],
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let y_max = points
        .iter()
        .map(|&(_, sigma, scatter)| sigma.max(scatter))
        .fold(0.0_f64, f64::max)
        * 1.1;

    let mut chart = ChartBuilder::on(area)
        .caption("Ionic Conductivity vs Temperature", ("sans-serif", 22).into_font())
        .margin(25)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(-50.0..110.0, 0.0..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Temperature (C)")
        .y_desc("Ionic Conductivity (mS/cm)")
        .x_label_style(("sans-serif", 14))
        .y_label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(plot_err)?;

    let color = RGBColor(25, 118, 210);

    // 模型曲线（密集网格）
    chart
        .draw_series(LineSeries::new(
            (0..=160).map(|i| {
                let t_c = -50.0 + i as f64;
                (t_c, model.conductivity_ms_cm(celsius_to_kelvin(t_c)))
            }),
            color.stroke_width(2),
        ))
        .map_err(plot_err)?
        .label("Arrhenius model")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
        });

    // 模拟数据散点
    chart
        .draw_series(
            points
                .iter()
                .map(|&(t_c, _, scatter)| Circle::new((t_c, scatter), 5, color.filled())),
        )
        .map_err(plot_err)?
        .label("Simulated data")
        .legend(move |(x, y)| Circle::new((x + 10, y), 4, color.filled()));

    // 室温工作点标记
    let rt_sigma = model.conductivity_ms_cm(celsius_to_kelvin(25.0));
    chart
        .draw_series(std::iter::once(Circle::new(
            (25.0, rt_sigma),
            7,
            RGBColor(76, 175, 80).filled(),
        )))
        .map_err(plot_err)?;
    chart
        .draw_series(std::iter::once(Text::new(
            format!("25 C: {:.2} mS/cm", rt_sigma),
            (32.0, rt_sigma),
            ("sans-serif", 14).into_font().color(&RGBColor(27, 94, 32)),
        )))
        .map_err(plot_err)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.9))
        .border_style(BLACK.mix(0.3))
        .label_font(("sans-serif", 12))
        .draw()
        .map_err(plot_err)?;

    Ok(())
}

/// 右栏：Arrhenius 图（log₁₀σ 对 1000/T）
fn draw_arrhenius_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    model: &ArrheniusModel,
    points: &[(f64, f64, f64)],
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let to_inv_t = |t_c: f64| 1000.0 / celsius_to_kelvin(t_c);

    let x_min = to_inv_t(TEMPERATURES_C[TEMPERATURES_C.len() - 1]);
    let x_max = to_inv_t(TEMPERATURES_C[0]);

    let logs: Vec<f64> = points.iter().map(|&(_, sigma, _)| sigma.log10()).collect();
    let y_min = logs.iter().copied().fold(f64::INFINITY, f64::min) - 0.3;
    let y_max = logs.iter().copied().fold(f64::NEG_INFINITY, f64::max) + 0.3;

    let mut chart = ChartBuilder::on(area)
        .caption(
            "Arrhenius Plot (Activation Energy)",
            ("sans-serif", 22).into_font(),
        )
        .margin(25)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min * 0.98..x_max * 1.02, y_min..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("1000/T (1/K)")
        .y_desc("log10(conductivity) [mS/cm]")
        .x_label_style(("sans-serif", 14))
        .y_label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(plot_err)?;

    let color = RGBColor(211, 47, 47);

    // 线性拟合（Arrhenius 模型在该坐标下严格为直线）
    chart
        .draw_series(LineSeries::new(
            points
                .iter()
                .map(|&(t_c, sigma, _)| (to_inv_t(t_c), sigma.log10())),
            color.stroke_width(2),
        ))
        .map_err(plot_err)?
        .label("Linear fit")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
        });

    chart
        .draw_series(
            points
                .iter()
                .map(|&(t_c, _, scatter)| Circle::new((to_inv_t(t_c), scatter.log10()), 5, color.filled())),
        )
        .map_err(plot_err)?
        .label("Simulated data")
        .legend(move |(x, y)| Circle::new((x + 10, y), 4, color.filled()));

    // 激活能标注
    chart
        .draw_series(std::iter::once(Text::new(
            format!(
                "Ea = {:.2} eV (slope = {:.2})",
                model.ea_ev,
                model.log10_slope_per_1000_over_t()
            ),
            (x_min * 1.05, y_min + 0.4),
            ("sans-serif", 14).into_font().color(&BLACK),
        )))
        .map_err(plot_err)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
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
    fn test_scatter_reproducible() {
        let model = ArrheniusModel::default();
        let a = model_and_scatter(&model);
        let b = model_and_scatter(&model);
        assert_eq!(a.len(), TEMPERATURES_C.len());
        for (pa, pb) in a.iter().zip(b.iter()) {
            assert!((pa.2 - pb.2).abs() < 1e-15);
            // 抖动幅度不超过 ±5%
            assert!((pa.2 / pa.1 - 1.0).abs() <= 0.05 + 1e-12);
        }
    }

    #[test]
    fn test_render_writes_file() {
        let dir =
            std::env::temp_dir().join(format!("ssbtool_figcond_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("conductivity_arrhenius.svg");

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
