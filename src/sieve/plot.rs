//! # 脱溶剂化悬崖图表
//!
//! 使用 `plotters` 生成双栏图：左栏为各物种能垒随孔径的变化
//! （"悬崖"曲线），右栏为受限介电常数坍缩曲线。
//!
//! ## 依赖关系
//! - 被 `commands/sieve.rs` 调用
//! - 使用 `sieve/profile.rs` 的扫描结果
//! - 使用 `physics/born.rs` 的介电模型
//! - 使用 `plotters` 渲染图表

use crate::error::{Result, SsbError};
use crate::physics::born::confined_dielectric;
use crate::sieve::profile::{linspace, SieveSweep, SpeciesProfile};

use plotters::prelude::*;
use std::path::Path;

/// 能垒轴显示上限 (kJ/mol)
const BARRIER_CAP: f64 = 600.0;

/// 物种绘图颜色
fn species_color(key: &str) -> RGBColor {
    match key {
        "Li+" => RGBColor(76, 175, 80),
        "Na+" => RGBColor(33, 150, 243),
        "Li_EC4" => RGBColor(211, 47, 47),
        "Li_H2O4" => RGBColor(255, 152, 0),
        _ => RGBColor(156, 39, 176),
    }
}

/// 生成脱溶剂化悬崖图 (PNG 或 SVG)
pub fn generate_cliff_plot(
    sweep: &SieveSweep,
    output_path: &Path,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_cliff_chart(&root, sweep)?;
        root.present().map_err(|e| SsbError::PlotError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_cliff_chart(&root, sweep)?;
        root.present().map_err(|e| SsbError::PlotError(e.to_string()))?;
    }
    Ok(())
}

/// 绘制双栏图表
fn draw_cliff_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    sweep: &SieveSweep,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?;

    let panels = root.split_evenly((1, 2));
    draw_barrier_panel(&panels[0], sweep)?;
    draw_dielectric_panel(&panels[1], sweep)?;

    Ok(())
}

/// 左栏：能垒悬崖
fn draw_barrier_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    sweep: &SieveSweep,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let d_crit = sweep.model.d_critical_nm;

    let mut chart = ChartBuilder::on(area)
        .caption("The Dehydration Cliff (Born Model)", ("sans-serif", 24).into_font())
        .margin(25)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.3..2.0, -20.0..BARRIER_CAP)
        .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Pore Diameter (nm)")
        .y_desc("Dehydration Enthalpy Barrier (kJ/mol)")
        .x_label_style(("sans-serif", 14))
        .y_label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?;

    // 筛活性区底色（悬崖以下）
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(0.3, -20.0), (d_crit, BARRIER_CAP)],
            RGBColor(232, 245, 233).mix(0.4).filled(),
        )))
        .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?;

    // 临界孔径标线
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(d_crit, -20.0), (d_crit, BARRIER_CAP)],
            BLACK.stroke_width(2),
        )))
        .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?;

    chart
        .draw_series(std::iter::once(Text::new(
            format!("d_crit = {:.1} nm", d_crit),
            (d_crit + 0.02, 520.0),
            ("sans-serif", 14).into_font().color(&BLACK),
        )))
        .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?;

    // 各物种曲线（位阻区段留空，线条在 None 处断开）
    for profile in &sweep.species {
        if profile.ion.key == "dendrite_tip" {
            continue;
        }
        let color = species_color(profile.ion.key);

        for segment in finite_segments(sweep, profile) {
            chart
                .draw_series(LineSeries::new(segment, color.stroke_width(2)))
                .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?
                .label(profile.ion.name)
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
        }
    }

    // 通过/阻断注释
    chart
        .draw_series(std::iter::once(Text::new(
            "Bare ions pass (low barrier)".to_string(),
            (0.85, 60.0),
            ("sans-serif", 13).into_font().color(&RGBColor(46, 125, 50)),
        )))
        .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?;
    chart
        .draw_series(std::iter::once(Text::new(
            "Solvated complexes blocked".to_string(),
            (0.35, 420.0),
            ("sans-serif", 13).into_font().color(&RGBColor(198, 40, 40)),
        )))
        .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.3))
        .label_font(("sans-serif", 12))
        .draw()
        .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?;

    Ok(())
}

/// 右栏：受限介电坍缩
fn draw_dielectric_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    sweep: &SieveSweep,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let model = &sweep.model;
    let y_max = model.epsilon_bulk + 5.0;

    let mut chart = ChartBuilder::on(area)
        .caption(
            "Nanoconfinement Dielectric Collapse",
            ("sans-serif", 24).into_font(),
        )
        .margin(25)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.3..2.0, 0.0..y_max)
        .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Pore Diameter (nm)")
        .y_desc("Effective Dielectric Constant")
        .x_label_style(("sans-serif", 14))
        .y_label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?;

    // 介电坍缩曲线
    let grid = linspace(0.3, 2.0, 200);
    chart
        .draw_series(LineSeries::new(
            grid.iter().map(|&d| (d, confined_dielectric(d, model))),
            RGBColor(21, 101, 192).stroke_width(3),
        ))
        .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?;

    // 体相与真空极限参考线
    for (eps, label, y_text) in [
        (model.epsilon_bulk, "bulk", model.epsilon_bulk - 2.0),
        (model.epsilon_vacuum, "confined limit", model.epsilon_vacuum + 1.0),
    ] {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(0.3, eps), (2.0, eps)],
                RGBColor(128, 128, 128).stroke_width(1),
            )))
            .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?;
        chart
            .draw_series(std::iter::once(Text::new(
                format!("eps_{} = {}", label, eps),
                (1.5, y_text),
                ("sans-serif", 12).into_font().color(&RGBColor(96, 96, 96)),
            )))
            .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?;
    }

    // 临界孔径标线
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(model.d_critical_nm, 0.0), (model.d_critical_nm, y_max)],
            BLACK.stroke_width(2),
        )))
        .map_err(|e| SsbError::PlotError(format!("{:?}", e)))?;

    Ok(())
}

/// 将剖面切成连续的有限值区段（用于断线绘制），并截断到显示范围
fn finite_segments(sweep: &SieveSweep, profile: &SpeciesProfile) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();

    for (&d, value) in sweep.pore_diameters_nm.iter().zip(profile.profile.iter()) {
        match value {
            Some(v) => current.push((d, v.clamp(-100.0, BARRIER_CAP))),
            None => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::born::ConfinementModel;
    use crate::sieve::profile::compute_sieve_profiles;

    #[test]
    fn test_finite_segments_break_at_steric_gap() {
        let sweep =
            compute_sieve_profiles(linspace(0.3, 3.0, 100), ConfinementModel::default(), 0.70);

        // Li(EC)₄⁺ 的剖面在 0.72 nm 以下均为 None，只应有一个尾部区段
        let ec4 = sweep.species_by_key("Li_EC4").unwrap();
        let segments = finite_segments(&sweep, ec4);
        assert_eq!(segments.len(), 1);
        assert!(segments[0][0].0 > 0.7);

        // 裸 Li⁺ 在自身位阻截止 (0.8 × 0.764 ≈ 0.61 nm) 以上为单一区段
        let li = sweep.species_by_key("Li+").unwrap();
        let li_segments = finite_segments(&sweep, li);
        assert_eq!(li_segments.len(), 1);
        assert!(li_segments[0][0].0 > 0.60 && li_segments[0][0].0 < 0.65);
    }

    #[test]
    fn test_cliff_plot_writes_file() {
        let sweep =
            compute_sieve_profiles(linspace(0.3, 3.0, 60), ConfinementModel::default(), 0.70);

        let dir = std::env::temp_dir().join(format!("ssbtool_plot_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("cliff.svg");

        generate_cliff_plot(&sweep, &path, 1400, 600, true).unwrap();
        assert!(path.exists());

        std::fs::remove_dir_all(&dir).ok();
    }
}
