//! # 白皮书图表模块
//!
//! 六幅出版级图表的渲染逻辑，每幅一个子模块：
//! - `fracture`     - Weibull 压力-失效概率曲线
//! - `creep`        - Norton 锂蠕变速率（双对数）
//! - `cycling`      - 循环寿命验证（读取验证数据 CSV）
//! - `conductivity` - Arrhenius 电导率双栏图
//! - `dendrite`     - 枝晶抑制对比柱状图（读取验证数据 JSON）
//! - `landscape`    - 行业投资与压力-寿命散点
//!
//! ## 依赖关系
//! - 被 `commands/figures.rs` 经 `batch/` 并行调用
//! - 使用 `physics/` 的公式与 `data/` 的读取器
//! - 使用 `plotters` 渲染图表

pub mod conductivity;
pub mod creep;
pub mod cycling;
pub mod dendrite;
pub mod fracture;
pub mod landscape;

use crate::error::SsbError;

use std::path::PathBuf;

/// 图表渲染的共享上下文
#[derive(Debug, Clone)]
pub struct FigureContext {
    /// 验证数据目录
    pub data_dir: PathBuf,
    /// 图像宽度（像素/点）
    pub width: u32,
    /// 图像高度（像素/点）
    pub height: u32,
    /// 是否输出 SVG
    pub use_svg: bool,
}

/// plotters 后端错误 → 统一错误类型
pub(crate) fn plot_err<E: std::fmt::Debug>(e: E) -> SsbError {
    SsbError::PlotError(format!("{:?}", e))
}

/// 以 PNG 或 SVG 后端执行绘制闭包
macro_rules! with_backend {
    ($ctx:expr, $path:expr, $draw:expr) => {{
        if $ctx.use_svg {
            let root = plotters::prelude::SVGBackend::new($path, ($ctx.width, $ctx.height))
                .into_drawing_area();
            $draw(&root)?;
            root.present().map_err($crate::figures::plot_err)?;
        } else {
            let root = plotters::prelude::BitMapBackend::new($path, ($ctx.width, $ctx.height))
                .into_drawing_area();
            $draw(&root)?;
            root.present().map_err($crate::figures::plot_err)?;
        }
        Ok(())
    }};
}

pub(crate) use with_backend;
