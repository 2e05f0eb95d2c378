//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `sieve`:   Born 溶剂化 / 脱溶剂化能垒分析
//! - `cycle`:   物理退化循环寿命模拟
//! - `figures`: 批量生成白皮书图表
//! - `verify`:  验证套件（退出码 0/1）
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: sieve, cycle, figures, verify

pub mod cycle;
pub mod figures;
pub mod sieve;
pub mod verify;

use clap::{Parser, Subcommand};

/// ssbtool - 固态电池物理建模统一工具箱
#[derive(Parser)]
#[command(name = "ssbtool")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "A unified solid-state battery physics modeling toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Born solvation analysis of the dehydration sieve (barrier profiles, selectivity)
    Sieve(sieve::SieveArgs),

    /// Physics-based cycle life simulation (SEI + fatigue + dendrite degradation)
    Cycle(cycle::CycleArgs),

    /// Generate white-paper figures from models and validation data
    Figures(figures::FiguresArgs),

    /// Verify white-paper claims against validation data (exit code 0/1)
    Verify(verify::VerifyArgs),
}

/// 解析 "min-max" 形式的数值范围
pub fn parse_range(range: &str) -> Result<(f64, f64), String> {
    let parts: Vec<&str> = range.split('-').collect();
    if parts.len() != 2 {
        return Err(format!("'{}' (expected form 'min-max')", range));
    }

    let min: f64 = parts[0]
        .trim()
        .parse()
        .map_err(|_| format!("'{}' (invalid minimum)", range))?;
    let max: f64 = parts[1]
        .trim()
        .parse()
        .map_err(|_| format!("'{}' (invalid maximum)", range))?;

    if min <= 0.0 || max <= min {
        return Err(format!("'{}' (must be 0 < min < max)", range));
    }

    Ok((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("0.3-3.0").unwrap(), (0.3, 3.0));
        assert_eq!(parse_range("1-300").unwrap(), (1.0, 300.0));
        assert!(parse_range("3.0-0.3").is_err());
        assert!(parse_range("abc").is_err());
        assert!(parse_range("0-1").is_err());
    }
}
