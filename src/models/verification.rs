//! # 验证检查结果
//!
//! 单项验证检查的记录：期望值、计算值、容差与通过标志。
//! 每项检查生成一次，之后不再修改。
//!
//! ## 依赖关系
//! - 被 `verify/` 使用

use serde::Serialize;
use std::fmt;

/// 单项验证检查的结果
#[derive(Debug, Clone, Serialize)]
pub struct VerificationResult {
    /// 检查名称
    pub name: String,
    /// 期望值（声称值或文献值）
    pub expected_value: f64,
    /// 从第一性原理重新计算的值
    pub calculated_value: f64,
    /// 相对容差 (%)
    pub tolerance_percent: f64,
    /// 单位
    pub unit: String,
    /// 是否通过
    pub passed: bool,
    /// 备注（计算依据）
    pub notes: String,
}

impl VerificationResult {
    /// 构造一项检查结果，通过与否由调用方的判据给出
    pub fn new(
        name: impl Into<String>,
        expected: f64,
        calculated: f64,
        tolerance_percent: f64,
        unit: impl Into<String>,
        passed: bool,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            expected_value: expected,
            calculated_value: calculated,
            tolerance_percent,
            unit: unit.into(),
            passed,
            notes: notes.into(),
        }
    }

    /// 相对容差判据：|calc - expected| / |expected| < tol%
    pub fn within_tolerance(expected: f64, calculated: f64, tolerance_percent: f64) -> bool {
        if expected == 0.0 {
            return calculated == 0.0;
        }
        ((calculated - expected) / expected).abs() < tolerance_percent / 100.0
    }
}

impl fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "PASS" } else { "FAIL" };
        writeln!(f, "{}:", self.name)?;
        writeln!(f, "  Expected:   {:.4} {}", self.expected_value, self.unit)?;
        writeln!(f, "  Calculated: {:.4} {}", self.calculated_value, self.unit)?;
        writeln!(f, "  Tolerance:  ±{}%", self.tolerance_percent)?;
        writeln!(f, "  Status:     {}", status)?;
        write!(f, "  Notes:      {}", self.notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_tolerance() {
        assert!(VerificationResult::within_tolerance(100.0, 100.5, 1.0));
        assert!(!VerificationResult::within_tolerance(100.0, 102.0, 1.0));
        assert!(VerificationResult::within_tolerance(0.0, 0.0, 5.0));
        assert!(!VerificationResult::within_tolerance(0.0, 0.1, 5.0));
    }

    #[test]
    fn test_display_contains_status() {
        let r = VerificationResult::new("Check", 1.0, 1.0, 1.0, "MPa", true, "ok");
        let text = r.to_string();
        assert!(text.contains("PASS"));
        assert!(text.contains("±1%"));
    }
}
