//! # 验证报告生成
//!
//! 将全部检查结果写出为纯文本报告。
//!
//! ## 依赖关系
//! - 被 `commands/verify.rs` 调用
//! - 使用 `models/verification.rs` 的 VerificationResult

use crate::error::{Result, SsbError};
use crate::models::VerificationResult;

use chrono::Local;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 写出详细验证报告
pub fn write_verification_report(results: &[VerificationResult], path: &Path) -> Result<()> {
    let mut file = BufWriter::new(File::create(path).map_err(|e| SsbError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?);

    write_report_body(&mut file, results).map_err(|e| SsbError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

fn write_report_body(out: &mut impl Write, results: &[VerificationResult]) -> std::io::Result<()> {
    let bar = "=".repeat(80);

    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    writeln!(out, "{}", bar)?;
    writeln!(out, "SOLID-STATE BATTERY CLAIMS: VERIFICATION REPORT")?;
    writeln!(out, "{}", bar)?;
    writeln!(out, "Generated: {}", Local::now().to_rfc3339())?;
    writeln!(out, "Total Checks: {}", results.len())?;
    writeln!(out, "Passed: {}", passed)?;
    writeln!(out, "Failed: {}", failed)?;
    writeln!(out, "{}", bar)?;
    writeln!(out)?;

    for (i, result) in results.iter().enumerate() {
        writeln!(out, "[{}] {}", i + 1, result)?;
        writeln!(out)?;
    }

    writeln!(out, "{}", bar)?;
    writeln!(out, "END OF REPORT")?;
    writeln!(out, "{}", bar)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_contents() {
        let results = vec![
            VerificationResult::new("Check A", 1.0, 1.0, 1.0, "x", true, "fine"),
            VerificationResult::new("Check B", 2.0, 3.0, 1.0, "MPa", false, "off"),
        ];

        let dir =
            std::env::temp_dir().join(format!("ssbtool_report_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("report.txt");

        write_verification_report(&results, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();

        assert!(text.contains("Total Checks: 2"));
        assert!(text.contains("Passed: 1"));
        assert!(text.contains("Failed: 1"));
        assert!(text.contains("[1] Check A"));
        assert!(text.contains("[2] Check B"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
