//! # 循环寿命数据
//!
//! 读取 `zero_pressure_cycling.csv`。文件带 `#` 注释前导与表头行，
//! 按列位置读取（第 1 列循环数、第 3 列保持率），额外列被忽略，
//! 与数据文件的既有布局兼容。
//!
//! ## 依赖关系
//! - 被 `figures/cycling.rs` 与 `verify/checks.rs` 使用

use crate::error::{Result, SsbError};

use std::path::Path;

/// 单条循环记录
#[derive(Debug, Clone, Copy)]
pub struct CyclingRecord {
    /// 循环数
    pub cycle: u32,
    /// 容量保持率 (%)
    pub retention_percent: f64,
}

/// 读取循环寿命 CSV
pub fn load_cycling_data(path: &Path) -> Result<Vec<CyclingRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| {
            if matches!(e.kind(), csv::ErrorKind::Io(_)) {
                SsbError::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                SsbError::CsvError(e)
            }
        })?;

    let mut records = Vec::new();

    for row in reader.records() {
        let row = row?;

        let cycle_field = match row.get(0) {
            Some(s) if !s.trim().is_empty() => s.trim(),
            _ => continue,
        };
        // 容错：重复的表头行
        if cycle_field == "cycle" {
            continue;
        }

        let retention_field = row.get(2).map(str::trim).unwrap_or_default();

        let cycle = cycle_field
            .parse::<u32>()
            .map_err(|_| parse_error(path, &format!("invalid cycle number '{}'", cycle_field)))?;
        let retention_percent = retention_field.parse::<f64>().map_err(|_| {
            parse_error(path, &format!("invalid retention value '{}'", retention_field))
        })?;

        records.push(CyclingRecord {
            cycle,
            retention_percent,
        });
    }

    if records.is_empty() {
        return Err(parse_error(path, "no cycling records found"));
    }

    Ok(records)
}

fn parse_error(path: &Path, reason: &str) -> SsbError {
    SsbError::ParseError {
        format: "CSV".to_string(),
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_csv(content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "ssbtool_cycling_test_{}.csv",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_cycling_csv() {
        let path = write_temp_csv(
            "# zero-pressure cycling data\n\
             # C/3, 25 C\n\
             cycle,capacity_mah,retention_percent\n\
             0,250.0,100.0\n\
             50,249.1,99.64\n\
             1000,237.5,95.0\n",
        );

        let records = load_cycling_data(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].cycle, 0);
        assert!((records[2].retention_percent - 95.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_file_is_error() {
        let missing = Path::new("definitely/not/here.csv");
        assert!(load_cycling_data(missing).is_err());
    }
}
