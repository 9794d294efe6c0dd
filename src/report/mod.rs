//! 运行报告
//!
//! 把 `RunResult` 转成便于序列化的扁平记录，由命令行写成 JSON 数组。

mod types;

pub use types::{AcceptedRecord, RejectedRecord, StrategyReport};

use std::fs;
use std::io;
use std::path::Path;

/// 把多份报告写成一个 JSON 数组
pub fn write_reports_json(path: &Path, reports: &[StrategyReport]) -> io::Result<()> {
    let raw = serde_json::to_string_pretty(reports).map_err(io::Error::other)?;
    fs::write(path, raw)
}
