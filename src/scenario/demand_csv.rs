//! demand 列表 CSV
//!
//! 格式：首行为表头，之后每行 `seq,source,target,bandwidth`（按列位置读取，表头名不限）；
//! 空行以及以 `#` 开头的行被跳过，字段两侧空白被去掉，支持带引号的字段。

use csv::{ReaderBuilder, StringRecord, Trim};

use super::error::ScenarioError;
use super::spec::DemandSpec;
use crate::admit::Demand;

fn located(err: csv::Error) -> ScenarioError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    ScenarioError::Csv { line, source: err }
}

/// 解析 demand CSV，返回按行顺序排列的 demand
pub fn parse_demand_csv(raw: &str) -> Result<Vec<Demand>, ScenarioError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_reader(raw.as_bytes());

    let mut record = StringRecord::new();
    let mut demands = Vec::new();
    while reader.read_record(&mut record).map_err(located)? {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row: DemandSpec = record
            .deserialize(None)
            .map_err(|source| ScenarioError::Csv { line, source })?;
        row.validate()?;
        demands.push(Demand::from(row));
    }
    Ok(demands)
}
