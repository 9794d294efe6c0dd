//! 场景输入模块
//!
//! 场景 JSON（拓扑 + demand + 可选的准入参数）以及 demand CSV 的读取。

// 子模块声明
mod demand_csv;
mod error;
mod spec;

// 重新导出公共接口
pub use demand_csv::parse_demand_csv;
pub use error::ScenarioError;
pub use spec::{
    DemandSpec, LinkSpec, NodeSpec, SCHEMA_VERSION, ScenarioMeta, ScenarioSpec, TopologySpec,
};

use std::fs;
use std::path::Path;

fn read(path: &Path) -> Result<String, ScenarioError> {
    fs::read_to_string(path).map_err(|source| ScenarioError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// 解析场景 JSON，检查 schema 版本与每个 demand 的带宽
pub fn parse_scenario(raw: &str) -> Result<ScenarioSpec, ScenarioError> {
    let spec: ScenarioSpec = serde_json::from_str(raw)?;
    if spec.schema_version != SCHEMA_VERSION {
        return Err(ScenarioError::UnsupportedSchema(spec.schema_version));
    }
    for demand in &spec.demands {
        demand.validate()?;
    }
    Ok(spec)
}

/// 从文件读取场景
pub fn load_scenario(path: &Path) -> Result<ScenarioSpec, ScenarioError> {
    parse_scenario(&read(path)?)
}

/// 从文件读取 demand CSV
pub fn load_demand_csv(path: &Path) -> Result<Vec<crate::admit::Demand>, ScenarioError> {
    parse_demand_csv(&read(path)?)
}
