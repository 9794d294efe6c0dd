use std::path::PathBuf;

use thiserror::Error;

use crate::net::TopologyError;

/// 读取场景或 demand 文件时的错误
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scenario json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("demand csv line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("demand {seq}: invalid bandwidth {bandwidth}")]
    InvalidDemand { seq: u64, bandwidth: f64 },
    #[error("unsupported schema_version {0}")]
    UnsupportedSchema(u32),
    #[error(transparent)]
    Topology(#[from] TopologyError),
}
