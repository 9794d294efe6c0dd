//! 拓扑错误类型

use thiserror::Error;

use super::id::NodeId;

/// 构建拓扑时的错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopologyError {
    #[error("duplicate node {0}")]
    DuplicateNode(NodeId),
    #[error("link references unknown node {0}")]
    UnknownNode(NodeId),
    #[error("self-loop on node {0}")]
    SelfLoop(NodeId),
    #[error("duplicate link {0} - {1}")]
    DuplicateLink(NodeId, NodeId),
    #[error("invalid distance {distance_km} km on link {a} - {b}")]
    InvalidDistance { a: NodeId, b: NodeId, distance_km: f64 },
}

/// 提交分配时的错误。出错时拓扑状态保持不变。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommitError {
    #[error("no link between {0} and {1}")]
    UnknownLink(NodeId, NodeId),
    #[error("link {a} - {b} has residual {residual} Mbps, {needed} Mbps staged")]
    InsufficientResidual {
        a: NodeId,
        b: NodeId,
        residual: f64,
        needed: f64,
    },
}
