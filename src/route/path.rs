//! 带权路径

use serde::Serialize;

use crate::net::{Link, NodeId, Topology};

/// 节点序列及其在某个权重函数下的总代价
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedPath {
    pub nodes: Vec<NodeId>,
    pub cost: f64,
}

impl WeightedPath {
    /// 跳数（链路数）
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }
}

/// 计算节点序列在权重函数下的代价；存在不相邻的节点对时返回 `None`
pub fn path_cost<W>(topo: &Topology, nodes: &[NodeId], weight: &W) -> Option<f64>
where
    W: Fn(&Link) -> f64,
{
    let mut cost = 0.0;
    for w in nodes.windows(2) {
        let id = topo.link_between(w[0], w[1])?;
        cost += weight(topo.link(id));
    }
    Some(cost)
}
