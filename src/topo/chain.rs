//! 链状拓扑构建
//!
//! n0 - n1 - ... - nk，每段长度由调用方给出。

use crate::net::{NodeId, Topology, TopologyError};

#[derive(Debug, Clone)]
pub struct ChainTopology {
    pub topo: Topology,
    pub nodes: Vec<NodeId>,
}

/// 按给定的逐段距离（km）构建链状拓扑，节点 id 为 `0..=distances.len()`
pub fn build_chain(distances_km: &[f64]) -> Result<ChainTopology, TopologyError> {
    let mut topo = Topology::new();
    let nodes: Vec<NodeId> = (0..=distances_km.len()).map(NodeId).collect();
    for &id in &nodes {
        topo.add_node(id, format!("n{}", id.0), 0.0, 0.0)?;
    }
    for (i, &d) in distances_km.iter().enumerate() {
        topo.add_link(nodes[i], nodes[i + 1], d)?;
    }
    Ok(ChainTopology { topo, nodes })
}
