//! 搜索掩码
//!
//! 在不复制拓扑的前提下“删除”链路或节点：硬过滤与 Yen 算法的偏离搜索都用它。

use std::collections::HashSet;

use crate::net::{LinkId, NodeId, Topology};

#[derive(Debug, Clone, Default)]
pub struct SearchMask {
    banned_links: HashSet<LinkId>,
    banned_nodes: HashSet<NodeId>,
}

impl SearchMask {
    pub fn new() -> Self {
        Self::default()
    }

    /// 硬过滤：屏蔽所有剩余带宽低于 `min_residual` 的链路
    pub fn hard_filter(topo: &Topology, min_residual: f64) -> Self {
        let banned_links = topo
            .links()
            .iter()
            .enumerate()
            .filter(|(_, l)| l.residual() < min_residual)
            .map(|(i, _)| LinkId(i))
            .collect();
        Self {
            banned_links,
            banned_nodes: HashSet::new(),
        }
    }

    pub fn ban_link(&mut self, id: LinkId) {
        self.banned_links.insert(id);
    }

    pub fn ban_node(&mut self, id: NodeId) {
        self.banned_nodes.insert(id);
    }

    pub fn link_banned(&self, id: LinkId) -> bool {
        self.banned_links.contains(&id)
    }

    pub fn node_banned(&self, id: NodeId) -> bool {
        self.banned_nodes.contains(&id)
    }

    pub fn banned_link_count(&self) -> usize {
        self.banned_links.len()
    }
}
