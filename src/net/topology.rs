//! 骨干网拓扑状态
//!
//! 链路保存在以 `LinkId` 为下标的 arena 中，另有节点到关联链路的邻接索引。
//! 无向链路在插入时规范化端点顺序，因此 `(u, v)` 与 `(v, u)` 查到同一条链路。
//! 运行期间只有提交（commit）会修改链路状态。

use std::collections::HashMap;

use super::capacity::CapacityTiers;
use super::error::{CommitError, TopologyError};
use super::geo::haversine_km;
use super::id::{LinkId, NodeId};
use super::link::{EPS_MBPS, Link};
use super::node::Node;
use tracing::{debug, trace};

/// 骨干网拓扑
#[derive(Debug, Clone, Default)]
pub struct Topology {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
    links: Vec<Link>,
    adj: Vec<Vec<LinkId>>,
    edges: HashMap<(NodeId, NodeId), LinkId>,
    tiers: CapacityTiers,
}

fn edge_key(u: NodeId, v: NodeId) -> (NodeId, NodeId) {
    if u <= v { (u, v) } else { (v, u) }
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tiers(&self) -> &CapacityTiers {
        &self.tiers
    }

    /// 添加节点
    pub fn add_node(
        &mut self,
        id: NodeId,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<(), TopologyError> {
        if self.index.contains_key(&id) {
            return Err(TopologyError::DuplicateNode(id));
        }
        self.index.insert(id, self.nodes.len());
        self.nodes.push(Node::new(id, name, latitude, longitude));
        self.adj.push(Vec::new());
        Ok(())
    }

    /// 连接两个节点（无向链路），容量按距离档位确定
    pub fn add_link(&mut self, u: NodeId, v: NodeId, distance_km: f64) -> Result<LinkId, TopologyError> {
        let iu = *self.index.get(&u).ok_or(TopologyError::UnknownNode(u))?;
        let iv = *self.index.get(&v).ok_or(TopologyError::UnknownNode(v))?;
        if u == v {
            return Err(TopologyError::SelfLoop(u));
        }
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(TopologyError::InvalidDistance {
                a: u,
                b: v,
                distance_km,
            });
        }
        let key = edge_key(u, v);
        if self.edges.contains_key(&key) {
            return Err(TopologyError::DuplicateLink(key.0, key.1));
        }

        let capacity = self.tiers.capacity_for(distance_km);
        let id = LinkId(self.links.len());
        self.links.push(Link::new(u, v, distance_km, capacity));
        self.edges.insert(key, id);
        self.adj[iu].push(id);
        self.adj[iv].push(id);
        trace!(link = ?id, a = %key.0, b = %key.1, distance_km, capacity, "添加链路");
        Ok(id)
    }

    /// 连接两个节点，距离由两端坐标的大圆距离给出
    pub fn add_link_by_coordinates(&mut self, u: NodeId, v: NodeId) -> Result<LinkId, TopologyError> {
        let nu = self.node(u).ok_or(TopologyError::UnknownNode(u))?;
        let nv = self.node(v).ok_or(TopologyError::UnknownNode(v))?;
        let d = haversine_km(nu.latitude(), nu.longitude(), nv.latitude(), nv.longitude());
        self.add_link(u, v, d)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.index.get(&id).map(|&i| &self.nodes[i])
    }

    /// 按插入顺序遍历节点
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|n| n.id()).collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn link(&self, id: LinkId) -> &Link {
        &self.links[id.0]
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// 与方向无关的链路查询
    pub fn link_between(&self, u: NodeId, v: NodeId) -> Option<LinkId> {
        self.edges.get(&edge_key(u, v)).copied()
    }

    /// 与方向无关的链路查询，返回链路本身
    pub fn edge(&self, u: NodeId, v: NodeId) -> Option<&Link> {
        self.link_between(u, v).map(|id| &self.links[id.0])
    }

    /// 节点的关联链路（按插入顺序）；未知节点返回空
    pub fn incident(&self, id: NodeId) -> &[LinkId] {
        match self.index.get(&id) {
            Some(&i) => self.adj[i].as_slice(),
            None => &[],
        }
    }

    pub fn total_capacity(&self) -> f64 {
        self.links.iter().map(|l| l.capacity).sum()
    }

    /// 清空所有链路的流量与占用记录：`flow = 0`，`residual = capacity`。幂等。
    pub fn reset(&mut self) {
        for link in &mut self.links {
            link.reset();
        }
        debug!(links = self.links.len(), "拓扑状态已重置");
    }

    /// 把节点序列解析为链路序列；相邻两点之间没有链路时返回错误
    pub fn path_links(&self, path: &[NodeId]) -> Result<Vec<LinkId>, CommitError> {
        path.windows(2)
            .map(|w| {
                self.link_between(w[0], w[1])
                    .ok_or(CommitError::UnknownLink(w[0], w[1]))
            })
            .collect()
    }

    /// 路径瓶颈：路径上各链路剩余带宽的最小值。单节点路径为 `+inf`。
    pub fn bottleneck(&self, path: &[NodeId]) -> Result<f64, CommitError> {
        Ok(self
            .path_links(path)?
            .into_iter()
            .map(|id| self.links[id.0].residual())
            .fold(f64::INFINITY, f64::min))
    }

    /// 在路径的每条链路上记入 `amount`，并登记 demand 序号。
    ///
    /// 不校验剩余带宽：调用方必须先保证每条链路 `residual >= amount`。
    /// 仅当路径中存在不相邻的节点对时返回错误，此时不修改任何状态。
    pub fn commit(&mut self, seq: u64, path: &[NodeId], amount: f64) -> Result<(), CommitError> {
        let ids = self.path_links(path)?;
        for id in ids {
            self.links[id.0].charge(seq, amount);
        }
        Ok(())
    }

    /// 以事务方式提交一个 demand 的全部 `(路径, 带宽)`：
    /// 先解析并累计每条链路上的暂存量，全部校验通过后才写入；否则不修改任何状态。
    pub fn commit_all<'p, I>(&mut self, seq: u64, parts: I) -> Result<(), CommitError>
    where
        I: IntoIterator<Item = (&'p [NodeId], f64)>,
    {
        let mut staged: Vec<(LinkId, f64)> = Vec::new();
        let mut totals: HashMap<LinkId, f64> = HashMap::new();
        for (path, amount) in parts {
            for id in self.path_links(path)? {
                staged.push((id, amount));
                *totals.entry(id).or_insert(0.0) += amount;
            }
        }

        let mut checked: Vec<(&LinkId, &f64)> = totals.iter().collect();
        checked.sort_by_key(|(id, _)| **id);
        for (id, needed) in checked {
            let link = &self.links[id.0];
            if link.residual() + EPS_MBPS < *needed {
                return Err(CommitError::InsufficientResidual {
                    a: link.a,
                    b: link.b,
                    residual: link.residual(),
                    needed: *needed,
                });
            }
        }

        for (id, amount) in staged {
            self.links[id.0].charge(seq, amount);
        }
        Ok(())
    }
}
