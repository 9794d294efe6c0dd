//! 单源单汇最短路（Dijkstra）
//!
//! 权重函数返回 `+inf`（或任何非有限值）的链路不可通行，中间跳也不行。
//! 优先队列按 (代价, 入队序号) 排序，等代价时先入队者先出，结果与运行次数无关。

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use super::mask::SearchMask;
use super::path::WeightedPath;
use crate::net::{Link, NodeId, Topology};
use tracing::trace;

struct HeapEntry {
    cost: f64,
    seq: u64,
    node: NodeId,
}

// BinaryHeap 是 max-heap；我们需要最小代价优先，因此反向比较。
impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.cost.total_cmp(&other.cost) {
            Ordering::Equal => self.seq.cmp(&other.seq),
            ord => ord,
        }
        .reverse()
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

/// 最短路。源或汇不在拓扑中、或只能经由不可通行链路到达时返回 `None`。
pub fn shortest_path<W>(topo: &Topology, src: NodeId, dst: NodeId, weight: &W) -> Option<WeightedPath>
where
    W: Fn(&Link) -> f64,
{
    shortest_path_masked(topo, src, dst, weight, &SearchMask::new())
}

/// 带掩码的最短路：被屏蔽的链路与节点视为不存在
pub fn shortest_path_masked<W>(
    topo: &Topology,
    src: NodeId,
    dst: NodeId,
    weight: &W,
    mask: &SearchMask,
) -> Option<WeightedPath>
where
    W: Fn(&Link) -> f64,
{
    if !topo.contains(src) || !topo.contains(dst) || mask.node_banned(src) {
        return None;
    }

    let mut dist: HashMap<NodeId, f64> = HashMap::new();
    let mut prev: HashMap<NodeId, NodeId> = HashMap::new();
    let mut settled: HashMap<NodeId, f64> = HashMap::new();
    let mut heap = BinaryHeap::new();
    let mut next_seq = 0u64;

    dist.insert(src, 0.0);
    heap.push(HeapEntry {
        cost: 0.0,
        seq: next_seq,
        node: src,
    });

    while let Some(HeapEntry { cost, node, .. }) = heap.pop() {
        if settled.contains_key(&node) {
            continue;
        }
        settled.insert(node, cost);
        if node == dst {
            break;
        }

        for &lid in topo.incident(node) {
            if mask.link_banned(lid) {
                continue;
            }
            let link = topo.link(lid);
            let next = link.other(node);
            if mask.node_banned(next) || settled.contains_key(&next) {
                continue;
            }
            let w = weight(link);
            if !w.is_finite() {
                continue;
            }
            debug_assert!(w >= 0.0, "negative edge weight {w}");
            let cand = cost + w;
            let better = dist.get(&next).is_none_or(|&d| cand < d);
            if better {
                trace!(from = %node, to = %next, cost = cand, "松弛");
                dist.insert(next, cand);
                prev.insert(next, node);
                next_seq += 1;
                heap.push(HeapEntry {
                    cost: cand,
                    seq: next_seq,
                    node: next,
                });
            }
        }
    }

    let cost = *settled.get(&dst)?;
    let mut nodes = vec![dst];
    let mut cur = dst;
    while cur != src {
        cur = *prev.get(&cur)?;
        nodes.push(cur);
    }
    nodes.reverse();
    Some(WeightedPath { nodes, cost })
}
