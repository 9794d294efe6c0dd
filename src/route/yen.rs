//! k 条最短无环路径（Yen 算法）
//!
//! `KShortestPaths` 是惰性迭代器：每次 `next()` 只在需要时做一轮偏离搜索，
//! 按代价升序产出无环路径；图有限时序列有限。迭代器借用拓扑，
//! 只能重新创建、不能跨调用续接。

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use super::dijkstra::shortest_path_masked;
use super::mask::SearchMask;
use super::path::{WeightedPath, path_cost};
use crate::net::{Link, NodeId, Topology};
use tracing::trace;

struct Candidate {
    path: WeightedPath,
    seq: u64,
}

// 与 Dijkstra 相同：代价小者优先，等代价时先生成者优先。
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.path.cost.total_cmp(&other.path.cost) {
            Ordering::Equal => self.seq.cmp(&other.seq),
            ord => ord,
        }
        .reverse()
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// 按代价升序惰性枚举 `src -> dst` 的无环路径
pub struct KShortestPaths<'a, W> {
    topo: &'a Topology,
    src: NodeId,
    dst: NodeId,
    weight: W,
    found: Vec<WeightedPath>,
    candidates: BinaryHeap<Candidate>,
    seen: HashSet<Vec<NodeId>>,
    next_seq: u64,
    exhausted: bool,
}

/// 创建 k 最短路迭代器。用 `.take(k)` 限制数量。
pub fn k_shortest_paths<W>(topo: &Topology, src: NodeId, dst: NodeId, weight: W) -> KShortestPaths<'_, W>
where
    W: Fn(&Link) -> f64,
{
    KShortestPaths {
        topo,
        src,
        dst,
        weight,
        found: Vec::new(),
        candidates: BinaryHeap::new(),
        seen: HashSet::new(),
        next_seq: 0,
        exhausted: false,
    }
}

impl<W> KShortestPaths<'_, W>
where
    W: Fn(&Link) -> f64,
{
    /// 以最近产出的路径为基准，对每个偏离点做一次受限最短路，新路径入候选堆
    fn spur_from_last(&mut self) {
        let Some(last) = self.found.last() else {
            return;
        };
        let last = last.nodes.clone();

        for i in 0..last.len().saturating_sub(1) {
            let spur = last[i];
            let root = &last[..=i];

            let mut mask = SearchMask::new();
            for p in &self.found {
                if p.nodes.len() > i + 1 && p.nodes[..=i] == *root {
                    if let Some(id) = self.topo.link_between(p.nodes[i], p.nodes[i + 1]) {
                        mask.ban_link(id);
                    }
                }
            }
            for &n in &root[..i] {
                mask.ban_node(n);
            }

            let Some(spur_path) = shortest_path_masked(self.topo, spur, self.dst, &self.weight, &mask) else {
                continue;
            };
            let Some(root_cost) = path_cost(self.topo, root, &self.weight) else {
                continue;
            };

            let mut nodes = root[..i].to_vec();
            nodes.extend(spur_path.nodes);
            if !self.seen.insert(nodes.clone()) {
                continue;
            }
            trace!(spur = %spur, hops = nodes.len() - 1, "新候选路径");
            self.next_seq += 1;
            self.candidates.push(Candidate {
                path: WeightedPath {
                    nodes,
                    cost: root_cost + spur_path.cost,
                },
                seq: self.next_seq,
            });
        }
    }
}

impl<W> Iterator for KShortestPaths<'_, W>
where
    W: Fn(&Link) -> f64,
{
    type Item = WeightedPath;

    fn next(&mut self) -> Option<WeightedPath> {
        if self.exhausted {
            return None;
        }

        if self.found.is_empty() {
            let Some(first) = shortest_path_masked(self.topo, self.src, self.dst, &self.weight, &SearchMask::new())
            else {
                self.exhausted = true;
                return None;
            };
            self.seen.insert(first.nodes.clone());
            self.found.push(first.clone());
            return Some(first);
        }

        self.spur_from_last();
        match self.candidates.pop() {
            Some(Candidate { path, .. }) => {
                self.found.push(path.clone());
                Some(path)
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }
}
