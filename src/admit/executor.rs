//! 分配执行器
//!
//! 选路之后把带宽原子地提交到拓扑。规划阶段只读；
//! 只有规划成功后才写链路状态，失败的尝试不改动任何链路。

use std::collections::HashMap;

use super::config::AdmissionConfig;
use super::demand::{Admission, Demand, PathAllocation, RejectReason, Rejection};
use crate::net::{EPS_MBPS, Link, LinkId, NodeId, Topology};
use crate::route::{SearchMask, k_shortest_paths, shortest_path, shortest_path_masked};
use tracing::{debug, trace, warn};

/// 单路径搜索时如何排除剩余带宽不足的链路
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feasibility {
    /// 搜索前屏蔽这些链路
    Hard,
    /// 搜索时对这些链路返回无穷大权重
    Soft,
}

/// 多路径分配的权重：剩余带宽 < 1 Mbps 的链路不可用，
/// 否则为 `distance * (2 - residual / capacity)`，偏向按比例更空闲的链路。
pub fn smart_weight(link: &Link) -> f64 {
    if link.residual() < 1.0 {
        f64::INFINITY
    } else {
        link.distance_km * (2.0 - link.residual() / link.capacity)
    }
}

fn endpoints_known(topo: &Topology, source: NodeId, target: NodeId) -> bool {
    topo.contains(source) && topo.contains(target)
}

/// 单路径准入：找一条每段剩余带宽都不小于 `demand.bandwidth` 的最短路并提交。
///
/// 无路可走时不修改任何状态。
#[tracing::instrument(skip(topo, weight), fields(seq = demand.seq, bw = demand.bandwidth))]
pub fn attempt_single_path<W>(
    topo: &mut Topology,
    demand: &Demand,
    weight: &W,
    feasibility: Feasibility,
) -> Result<Admission, Rejection>
where
    W: Fn(&Link) -> f64,
{
    if !endpoints_known(topo, demand.source, demand.target) {
        return Err(Rejection::new(*demand, RejectReason::UnknownEndpoint));
    }

    let bw = demand.bandwidth;
    let found = match feasibility {
        Feasibility::Hard => {
            let mask = SearchMask::hard_filter(topo, bw);
            trace!(banned = mask.banned_link_count(), "硬过滤");
            shortest_path_masked(topo, demand.source, demand.target, weight, &mask)
        }
        Feasibility::Soft => {
            let soft = |link: &Link| {
                if link.residual() < bw {
                    f64::INFINITY
                } else {
                    weight(link)
                }
            };
            shortest_path(topo, demand.source, demand.target, &soft)
        }
    };

    let Some(path) = found else {
        debug!("没有满足带宽的路径");
        return Err(Rejection::new(*demand, RejectReason::NoFeasiblePath));
    };

    // commit 只在相邻节点之间没有链路时失败；路径刚由同一拓扑上的搜索给出，必然有链路。
    if let Err(err) = topo.commit(demand.seq, &path.nodes, bw) {
        debug_assert!(false, "搜索结果包含不存在的链路: {err}");
        return Err(Rejection::new(*demand, RejectReason::NoFeasiblePath));
    }
    debug!(hops = path.hops(), cost = path.cost, "✅ 单路径准入");
    Ok(Admission {
        demand: *demand,
        granted_bandwidth: bw,
        paths: vec![PathAllocation {
            nodes: path.nodes,
            bandwidth: bw,
        }],
    })
}

/// 多路径规划（只读）：按 smart weight 升序枚举候选路径，贪心地在每条路径上
/// 分配 `min(剩余请求, 瓶颈)`，直到请求分完或选够 `max_paths` 条。
///
/// 同一次规划中先选中的路径占用的带宽会从后续候选的瓶颈中扣除，
/// 因此计划整体提交时不会超出任何链路的容量。
pub fn plan_multi_path(
    topo: &Topology,
    source: NodeId,
    target: NodeId,
    requested: f64,
    cfg: &AdmissionConfig,
) -> Result<Vec<PathAllocation>, RejectReason> {
    if !endpoints_known(topo, source, target) {
        return Err(RejectReason::UnknownEndpoint);
    }

    let mut remaining = requested;
    let mut selected: Vec<PathAllocation> = Vec::new();
    let mut staged: HashMap<LinkId, f64> = HashMap::new();
    let mut candidates = 0usize;

    for cand in k_shortest_paths(topo, source, target, smart_weight).take(cfg.candidate_limit()) {
        if remaining <= 0.0 || selected.len() >= cfg.max_paths {
            break;
        }
        candidates += 1;

        let Ok(links) = topo.path_links(&cand.nodes) else {
            continue;
        };
        let bottleneck = links
            .iter()
            .map(|id| topo.link(*id).residual() - staged.get(id).copied().unwrap_or(0.0))
            .fold(f64::INFINITY, f64::min);
        if bottleneck <= EPS_MBPS {
            trace!(hops = cand.hops(), bottleneck, "候选路径已无余量，跳过");
            continue;
        }

        let allocate = remaining.min(bottleneck);
        for id in &links {
            *staged.entry(*id).or_insert(0.0) += allocate;
        }
        remaining -= allocate;
        trace!(hops = cand.hops(), allocate, remaining, "选中候选路径");
        selected.push(PathAllocation {
            nodes: cand.nodes,
            bandwidth: allocate,
        });
    }

    if remaining <= requested * cfg.shortfall_tolerance {
        Ok(selected)
    } else if candidates == 0 {
        Err(RejectReason::NoFeasiblePath)
    } else {
        debug!(
            requested,
            allocated = requested - remaining,
            paths = selected.len(),
            "多路径覆盖不足"
        );
        Err(RejectReason::InsufficientMultiPathCoverage)
    }
}

/// 多路径准入：规划成功后把所有路径作为一个事务提交；失败时拓扑保持不变。
#[tracing::instrument(skip(topo, cfg), fields(seq = demand.seq))]
pub fn attempt_multi_path(
    topo: &mut Topology,
    demand: &Demand,
    requested: f64,
    cfg: &AdmissionConfig,
) -> Result<Admission, Rejection> {
    let paths = plan_multi_path(topo, demand.source, demand.target, requested, cfg)
        .map_err(|reason| Rejection::new(*demand, reason))?;

    let parts = paths.iter().map(|p| (p.nodes.as_slice(), p.bandwidth));
    if let Err(err) = topo.commit_all(demand.seq, parts) {
        warn!(%err, "多路径提交不一致，已放弃");
        return Err(Rejection::new(
            *demand,
            RejectReason::InsufficientMultiPathCoverage,
        ));
    }
    debug!(paths = paths.len(), "✅ 多路径准入");
    Ok(Admission {
        demand: *demand,
        granted_bandwidth: requested,
        paths,
    })
}
