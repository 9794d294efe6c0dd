//! 多路径 + 策略排序 + 自适应降档重试
//!
//! 第一轮：按 `(请求带宽, 难度)` 升序处理，难度 = 带宽 × 无约束最短路（按距离）跳数，
//! 不可达时为无穷大。每个 demand 做一次多路径分配，失败者进入第二轮。
//!
//! 第二轮：按第一轮的顺序，依次以 `retry_factors` 缩放请求带宽重试，
//! 第一个成功的系数生效，以降低后的带宽准入；全部失败则永久拒绝。

use super::config::AdmissionConfig;
use super::demand::{Demand, RejectReason, Rejection};
use super::executor::attempt_multi_path;
use super::strategy::{Admissions, Strategy};
use crate::net::Topology;
use crate::route::{distance_weight, shortest_path};
use tracing::debug;

/// 难度：`bandwidth * hops`；端点未知或不可达时为 `+inf`
pub fn difficulty(topo: &Topology, demand: &Demand) -> f64 {
    match shortest_path(topo, demand.source, demand.target, &distance_weight) {
        Some(path) => demand.bandwidth * path.hops() as f64,
        None => f64::INFINITY,
    }
}

/// 第一轮的处理顺序：`(bandwidth, difficulty)` 升序，稳定排序。
///
/// 难度在调用时的拓扑上计算，与剩余带宽无关。
pub fn strategic_order(topo: &Topology, demands: &[Demand]) -> Vec<Demand> {
    let mut keyed: Vec<(f64, Demand)> = demands.iter().map(|d| (difficulty(topo, d), *d)).collect();
    keyed.sort_by(|(da, a), (db, b)| {
        a.bandwidth
            .total_cmp(&b.bandwidth)
            .then_with(|| da.total_cmp(db))
    });
    keyed.into_iter().map(|(_, d)| d).collect()
}

#[derive(Debug, Clone, Default)]
pub struct MultiPathRetry {
    cfg: AdmissionConfig,
}

impl MultiPathRetry {
    pub fn new(cfg: AdmissionConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &AdmissionConfig {
        &self.cfg
    }
}

impl Strategy for MultiPathRetry {
    fn name(&self) -> &'static str {
        "multi_path"
    }

    fn admit(&self, topo: &mut Topology, demands: &[Demand]) -> Admissions {
        let order = strategic_order(topo, demands);
        let mut accepted = Vec::new();
        let mut rejected = Vec::new();
        let mut retry: Vec<Rejection> = Vec::new();

        for demand in &order {
            match attempt_multi_path(topo, demand, demand.bandwidth, &self.cfg) {
                Ok(adm) => accepted.push(adm),
                Err(rej) if rej.reason == RejectReason::UnknownEndpoint => rejected.push(rej),
                Err(rej) => retry.push(rej),
            }
        }
        debug!(
            accepted = accepted.len(),
            pending = retry.len(),
            "第一轮结束"
        );

        for first in retry {
            let demand = first.demand;
            let mut admitted = false;
            for &factor in &self.cfg.retry_factors {
                let reduced = demand.bandwidth * factor;
                if let Ok(adm) = attempt_multi_path(topo, &demand, reduced, &self.cfg) {
                    debug!(seq = demand.seq, factor, reduced, "降档重试成功");
                    accepted.push(adm);
                    admitted = true;
                    break;
                }
            }
            if !admitted {
                let reason = if self.cfg.retry_factors.is_empty() {
                    first.reason
                } else {
                    RejectReason::RetryExhausted
                };
                rejected.push(Rejection::new(demand, reason));
            }
        }

        (accepted, rejected)
    }
}
