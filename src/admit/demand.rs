//! 带宽需求与准入结果

use serde::{Deserialize, Serialize};

use crate::net::{NodeId, UtilizationSnapshot};

/// 带宽需求。`seq` 唯一，仅作标识；到达顺序由列表顺序决定。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Demand {
    pub seq: u64,
    pub source: NodeId,
    pub target: NodeId,
    /// 请求带宽（Mbps）
    pub bandwidth: f64,
}

impl Demand {
    pub fn new(seq: u64, source: NodeId, target: NodeId, bandwidth: f64) -> Self {
        Self {
            seq,
            source,
            target,
            bandwidth,
        }
    }
}

/// 拒绝原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// 源或汇不在拓扑中，未做任何搜索
    UnknownEndpoint,
    /// 满足容量约束的路径不存在
    NoFeasiblePath,
    /// 找到了候选路径，但合计带宽达不到成功阈值
    InsufficientMultiPathCoverage,
    /// 所有降档重试均失败
    RetryExhausted,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::UnknownEndpoint => "unknown_endpoint",
            RejectReason::NoFeasiblePath => "no_feasible_path",
            RejectReason::InsufficientMultiPathCoverage => "insufficient_multi_path_coverage",
            RejectReason::RetryExhausted => "retry_exhausted",
        }
    }
}

/// 一条路径及其上分配的带宽
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathAllocation {
    pub nodes: Vec<NodeId>,
    pub bandwidth: f64,
}

impl PathAllocation {
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// 准入记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Admission {
    pub demand: Demand,
    /// 本次准入的目标带宽；降档重试时小于 `demand.bandwidth`
    pub granted_bandwidth: f64,
    pub paths: Vec<PathAllocation>,
}

impl Admission {
    /// 实际提交到链路上的带宽之和
    pub fn allocated_bandwidth(&self) -> f64 {
        self.paths.iter().map(|p| p.bandwidth).sum()
    }

    pub fn is_multi_path(&self) -> bool {
        self.paths.len() > 1
    }

    /// 是否以降低后的带宽准入
    pub fn is_reduced(&self) -> bool {
        self.granted_bandwidth < self.demand.bandwidth
    }
}

/// 拒绝记录
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rejection {
    pub demand: Demand,
    pub reason: RejectReason,
}

impl Rejection {
    pub fn new(demand: Demand, reason: RejectReason) -> Self {
        Self { demand, reason }
    }
}

/// 一次策略运行的结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    pub strategy: String,
    pub accepted: Vec<Admission>,
    pub rejected: Vec<Rejection>,
    pub utilization: UtilizationSnapshot,
}

/// 准入指标
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AcceptanceSummary {
    pub accepted_count: usize,
    pub total_count: usize,
    pub accepted_bandwidth: f64,
    pub requested_bandwidth: f64,
    /// 使用多于一条路径的准入数
    pub multi_path_count: usize,
    /// 以降低带宽准入的数量
    pub reduced_count: usize,
    pub average_utilization: f64,
    pub high_utilization_links: usize,
    /// accepted_bandwidth / 网络总容量
    pub capacity_efficiency: f64,
}

impl AcceptanceSummary {
    pub fn acceptance_ratio(&self) -> f64 {
        if self.total_count == 0 {
            0.0
        } else {
            self.accepted_count as f64 / self.total_count as f64
        }
    }

    pub fn bandwidth_ratio(&self) -> f64 {
        if self.requested_bandwidth > 0.0 {
            self.accepted_bandwidth / self.requested_bandwidth
        } else {
            0.0
        }
    }
}

impl RunResult {
    pub fn summary(&self) -> AcceptanceSummary {
        let accepted_bandwidth: f64 = self.accepted.iter().map(|a| a.allocated_bandwidth()).sum();
        let requested_bandwidth: f64 = self
            .accepted
            .iter()
            .map(|a| a.demand.bandwidth)
            .chain(self.rejected.iter().map(|r| r.demand.bandwidth))
            .sum();
        let total_capacity = self.utilization.total_capacity;
        AcceptanceSummary {
            accepted_count: self.accepted.len(),
            total_count: self.accepted.len() + self.rejected.len(),
            accepted_bandwidth,
            requested_bandwidth,
            multi_path_count: self.accepted.iter().filter(|a| a.is_multi_path()).count(),
            reduced_count: self.accepted.iter().filter(|a| a.is_reduced()).count(),
            average_utilization: self.utilization.average_utilization,
            high_utilization_links: self.utilization.high_utilization_links,
            capacity_efficiency: if total_capacity > 0.0 {
                accepted_bandwidth / total_capacity
            } else {
                0.0
            },
        }
    }

    pub fn is_accepted(&self, seq: u64) -> bool {
        self.accepted.iter().any(|a| a.demand.seq == seq)
    }

    pub fn rejection(&self, seq: u64) -> Option<&Rejection> {
        self.rejected.iter().find(|r| r.demand.seq == seq)
    }

    pub fn admission(&self, seq: u64) -> Option<&Admission> {
        self.accepted.iter().find(|a| a.demand.seq == seq)
    }
}
