use serde::Serialize;

use crate::admit::{AcceptanceSummary, PathAllocation, RejectReason, RunResult};
use crate::net::{LinkUtilization, NodeId, UtilizationHistogram};

/// 准入 demand 的精简记录
#[derive(Debug, Clone, Serialize)]
pub struct AcceptedRecord {
    pub seq: u64,
    pub source: NodeId,
    pub target: NodeId,
    pub requested_bandwidth: f64,
    pub allocated_bandwidth: f64,
    pub paths: Vec<PathAllocation>,
}

/// 被拒 demand 的精简记录
#[derive(Debug, Clone, Serialize)]
pub struct RejectedRecord {
    pub seq: u64,
    pub source: NodeId,
    pub target: NodeId,
    pub requested_bandwidth: f64,
    pub reason: RejectReason,
}

/// 一次策略运行的报告（JSON）
#[derive(Debug, Clone, Serialize)]
pub struct StrategyReport {
    pub strategy: String,
    pub summary: AcceptanceSummary,
    pub accepted: Vec<AcceptedRecord>,
    pub rejected: Vec<RejectedRecord>,
    pub histogram: UtilizationHistogram,
    pub links: Vec<LinkUtilization>,
}

impl StrategyReport {
    pub fn from_result(result: &RunResult) -> Self {
        Self {
            strategy: result.strategy.clone(),
            summary: result.summary(),
            accepted: result
                .accepted
                .iter()
                .map(|a| AcceptedRecord {
                    seq: a.demand.seq,
                    source: a.demand.source,
                    target: a.demand.target,
                    requested_bandwidth: a.demand.bandwidth,
                    allocated_bandwidth: a.allocated_bandwidth(),
                    paths: a.paths.clone(),
                })
                .collect(),
            rejected: result
                .rejected
                .iter()
                .map(|r| RejectedRecord {
                    seq: r.demand.seq,
                    source: r.demand.source,
                    target: r.demand.target,
                    requested_bandwidth: r.demand.bandwidth,
                    reason: r.reason,
                })
                .collect(),
            histogram: result.utilization.histogram,
            links: result.utilization.links.clone(),
        }
    }

    /// 单行摘要，供命令行输出
    pub fn summary_line(&self) -> String {
        let s = &self.summary;
        format!(
            "strategy={} accepted={}/{} ({:.1}%) bandwidth={:.1}/{:.1} Mbps ({:.1}%) avg_util={:.1}% links_over_70={} multi_path={} reduced={} hist=[{},{},{}]",
            self.strategy,
            s.accepted_count,
            s.total_count,
            s.acceptance_ratio() * 100.0,
            s.accepted_bandwidth,
            s.requested_bandwidth,
            s.bandwidth_ratio() * 100.0,
            s.average_utilization * 100.0,
            s.high_utilization_links,
            s.multi_path_count,
            s.reduced_count,
            self.histogram.low,
            self.histogram.mid,
            self.histogram.high,
        )
    }
}
