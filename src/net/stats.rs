//! 统计信息
//!
//! 从最终链路状态导出利用率快照与直方图。

use serde::Serialize;

use super::id::NodeId;
use super::topology::Topology;

/// 直方图低档上界（百分比，含）
pub const LOW_UTIL_PCT: f64 = 30.0;
/// 直方图中档上界（百分比，含），同时也是“高利用率链路”的阈值
pub const HIGH_UTIL_PCT: f64 = 70.0;

/// 单条链路的利用率
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkUtilization {
    pub a: NodeId,
    pub b: NodeId,
    pub capacity: f64,
    pub flow: f64,
    pub utilization: f64,
}

/// 利用率直方图：`0-30%`、`30-70%`、`70-100%`，上界包含在较低的档中
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UtilizationHistogram {
    pub low: usize,
    pub mid: usize,
    pub high: usize,
}

/// 某个容量档位上的链路数量
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierCount {
    pub capacity: f64,
    pub links: usize,
}

/// 利用率快照
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UtilizationSnapshot {
    pub links: Vec<LinkUtilization>,
    pub histogram: UtilizationHistogram,
    /// 平均利用率（0..=1）
    pub average_utilization: f64,
    /// 利用率 > 70% 的链路数
    pub high_utilization_links: usize,
    pub total_capacity: f64,
    pub total_flow: f64,
    pub tier_counts: Vec<TierCount>,
}

/// `flow / capacity <= pct%`，以乘法比较；恰好落在阈值上的链路归入较低的档。
fn at_most_pct(flow: f64, capacity: f64, pct: f64) -> bool {
    flow * 100.0 <= pct * capacity
}

impl UtilizationHistogram {
    pub fn record(&mut self, flow: f64, capacity: f64) {
        if at_most_pct(flow, capacity, LOW_UTIL_PCT) {
            self.low += 1;
        } else if at_most_pct(flow, capacity, HIGH_UTIL_PCT) {
            self.mid += 1;
        } else {
            self.high += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.mid + self.high
    }
}

impl UtilizationSnapshot {
    /// 读取拓扑当前状态生成快照
    pub fn capture(topo: &Topology) -> Self {
        let mut links = Vec::with_capacity(topo.link_count());
        let mut histogram = UtilizationHistogram::default();
        let mut util_sum = 0.0;
        let mut counted = 0usize;
        let mut high_utilization_links = 0usize;

        for link in topo.links() {
            links.push(LinkUtilization {
                a: link.a,
                b: link.b,
                capacity: link.capacity,
                flow: link.flow(),
                utilization: link.utilization(),
            });
            if link.capacity > 0.0 {
                util_sum += link.utilization();
                counted += 1;
                histogram.record(link.flow(), link.capacity);
                if !at_most_pct(link.flow(), link.capacity, HIGH_UTIL_PCT) {
                    high_utilization_links += 1;
                }
            }
        }

        let tier_counts = topo
            .tiers()
            .capacities()
            .into_iter()
            .map(|capacity| TierCount {
                capacity,
                links: topo.links().iter().filter(|l| l.capacity == capacity).count(),
            })
            .collect();

        Self {
            average_utilization: if counted > 0 {
                util_sum / counted as f64
            } else {
                0.0
            },
            high_utilization_links,
            total_capacity: topo.total_capacity(),
            total_flow: links.iter().map(|l| l.flow).sum(),
            links,
            histogram,
            tier_counts,
        }
    }

    /// 利用率 > 70% 的链路
    pub fn hot_links(&self) -> impl Iterator<Item = &LinkUtilization> {
        self.links
            .iter()
            .filter(|l| l.capacity > 0.0 && !at_most_pct(l.flow, l.capacity, HIGH_UTIL_PCT))
    }
}
