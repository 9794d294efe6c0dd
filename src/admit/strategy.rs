//! 准入策略接口
//!
//! 每个策略只实现 `admit`；`run` 统一负责运行前重置拓扑与运行后采集统计。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::config::AdmissionConfig;
use super::demand::{Admission, Demand, Rejection, RunResult};
use super::dynamic::DynamicWeight;
use super::fcfs::Fcfs;
use super::multipath::MultiPathRetry;
use crate::net::{Topology, UtilizationSnapshot};
use tracing::info;

/// 一次准入运行的原始输出（准入列表，拒绝列表）
pub type Admissions = (Vec<Admission>, Vec<Rejection>);

/// 准入策略
pub trait Strategy {
    /// 策略名称
    fn name(&self) -> &'static str;

    /// 在已重置的拓扑上按策略顺序处理全部 demand
    fn admit(&self, topo: &mut Topology, demands: &[Demand]) -> Admissions;

    /// 重置拓扑，运行策略，并采集利用率快照
    fn run(&self, topo: &mut Topology, demands: &[Demand]) -> RunResult {
        topo.reset();
        let (accepted, rejected) = self.admit(topo, demands);
        let result = RunResult {
            strategy: self.name().to_string(),
            accepted,
            rejected,
            utilization: UtilizationSnapshot::capture(topo),
        };
        let summary = result.summary();
        info!(
            strategy = self.name(),
            accepted = summary.accepted_count,
            total = summary.total_count,
            accepted_bw = summary.accepted_bandwidth,
            avg_util = summary.average_utilization,
            "🏁 策略运行完成"
        );
        result
    }
}

/// 可选的策略种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Fcfs,
    DynamicWeight,
    MultiPath,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Fcfs,
        StrategyKind::DynamicWeight,
        StrategyKind::MultiPath,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Fcfs => "fcfs",
            StrategyKind::DynamicWeight => "dynamic_weight",
            StrategyKind::MultiPath => "multi_path",
        }
    }

    /// 构建策略实例；只有多路径策略使用 `cfg`
    pub fn build(self, cfg: &AdmissionConfig) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Fcfs => Box::new(Fcfs),
            StrategyKind::DynamicWeight => Box::new(DynamicWeight),
            StrategyKind::MultiPath => Box::new(MultiPathRetry::new(cfg.clone())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "fcfs" => Ok(StrategyKind::Fcfs),
            "dynamic" | "dynamic_weight" => Ok(StrategyKind::DynamicWeight),
            "multipath" | "multi_path" => Ok(StrategyKind::MultiPath),
            _ => Err(format!("unknown strategy: {raw}")),
        }
    }
}
