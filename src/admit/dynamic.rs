//! 动态权重单路径策略
//!
//! 先按请求带宽升序排序（相同带宽保持到达顺序），再逐个选路。
//! 权重 `distance * (1 + flow / capacity)` 在搜索过程中按链路当前状态惰性计算，
//! 剩余带宽不足的链路取无穷大（软过滤）。

use super::demand::Demand;
use super::executor::{Feasibility, attempt_single_path};
use super::strategy::{Admissions, Strategy};
use crate::net::{Link, Topology};

/// 按当前负载放大的距离权重
pub fn dynamic_weight(link: &Link) -> f64 {
    link.distance_km * (1.0 + link.flow() / link.capacity)
}

/// 按带宽升序的处理顺序；排序稳定，等带宽时保持列表顺序
pub fn bandwidth_ascending(demands: &[Demand]) -> Vec<Demand> {
    let mut sorted = demands.to_vec();
    sorted.sort_by(|a, b| a.bandwidth.total_cmp(&b.bandwidth));
    sorted
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicWeight;

impl Strategy for DynamicWeight {
    fn name(&self) -> &'static str {
        "dynamic_weight"
    }

    fn admit(&self, topo: &mut Topology, demands: &[Demand]) -> Admissions {
        let mut accepted = Vec::new();
        let mut rejected = Vec::new();
        for demand in bandwidth_ascending(demands) {
            match attempt_single_path(topo, &demand, &dynamic_weight, Feasibility::Soft) {
                Ok(adm) => accepted.push(adm),
                Err(rej) => rejected.push(rej),
            }
        }
        (accepted, rejected)
    }
}
