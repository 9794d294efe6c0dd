//! 先到先服务（FCFS）单路径策略
//!
//! 严格按到达顺序处理；先到的大 demand 可能耗尽后到的小 demand 所需的余量。

use super::demand::Demand;
use super::executor::{Feasibility, attempt_single_path};
use super::strategy::{Admissions, Strategy};
use crate::net::Topology;
use crate::route::distance_weight;

#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Strategy for Fcfs {
    fn name(&self) -> &'static str {
        "fcfs"
    }

    fn admit(&self, topo: &mut Topology, demands: &[Demand]) -> Admissions {
        let mut accepted = Vec::new();
        let mut rejected = Vec::new();
        for demand in demands {
            match attempt_single_path(topo, demand, &distance_weight, Feasibility::Hard) {
                Ok(adm) => accepted.push(adm),
                Err(rej) => rejected.push(rej),
            }
        }
        (accepted, rejected)
    }
}
