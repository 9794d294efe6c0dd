//! 链路类型
//!
//! 无向骨干链路：距离、容量（加载时确定）以及可变的流量记账。

use serde::Serialize;

use super::id::NodeId;

/// 浮点记账容差（Mbps）。
pub const EPS_MBPS: f64 = 1e-9;

/// 某个 demand 在这条链路上占用的带宽
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Assignment {
    pub seq: u64,
    pub amount: f64,
}

/// 无向链路。端点在插入时规范化为 `a <= b`。
#[derive(Debug, Clone)]
pub struct Link {
    pub a: NodeId,
    pub b: NodeId,
    pub distance_km: f64,
    pub capacity: f64,
    flow: f64,
    assignments: Vec<Assignment>,
}

impl Link {
    /// 创建新链路，初始无流量
    pub fn new(u: NodeId, v: NodeId, distance_km: f64, capacity: f64) -> Self {
        let (a, b) = if u <= v { (u, v) } else { (v, u) };
        Self {
            a,
            b,
            distance_km,
            capacity,
            flow: 0.0,
            assignments: Vec::new(),
        }
    }

    pub fn flow(&self) -> f64 {
        self.flow
    }

    /// 剩余带宽 = capacity - flow
    pub fn residual(&self) -> f64 {
        self.capacity - self.flow
    }

    /// 利用率（0..=1）
    pub fn utilization(&self) -> f64 {
        if self.capacity > 0.0 {
            self.flow / self.capacity
        } else {
            0.0
        }
    }

    /// 按提交顺序排列的 demand 占用记录
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// 链路的另一端
    pub fn other(&self, from: NodeId) -> NodeId {
        if from == self.a { self.b } else { self.a }
    }

    pub(crate) fn reset(&mut self) {
        self.flow = 0.0;
        self.assignments.clear();
    }

    /// 记入 `amount` 的流量。调用方保证 `residual() >= amount`。
    ///
    /// 同一个 demand 的多条路径经过同一链路时合并成一条记录。
    pub(crate) fn charge(&mut self, seq: u64, amount: f64) {
        self.flow += amount;
        debug_assert!(
            self.flow <= self.capacity + EPS_MBPS,
            "link {}-{} over capacity: flow {} > {}",
            self.a,
            self.b,
            self.flow,
            self.capacity
        );
        match self.assignments.last_mut() {
            Some(last) if last.seq == seq => last.amount += amount,
            _ => self.assignments.push(Assignment { seq, amount }),
        }
    }
}
