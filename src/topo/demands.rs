//! 合成 demand 列表
//!
//! 第 i 个（从 0 开始）demand：`seq = i + 1`，源 `nodes[i % n]`，
//! 汇 `nodes[(i + 5) % n]`，带宽 `10 + (i % 5) * 5` Mbps。

use crate::admit::Demand;
use crate::net::NodeId;

pub fn synthetic_demands(nodes: &[NodeId], count: usize) -> Vec<Demand> {
    if nodes.is_empty() {
        return Vec::new();
    }
    let n = nodes.len();
    (0..count)
        .map(|i| {
            Demand::new(
                i as u64 + 1,
                nodes[i % n],
                nodes[(i + 5) % n],
                10.0 + (i % 5) as f64 * 5.0,
            )
        })
        .collect()
}
