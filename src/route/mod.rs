//! 路径搜索模块
//!
//! 最短路与 k 条最短无环路径，两者都基于调用方给出的非负权重函数 `Fn(&Link) -> f64`。
//!
//! 可行性有两种等价表达：
//! - 硬过滤：用 [`SearchMask::hard_filter`] 屏蔽剩余带宽不足的链路后再搜索；
//! - 软过滤：权重函数对这些链路返回 `f64::INFINITY`。
//!
//! 给定相同的剩余带宽，两者的可达性结果一致；软过滤还允许把距离和利用率混合成权重。

// 子模块声明
mod dijkstra;
mod mask;
mod path;
mod yen;

// 重新导出公共接口
pub use dijkstra::{shortest_path, shortest_path_masked};
pub use mask::SearchMask;
pub use path::{WeightedPath, path_cost};
pub use yen::{KShortestPaths, k_shortest_paths};

use crate::net::Link;

/// 按距离加权
pub fn distance_weight(link: &Link) -> f64 {
    link.distance_km
}
