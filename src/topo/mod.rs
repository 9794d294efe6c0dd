//! 拓扑与负载生成
//!
//! 确定性的拓扑构建函数以及合成 demand 列表。

pub mod chain;
pub mod demands;
pub mod grid;

pub use chain::{ChainTopology, build_chain};
pub use demands::synthetic_demands;
pub use grid::{GridOpts, GridTopology, build_grid};
