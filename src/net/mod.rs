//! 骨干网模型模块
//!
//! 此模块包含拓扑状态的核心组件，如节点、链路、容量模型和利用率统计。

// 子模块声明
mod capacity;
mod error;
mod geo;
mod id;
mod link;
mod node;
mod stats;
mod topology;

// 重新导出公共接口
pub use capacity::{CapacityTier, CapacityTiers, tier};
pub use error::{CommitError, TopologyError};
pub use geo::{EARTH_RADIUS_KM, haversine_km};
pub use id::{LinkId, NodeId};
pub use link::{Assignment, EPS_MBPS, Link};
pub use node::Node;
pub use stats::{
    HIGH_UTIL_PCT, LOW_UTIL_PCT, LinkUtilization, TierCount, UtilizationHistogram,
    UtilizationSnapshot,
};
pub use topology::Topology;
