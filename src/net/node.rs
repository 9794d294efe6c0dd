//! 节点类型
//!
//! 骨干网节点：标识符、名称与地理坐标，加载后不可变。

use super::id::NodeId;

/// 骨干网节点
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    name: String,
    latitude: f64,
    longitude: f64,
}

impl Node {
    /// 创建新节点
    pub fn new(id: NodeId, name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            name: name.into(),
            latitude,
            longitude,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}
