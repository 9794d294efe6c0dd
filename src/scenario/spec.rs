use serde::{Deserialize, Serialize};

use super::error::ScenarioError;
use crate::admit::{AdmissionConfig, Demand};
use crate::net::{NodeId, Topology, TopologyError};

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub schema_version: u32,
    #[serde(default)]
    pub meta: Option<ScenarioMeta>,
    pub topology: TopologySpec,
    #[serde(default)]
    pub defaults: Option<AdmissionConfig>,
    #[serde(default)]
    pub demands: Vec<DemandSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioMeta {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologySpec {
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub links: Vec<LinkSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: usize,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkSpec {
    pub a: usize,
    pub b: usize,
    /// Explicit link length. When absent, the great-circle distance between
    /// the endpoint coordinates is used.
    #[serde(default)]
    pub distance_km: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DemandSpec {
    pub seq: u64,
    pub source: usize,
    pub target: usize,
    pub bandwidth: f64,
}

impl TopologySpec {
    /// 构建拓扑，链路容量按距离档位确定
    pub fn build(&self) -> Result<Topology, TopologyError> {
        let mut topo = Topology::new();
        for n in &self.nodes {
            let name = n.name.clone().unwrap_or_else(|| format!("n{}", n.id));
            topo.add_node(NodeId(n.id), name, n.latitude, n.longitude)?;
        }
        for l in &self.links {
            let (a, b) = (NodeId(l.a), NodeId(l.b));
            match l.distance_km {
                Some(d) => topo.add_link(a, b, d)?,
                None => topo.add_link_by_coordinates(a, b)?,
            };
        }
        Ok(topo)
    }
}

impl DemandSpec {
    /// 带宽必须是有限的非负数
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if !self.bandwidth.is_finite() || self.bandwidth < 0.0 {
            return Err(ScenarioError::InvalidDemand {
                seq: self.seq,
                bandwidth: self.bandwidth,
            });
        }
        Ok(())
    }
}

impl From<DemandSpec> for Demand {
    fn from(d: DemandSpec) -> Self {
        Demand::new(d.seq, NodeId(d.source), NodeId(d.target), d.bandwidth)
    }
}

impl ScenarioSpec {
    /// demand 列表（保持文件中的顺序）
    pub fn demands(&self) -> Vec<Demand> {
        self.demands.iter().copied().map(Demand::from).collect()
    }

    /// 场景文件中的准入参数；未给出时为默认值
    pub fn admission_config(&self) -> AdmissionConfig {
        self.defaults.clone().unwrap_or_default()
    }
}
