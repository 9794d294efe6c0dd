use crate::net::{NodeId, Topology};

mod capacity;
mod executor;
mod path_search;
mod stats;

/// 按 `(a, b, distance_km)` 列表构建 `0..n` 个节点的拓扑
pub(crate) fn graph(n: usize, links: &[(usize, usize, f64)]) -> Topology {
    let mut topo = Topology::new();
    for i in 0..n {
        topo.add_node(NodeId(i), format!("n{i}"), 0.0, 0.0)
            .expect("add node");
    }
    for &(a, b, d) in links {
        topo.add_link(NodeId(a), NodeId(b), d).expect("add link");
    }
    topo
}

pub(crate) fn ids(raw: &[usize]) -> Vec<NodeId> {
    raw.iter().copied().map(NodeId).collect()
}
