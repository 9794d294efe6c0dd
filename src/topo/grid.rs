//! 经纬度网格拓扑构建
//!
//! 节点排成 rows × cols 的网格，相邻节点（横向、纵向）之间有链路，
//! 链路长度取两端坐标的大圆距离，因此不同纬度的横向链路可能落在不同容量档。

use crate::net::{NodeId, Topology, TopologyError};

#[derive(Debug, Clone)]
pub struct GridOpts {
    pub rows: usize,
    pub cols: usize,
    /// 相邻节点之间的经纬度间隔（度）
    pub spacing_deg: f64,
    pub origin_lat: f64,
    pub origin_lon: f64,
}

impl Default for GridOpts {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 6,
            spacing_deg: 12.0,
            origin_lat: 25.0,
            origin_lon: -120.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GridTopology {
    pub rows: usize,
    pub cols: usize,
    pub topo: Topology,
    pub nodes: Vec<NodeId>,
}

impl GridTopology {
    pub fn at(&self, row: usize, col: usize) -> NodeId {
        self.nodes[row * self.cols + col]
    }
}

pub fn build_grid(opts: &GridOpts) -> Result<GridTopology, TopologyError> {
    let mut topo = Topology::new();
    let mut nodes = Vec::with_capacity(opts.rows * opts.cols);
    for r in 0..opts.rows {
        for c in 0..opts.cols {
            let id = NodeId(r * opts.cols + c);
            let lat = opts.origin_lat + r as f64 * opts.spacing_deg;
            let lon = opts.origin_lon + c as f64 * opts.spacing_deg;
            topo.add_node(id, format!("g{}_{}", r, c), lat, lon)?;
            nodes.push(id);
        }
    }

    for r in 0..opts.rows {
        for c in 0..opts.cols {
            let here = nodes[r * opts.cols + c];
            if c + 1 < opts.cols {
                topo.add_link_by_coordinates(here, nodes[r * opts.cols + c + 1])?;
            }
            if r + 1 < opts.rows {
                topo.add_link_by_coordinates(here, nodes[(r + 1) * opts.cols + c])?;
            }
        }
    }

    Ok(GridTopology {
        rows: opts.rows,
        cols: opts.cols,
        topo,
        nodes,
    })
}
