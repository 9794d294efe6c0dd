use super::{graph, ids};
use crate::net::{Link, NodeId};
use crate::route::{SearchMask, distance_weight, k_shortest_paths, path_cost, shortest_path, shortest_path_masked};

fn yen_graph() -> crate::net::Topology {
    graph(
        4,
        &[
            (0, 1, 100.0),
            (1, 2, 100.0),
            (0, 2, 300.0),
            (1, 3, 100.0),
            (3, 2, 150.0),
            (0, 3, 400.0),
        ],
    )
}

#[test]
fn dijkstra_prefers_lower_total_distance() {
    let topo = graph(3, &[(0, 1, 100.0), (1, 2, 100.0), (0, 2, 1000.0)]);
    let path = shortest_path(&topo, NodeId(0), NodeId(2), &distance_weight).expect("path");
    assert_eq!(path.nodes, ids(&[0, 1, 2]));
    assert_eq!(path.cost, 200.0);
    assert_eq!(path.hops(), 2);
}

#[test]
fn infinite_weight_makes_link_impassable() {
    let topo = graph(3, &[(0, 1, 100.0), (1, 2, 100.0), (0, 2, 1000.0)]);
    let avoid_short = |link: &Link| {
        if link.distance_km < 150.0 && link.b == NodeId(2) {
            f64::INFINITY
        } else {
            link.distance_km
        }
    };
    let path = shortest_path(&topo, NodeId(0), NodeId(2), &avoid_short).expect("path");
    assert_eq!(path.nodes, ids(&[0, 2]));

    let blocked = |_: &Link| f64::INFINITY;
    assert!(shortest_path(&topo, NodeId(0), NodeId(2), &blocked).is_none());
}

#[test]
fn dijkstra_handles_trivial_and_unknown_endpoints() {
    let topo = graph(3, &[(0, 1, 100.0)]);
    let same = shortest_path(&topo, NodeId(1), NodeId(1), &distance_weight).expect("trivial");
    assert_eq!(same.nodes, ids(&[1]));
    assert_eq!(same.cost, 0.0);

    assert!(shortest_path(&topo, NodeId(0), NodeId(2), &distance_weight).is_none());
    assert!(shortest_path(&topo, NodeId(0), NodeId(7), &distance_weight).is_none());
}

#[test]
fn masked_search_skips_banned_links_and_nodes() {
    let topo = yen_graph();
    let mut mask = SearchMask::new();
    mask.ban_node(NodeId(1));
    let path = shortest_path_masked(&topo, NodeId(0), NodeId(2), &distance_weight, &mask).expect("path");
    assert_eq!(path.nodes, ids(&[0, 2]));

    let direct = topo.link_between(NodeId(0), NodeId(2)).expect("0-2");
    mask.ban_link(direct);
    let path = shortest_path_masked(&topo, NodeId(0), NodeId(2), &distance_weight, &mask).expect("path");
    assert_eq!(path.nodes, ids(&[0, 3, 2]));
    assert_eq!(mask.banned_link_count(), 1);
}

#[test]
fn yen_enumerates_all_loopless_paths_in_cost_order() {
    let topo = yen_graph();
    let paths: Vec<_> = k_shortest_paths(&topo, NodeId(0), NodeId(2), distance_weight).collect();

    let got: Vec<(Vec<NodeId>, f64)> = paths.into_iter().map(|p| (p.nodes, p.cost)).collect();
    let expected = vec![
        (ids(&[0, 1, 2]), 200.0),
        (ids(&[0, 2]), 300.0),
        (ids(&[0, 1, 3, 2]), 350.0),
        (ids(&[0, 3, 2]), 550.0),
        (ids(&[0, 3, 1, 2]), 600.0),
    ];
    assert_eq!(got, expected);
}

#[test]
fn yen_take_limits_and_costs_match_path_cost() {
    let topo = yen_graph();
    let paths: Vec<_> = k_shortest_paths(&topo, NodeId(0), NodeId(2), distance_weight)
        .take(2)
        .collect();
    assert_eq!(paths.len(), 2);
    for p in &paths {
        let cost = path_cost(&topo, &p.nodes, &distance_weight).expect("valid path");
        assert_eq!(cost, p.cost);
    }

    let mut none = k_shortest_paths(&topo, NodeId(0), NodeId(9), distance_weight);
    assert!(none.next().is_none());
    assert!(none.next().is_none());
}

#[test]
fn hard_and_soft_filters_agree() {
    // 0-1-3 is short (100 Mbps links), 0-2-3 is long (200 Mbps links).
    let mut topo = graph(4, &[(0, 1, 500.0), (1, 3, 500.0), (0, 2, 1500.0), (2, 3, 1500.0)]);
    topo.commit(1, &ids(&[0, 1, 3]), 60.0).expect("commit");

    for (bw, expected) in [(30.0, Some(ids(&[0, 1, 3]))), (50.0, Some(ids(&[0, 2, 3]))), (250.0, None)] {
        let mask = SearchMask::hard_filter(&topo, bw);
        let hard = shortest_path_masked(&topo, NodeId(0), NodeId(3), &distance_weight, &mask).map(|p| p.nodes);
        let soft_weight = |link: &Link| {
            if link.residual() < bw {
                f64::INFINITY
            } else {
                link.distance_km
            }
        };
        let soft = shortest_path(&topo, NodeId(0), NodeId(3), &soft_weight).map(|p| p.nodes);
        assert_eq!(hard, expected, "hard filter, bw={bw}");
        assert_eq!(soft, expected, "soft filter, bw={bw}");
    }
}
