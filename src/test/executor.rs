use super::{graph, ids};
use crate::admit::{
    AdmissionConfig, Demand, Feasibility, RejectReason, attempt_multi_path, attempt_single_path,
    plan_multi_path, smart_weight,
};
use crate::net::{Link, NodeId};
use crate::route::distance_weight;

fn diamond() -> crate::net::Topology {
    // s=0, a=1, b=2, t=3; every link 500 km / 100 Mbps
    graph(4, &[(0, 1, 500.0), (1, 3, 500.0), (0, 2, 500.0), (2, 3, 500.0)])
}

/// s=0 - x=1 is shared; x branches to t=4 through a=2 and b=3
fn shared_uplink(uplink_km: f64) -> crate::net::Topology {
    graph(
        5,
        &[
            (0, 1, uplink_km),
            (1, 2, 500.0),
            (2, 4, 500.0),
            (1, 3, 500.0),
            (3, 4, 500.0),
        ],
    )
}

#[test]
fn smart_weight_prefers_idle_links_and_blocks_full_ones() {
    let mut link = Link::new(NodeId(0), NodeId(1), 500.0, 100.0);
    assert_eq!(smart_weight(&link), 500.0);
    link.charge(1, 50.0);
    assert_eq!(smart_weight(&link), 750.0);
    link.charge(1, 49.5);
    assert_eq!(smart_weight(&link), f64::INFINITY);
}

#[test]
fn single_path_admits_and_commits() {
    let mut topo = graph(3, &[(0, 1, 500.0), (1, 2, 1500.0)]);
    let demand = Demand::new(1, NodeId(0), NodeId(2), 50.0);
    let adm = attempt_single_path(&mut topo, &demand, &distance_weight, Feasibility::Hard).expect("admitted");
    assert_eq!(adm.granted_bandwidth, 50.0);
    assert_eq!(adm.paths.len(), 1);
    assert_eq!(adm.paths[0].nodes, ids(&[0, 1, 2]));
    assert_eq!(topo.edge(NodeId(0), NodeId(1)).unwrap().flow(), 50.0);
    assert_eq!(topo.edge(NodeId(1), NodeId(2)).unwrap().flow(), 50.0);

    let too_big = Demand::new(2, NodeId(0), NodeId(2), 80.0);
    let rej = attempt_single_path(&mut topo, &too_big, &distance_weight, Feasibility::Soft).expect_err("no room");
    assert_eq!(rej.reason, RejectReason::NoFeasiblePath);
    assert_eq!(topo.edge(NodeId(0), NodeId(1)).unwrap().flow(), 50.0);
}

#[test]
fn single_path_rejects_unknown_endpoint() {
    let mut topo = graph(2, &[(0, 1, 500.0)]);
    let demand = Demand::new(1, NodeId(0), NodeId(5), 10.0);
    let rej = attempt_single_path(&mut topo, &demand, &distance_weight, Feasibility::Hard).expect_err("unknown");
    assert_eq!(rej.reason, RejectReason::UnknownEndpoint);
}

#[test]
fn zero_bandwidth_and_same_endpoints_are_trivially_admitted() {
    let mut topo = graph(2, &[(0, 1, 500.0)]);
    let zero = Demand::new(1, NodeId(0), NodeId(1), 0.0);
    assert!(attempt_single_path(&mut topo, &zero, &distance_weight, Feasibility::Hard).is_ok());

    let loopback = Demand::new(2, NodeId(1), NodeId(1), 40.0);
    let adm = attempt_single_path(&mut topo, &loopback, &distance_weight, Feasibility::Hard).expect("trivial");
    assert_eq!(adm.paths[0].nodes, ids(&[1]));
    assert!(topo.links().iter().all(|l| l.flow() == 0.0));
}

#[test]
fn multi_path_splits_over_diamond() {
    let mut topo = diamond();
    let cfg = AdmissionConfig::default();
    let demand = Demand::new(9, NodeId(0), NodeId(3), 150.0);
    let adm = attempt_multi_path(&mut topo, &demand, 150.0, &cfg).expect("admitted");

    assert!(adm.is_multi_path());
    assert_eq!(adm.paths[0].nodes, ids(&[0, 1, 3]));
    assert_eq!(adm.paths[0].bandwidth, 100.0);
    assert_eq!(adm.paths[1].nodes, ids(&[0, 2, 3]));
    assert_eq!(adm.paths[1].bandwidth, 50.0);
    assert_eq!(adm.allocated_bandwidth(), 150.0);
    assert_eq!(topo.edge(NodeId(0), NodeId(1)).unwrap().residual(), 0.0);
    assert_eq!(topo.edge(NodeId(2), NodeId(3)).unwrap().residual(), 50.0);
}

#[test]
fn multi_path_plan_accounts_for_shared_links() {
    let mut topo = shared_uplink(500.0);
    let cfg = AdmissionConfig::default();

    // Both branches sit behind the 100 Mbps uplink, so only 100 of 150 fits.
    let plan = plan_multi_path(&topo, NodeId(0), NodeId(4), 150.0, &cfg);
    assert_eq!(plan, Err(RejectReason::InsufficientMultiPathCoverage));

    let demand = Demand::new(1, NodeId(0), NodeId(4), 150.0);
    let rej = attempt_multi_path(&mut topo, &demand, 150.0, &cfg).expect_err("uplink too small");
    assert_eq!(rej.reason, RejectReason::InsufficientMultiPathCoverage);
    assert!(topo.links().iter().all(|l| l.flow() == 0.0 && l.assignments().is_empty()));
}

#[test]
fn multi_path_merges_assignment_on_shared_uplink() {
    // 2500 km uplink carries 300 Mbps; each branch carries 100.
    let mut topo = shared_uplink(2500.0);
    let cfg = AdmissionConfig::default();
    let demand = Demand::new(4, NodeId(0), NodeId(4), 200.0);
    let adm = attempt_multi_path(&mut topo, &demand, 200.0, &cfg).expect("admitted");

    assert_eq!(adm.paths.len(), 2);
    let uplink = topo.edge(NodeId(0), NodeId(1)).unwrap();
    assert_eq!(uplink.flow(), 200.0);
    assert_eq!(uplink.assignments().len(), 1);
    assert_eq!(uplink.assignments()[0].seq, 4);
    assert_eq!(uplink.assignments()[0].amount, 200.0);
}

#[test]
fn multi_path_honours_shortfall_tolerance() {
    let topo = graph(2, &[(0, 1, 500.0)]);
    let cfg = AdmissionConfig::default();

    // 100 of 110 leaves 10 <= 11 unallocated.
    let plan = plan_multi_path(&topo, NodeId(0), NodeId(1), 110.0, &cfg).expect("within tolerance");
    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].bandwidth, 100.0);

    let strict = AdmissionConfig {
        shortfall_tolerance: 0.0,
        ..AdmissionConfig::default()
    };
    assert_eq!(
        plan_multi_path(&topo, NodeId(0), NodeId(1), 110.0, &strict),
        Err(RejectReason::InsufficientMultiPathCoverage)
    );
}

#[test]
fn multi_path_without_candidates_is_no_feasible_path() {
    let topo = graph(3, &[(0, 1, 500.0)]);
    let cfg = AdmissionConfig::default();
    assert_eq!(
        plan_multi_path(&topo, NodeId(0), NodeId(2), 10.0, &cfg),
        Err(RejectReason::NoFeasiblePath)
    );
    assert_eq!(
        plan_multi_path(&topo, NodeId(0), NodeId(8), 10.0, &cfg),
        Err(RejectReason::UnknownEndpoint)
    );
}

#[test]
fn multi_path_respects_max_paths() {
    let topo = diamond();
    let cfg = AdmissionConfig {
        max_paths: 1,
        ..AdmissionConfig::default()
    };
    assert_eq!(
        plan_multi_path(&topo, NodeId(0), NodeId(3), 150.0, &cfg),
        Err(RejectReason::InsufficientMultiPathCoverage)
    );
    assert_eq!(cfg.candidate_limit(), 4);
}
