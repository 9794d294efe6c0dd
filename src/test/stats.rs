use super::ids;
use crate::net::{UtilizationHistogram, UtilizationSnapshot};
use crate::topo::build_chain;

#[test]
fn histogram_boundaries_fall_into_lower_bucket() {
    let mut hist = UtilizationHistogram::default();
    hist.record(0.0, 100.0);
    hist.record(30.0, 100.0);
    hist.record(30.5, 100.0);
    hist.record(70.0, 100.0);
    hist.record(70.5, 100.0);
    hist.record(300.0, 300.0);
    assert_eq!(hist, UtilizationHistogram { low: 2, mid: 2, high: 2 });
    assert_eq!(hist.total(), 6);
}

#[test]
fn snapshot_reports_histogram_average_and_hot_links() {
    let mut topo = build_chain(&[500.0, 500.0, 500.0]).expect("chain").topo;
    topo.commit(1, &ids(&[0, 1]), 30.0).unwrap();
    topo.commit(2, &ids(&[1, 2]), 70.0).unwrap();
    topo.commit(3, &ids(&[2, 3]), 71.0).unwrap();

    let snap = UtilizationSnapshot::capture(&topo);
    assert_eq!(snap.histogram, UtilizationHistogram { low: 1, mid: 1, high: 1 });
    assert_eq!(snap.high_utilization_links, 1);
    let expected_avg = (0.3 + 0.7 + 0.71) / 3.0;
    assert!((snap.average_utilization - expected_avg).abs() < 1e-12);
    assert_eq!(snap.total_capacity, 300.0);
    assert_eq!(snap.total_flow, 171.0);

    let hot: Vec<_> = snap.hot_links().map(|l| (l.a.0, l.b.0)).collect();
    assert_eq!(hot, vec![(2, 3)]);
}

#[test]
fn empty_topology_snapshot_is_zeroed() {
    let topo = build_chain(&[]).expect("single node").topo;
    let snap = UtilizationSnapshot::capture(&topo);
    assert!(snap.links.is_empty());
    assert_eq!(snap.average_utilization, 0.0);
    assert_eq!(snap.histogram.total(), 0);
    assert_eq!(snap.high_utilization_links, 0);
}

#[test]
fn tier_counts_follow_capacity_table() {
    let topo = build_chain(&[800.0, 1200.0, 1800.0, 2200.0, 9000.0]).expect("chain").topo;
    let snap = UtilizationSnapshot::capture(&topo);
    let counts: Vec<(f64, usize)> = snap.tier_counts.iter().map(|t| (t.capacity, t.links)).collect();
    assert_eq!(counts, vec![(100.0, 1), (200.0, 2), (300.0, 2)]);
}
