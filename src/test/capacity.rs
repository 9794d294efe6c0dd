use crate::net::{CapacityTiers, EARTH_RADIUS_KM, haversine_km, tier};

#[test]
fn tier_boundaries_are_closed_on_the_upper_side() {
    assert_eq!(tier(0.0), 100.0);
    assert_eq!(tier(999.9), 100.0);
    assert_eq!(tier(1000.0), 100.0);
    assert_eq!(tier(1000.0001), 200.0);
    assert_eq!(tier(2000.0), 200.0);
    assert_eq!(tier(2000.5), 300.0);
    assert_eq!(tier(12_000.0), 300.0);
}

#[test]
fn default_tier_table_lists_all_capacities() {
    let tiers = CapacityTiers::default();
    assert_eq!(tiers.capacities(), vec![100.0, 200.0, 300.0]);
    assert_eq!(tiers.capacity_for(1500.0), 200.0);
}

#[test]
fn haversine_one_degree_on_equator() {
    let d = haversine_km(0.0, 0.0, 0.0, 1.0);
    let expected = EARTH_RADIUS_KM * 1.0_f64.to_radians();
    assert!((d - expected).abs() < 1e-9, "got {d}, expected {expected}");
}

#[test]
fn haversine_is_symmetric_and_zero_on_same_point() {
    let ab = haversine_km(40.7, -74.0, 34.05, -118.25);
    let ba = haversine_km(34.05, -118.25, 40.7, -74.0);
    assert!((ab - ba).abs() < 1e-9);
    // New York to Los Angeles is roughly 3940 km.
    assert!(ab > 3900.0 && ab < 4000.0, "got {ab}");
    assert_eq!(haversine_km(10.0, 20.0, 10.0, 20.0), 0.0);
}
