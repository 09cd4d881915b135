#![cfg(feature = "serde")]

use softbody2d::{BoundaryPolicy, Bounds, SolverConfig, Vec2};

#[test]
fn config_survives_json() {
    let config: SolverConfig<f32> = SolverConfig::new()
        .with_gravity(0.25)
        .with_friction(0.995)
        .with_bounce_damping(0.7)
        .with_iterations(12)
        .with_stiffness_divisor(4.0)
        .with_bounds(1024.0, 768.0)
        .with_boundary(BoundaryPolicy::Enclosed)
        .with_pick_radius(15.0)
        .with_convergence_tolerance(0.01);

    let json = serde_json::to_string(&config).unwrap();
    let back: SolverConfig<f32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
    assert_eq!(back.bounds, Bounds::new(1024.0, 768.0));
    assert_eq!(back.validate(), Ok(()));
}

#[test]
fn boundary_policy_uses_variant_names() {
    let json = serde_json::to_string(&BoundaryPolicy::Open).unwrap();
    assert_eq!(json, "\"Open\"");
    let policy: BoundaryPolicy = serde_json::from_str("\"FloorAndWalls\"").unwrap();
    assert_eq!(policy, BoundaryPolicy::FloorAndWalls);
}

#[test]
fn vec2_reads_field_names() {
    let v: Vec2<f64> = serde_json::from_str(r#"{"x": 1.5, "y": -2.0}"#).unwrap();
    assert_eq!(v, Vec2::new(1.5, -2.0));
    let back: Vec2<f64> = serde_json::from_str(&serde_json::to_string(&v).unwrap()).unwrap();
    assert_eq!(back, v);
}
