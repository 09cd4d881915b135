use softbody2d::{BodyBuilder, HexBracing, Solver, SolverConfig, Vec2};

fn run() -> Vec<Vec2<f32>> {
    let mut solver: Solver<f32> = Solver::new(SolverConfig::new()).unwrap();
    let body = BodyBuilder::hexagon(Vec2::new(300.0, 200.0), 100.0, HexBracing::Triangle)
        .build(&mut solver)
        .unwrap();
    let grabbed = body.points()[2];
    for frame in 0..240 {
        if (30..60).contains(&frame) {
            let cursor = Vec2::new(300.0 + 4.0 * frame as f32, 150.0);
            solver.set_position(grabbed, cursor).unwrap();
        }
        solver.step();
    }
    solver.points().iter().map(|p| p.position).collect()
}

#[test]
fn simulation_is_deterministic() {
    let results: Vec<_> = (0..5).map(|_| run()).collect();
    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
}
