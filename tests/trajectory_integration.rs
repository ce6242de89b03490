use spherefall_engine::{
    DropSolver, Environment, ReleaseConditions, SolverSettings, SphereGeometry,
};

#[test]
fn test_copper_drop_end_to_end() {
    // 1 kg copper sphere released at 50 m/s from 1000 m in still air.
    let geometry = SphereGeometry::resolve(1.0, 8960.0).unwrap();
    let release = ReleaseConditions {
        launch_speed: 50.0,
        wind_speed: 0.0,
        release_height: 1000.0,
    };

    let solver = DropSolver::new(geometry, release);
    let trajectory = solver.solve().unwrap();
    let report = solver.report(&trajectory);

    // Many steps, terminated by ground contact rather than the time cap
    assert!(trajectory.len() > 10);
    assert!(trajectory.final_position().unwrap().y <= 0.0);
    assert!(report.time_of_flight_s < 500.0);

    // Drag slows the fall, so flight takes longer than the vacuum time...
    let vacuum_time = (2.0 * 1000.0 / 9.81_f64).sqrt();
    assert!(report.time_of_flight_s > vacuum_time);

    // ...while the range stays strictly below the no-drag bound of ~706.6 m
    assert!(report.impact_range_m > 0.0);
    assert!(report.impact_range_m < 50.0 * vacuum_time);
}

#[test]
fn test_checkpoints_track_elapsed_seconds() {
    let geometry = SphereGeometry::resolve(2.0, 7850.0).unwrap();
    let release = ReleaseConditions {
        launch_speed: 30.0,
        wind_speed: 5.0,
        release_height: 400.0,
    };

    let solver = DropSolver::new(geometry, release);
    let trajectory = solver.solve().unwrap();
    let report = solver.report(&trajectory);

    // Roughly one checkpoint per whole simulated second
    let whole_seconds = report.time_of_flight_s.floor() as usize;
    assert!(trajectory.checkpoints.len() >= whole_seconds.saturating_sub(1));
    assert!(trajectory.checkpoints.len() <= whole_seconds + 1);

    for pair in trajectory.checkpoints.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    assert!(trajectory
        .checkpoints
        .iter()
        .all(|&idx| idx < trajectory.len()));
}

#[test]
fn test_time_cap_bounds_run_without_ground_contact() {
    // Foam ball drifting down from high altitude with a tiny time cap:
    // the cap, not the ground, ends the run.
    let geometry = SphereGeometry::resolve(0.05, 60.0).unwrap();
    let release = ReleaseConditions {
        launch_speed: 0.0,
        wind_speed: 0.0,
        release_height: 10_000.0,
    };

    let mut solver = DropSolver::new(geometry, release);
    solver.set_max_time(2.0);
    let trajectory = solver.solve().unwrap();

    assert!(trajectory.final_position().unwrap().y > 0.0);
    assert_eq!(trajectory.len(), 21); // seed + 2.0 / 0.1 steps
}

#[test]
fn test_vacuum_flag_recovers_analytic_range() {
    // Without drag, the drop reduces to projectile motion; the discrete
    // range converges on launch_speed * sqrt(2h/g) as dt shrinks.
    let geometry = SphereGeometry::resolve(1.0, 8960.0).unwrap();
    let release = ReleaseConditions {
        launch_speed: 50.0,
        wind_speed: 0.0,
        release_height: 1000.0,
    };

    let mut solver = DropSolver::new(geometry, release);
    solver.set_environment(Environment::vacuum());
    solver.set_time_step(0.001);
    let trajectory = solver.solve().unwrap();
    let report = solver.report(&trajectory);

    let analytic_range = 50.0 * (2.0 * 1000.0 / 9.81_f64).sqrt();
    assert!((report.impact_range_m - analytic_range).abs() < 1.0);
}

#[test]
fn test_settings_round_trip() {
    let geometry = SphereGeometry::resolve(1.0, 2500.0).unwrap();
    let release = ReleaseConditions {
        launch_speed: 0.0,
        wind_speed: 0.0,
        release_height: 100.0,
    };

    let mut solver = DropSolver::new(geometry, release);
    solver.set_time_step(0.05);
    solver.set_max_time(120.0);
    solver.set_checkpoint_interval(2.0);

    let SolverSettings {
        time_step,
        max_time,
        checkpoint_interval,
    } = *solver.settings();
    assert_eq!(time_step, 0.05);
    assert_eq!(max_time, 120.0);
    assert_eq!(checkpoint_interval, 2.0);

    // Two-second markers: about half as many checkpoints as whole seconds
    let trajectory = solver.solve().unwrap();
    let report = solver.report(&trajectory);
    let expected = (report.time_of_flight_s / 2.0).floor() as usize;
    assert!(trajectory.checkpoints.len() >= expected.saturating_sub(1));
    assert!(trajectory.checkpoints.len() <= expected + 1);
}
