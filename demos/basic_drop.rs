/// Basic Drop Example
///
/// Simulates a copper sphere released from an aircraft and prints the
/// summary plus the per-second checkpoint positions.

use spherefall_engine::{DropSolver, ReleaseConditions, SphereGeometry};

fn main() {
    println!("=== Basic Drop Example ===\n");

    let mass = 1.0; // kg
    let density = 8960.0; // kg/m³ (copper)
    let launch_speed = 50.0; // m/s
    let wind_speed = 0.0; // m/s
    let height = 1000.0; // m

    println!("Release Parameters:");
    println!("  Mass: {} kg", mass);
    println!("  Density: {} kg/m³", density);
    println!("  Launch speed: {} m/s", launch_speed);
    println!("  Wind speed: {} m/s", wind_speed);
    println!("  Height: {} m", height);
    println!();

    let geometry = match SphereGeometry::resolve(mass, density) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {e}");
            return;
        }
    };
    println!("Resolved Geometry:");
    println!("  Radius: {:.4} m", geometry.radius_m);
    println!("  Cross-sectional area: {:.6} m²", geometry.area_m2);
    println!();

    let release = ReleaseConditions {
        launch_speed,
        wind_speed,
        release_height: height,
    };
    let solver = DropSolver::new(geometry, release);

    let trajectory = match solver.solve() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {e}");
            return;
        }
    };
    let report = solver.report(&trajectory);

    println!("Drop Results:");
    println!("  Time of flight: {:.2} s", report.time_of_flight_s);
    println!("  Impact range: {:.2} m", report.impact_range_m);
    println!("  Impact velocity: {:.2} m/s", report.impact_velocity_mps);
    println!("  Impact energy: {:.2} J", report.impact_energy_j);
    println!();

    println!("Checkpoints (one per simulated second):");
    println!("  Time (s) |    X (m)  |    Y (m)");
    println!("  ---------|-----------|----------");
    for &idx in &trajectory.checkpoints {
        let p = trajectory.positions[idx];
        println!("  {:8.1} | {:9.2} | {:8.2}", trajectory.times[idx], p.x, p.y);
    }
}
