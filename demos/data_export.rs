/// Data Export Example
///
/// Exports a simulated trajectory to CSV and JSON for external plotting,
/// plus a ready-to-run Gnuplot script.

use std::fs::File;
use std::io::Write;

use spherefall_engine::{DropSolver, ReleaseConditions, SphereGeometry, Trajectory};

fn main() -> std::io::Result<()> {
    println!("=== Trajectory Data Export Example ===\n");

    let geometry = match SphereGeometry::resolve(5.0, 7850.0) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {e}");
            return Ok(());
        }
    };
    let release = ReleaseConditions {
        launch_speed: 80.0,
        wind_speed: -5.0,
        release_height: 2000.0,
    };

    println!("Generating trajectory for a 5 kg steel sphere from 2000 m...");
    let solver = DropSolver::new(geometry, release);
    let trajectory = match solver.solve() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {e}");
            return Ok(());
        }
    };
    let report = solver.report(&trajectory);

    export_csv(&trajectory, "trajectory.csv")?;
    println!("✓ Exported to trajectory.csv");

    export_json(&trajectory, "trajectory.json")?;
    println!("✓ Exported to trajectory.json");

    create_gnuplot_script("plot_trajectory.gnuplot")?;
    println!("✓ Created Gnuplot script: plot_trajectory.gnuplot");
    println!("  Run: gnuplot plot_trajectory.gnuplot");

    println!("\nTrajectory Summary:");
    println!("  Total points: {}", trajectory.len());
    println!("  Time of flight: {:.2} s", report.time_of_flight_s);
    println!("  Impact range: {:.2} m", report.impact_range_m);

    Ok(())
}

fn export_csv(trajectory: &Trajectory, path: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "time_s,x_m,y_m")?;
    for (t, p) in trajectory.times.iter().zip(&trajectory.positions) {
        writeln!(file, "{},{},{}", t, p.x, p.y)?;
    }
    Ok(())
}

fn export_json(trajectory: &Trajectory, path: &str) -> std::io::Result<()> {
    let samples: Vec<serde_json::Value> = trajectory
        .times
        .iter()
        .zip(&trajectory.positions)
        .map(|(t, p)| serde_json::json!({ "time_s": t, "x_m": p.x, "y_m": p.y }))
        .collect();
    let doc = serde_json::json!({
        "samples": samples,
        "checkpoints": trajectory.checkpoints,
    });

    let mut file = File::create(path)?;
    writeln!(file, "{}", serde_json::to_string_pretty(&doc)?)?;
    Ok(())
}

fn create_gnuplot_script(path: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "set datafile separator ','")?;
    writeln!(file, "set title 'Sphere Trajectory with Air Drag'")?;
    writeln!(file, "set xlabel 'Horizontal Distance (m)'")?;
    writeln!(file, "set ylabel 'Height (m)'")?;
    writeln!(file, "set grid")?;
    writeln!(
        file,
        "plot 'trajectory.csv' using 2:3 every ::1 with lines title 'Trajectory'"
    )?;
    writeln!(file, "pause -1 'Press enter to close'")?;
    Ok(())
}
