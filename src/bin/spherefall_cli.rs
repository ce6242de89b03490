use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::error::Error;

use spherefall_engine::{
    density_for, material_names, run_monte_carlo, DropReport, DropSolver, Environment,
    MonteCarloParams, ReleaseConditions, SolverSettings, SphereGeometry, Trajectory,
};

#[derive(Parser)]
#[command(name = "spherefall")]
#[command(version = "0.1.0")]
#[command(about = "Falling-sphere trajectory calculator with air drag", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a single drop
    Drop {
        /// Sphere mass (kg)
        #[arg(short = 'm', long)]
        mass: f64,

        /// Material name for density lookup (see `materials`)
        #[arg(short = 'M', long, conflicts_with = "density")]
        material: Option<String>,

        /// Material density (kg/m³), for materials not in the table
        #[arg(short = 'd', long)]
        density: Option<f64>,

        /// Aircraft speed at release (m/s)
        #[arg(short = 'v', long, default_value = "0.0")]
        launch_speed: f64,

        /// Wind speed (m/s, signed)
        #[arg(short = 'w', long, default_value = "0.0")]
        wind_speed: f64,

        /// Release height above ground (m)
        #[arg(short = 'H', long)]
        height: f64,

        /// Integration time step (s)
        #[arg(long, default_value = "0.1")]
        time_step: f64,

        /// Simulated time cap (s)
        #[arg(long, default_value = "500.0")]
        max_time: f64,

        /// Spacing of checkpoint markers (s)
        #[arg(long, default_value = "1.0")]
        checkpoint_interval: f64,

        /// Disable drag entirely (vacuum conditions)
        #[arg(long)]
        vacuum: bool,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,

        /// Show every sample instead of checkpoint markers only
        #[arg(long)]
        full: bool,
    },

    /// Run a Monte Carlo dispersion over perturbed release conditions
    MonteCarlo {
        /// Sphere mass (kg)
        #[arg(short = 'm', long)]
        mass: f64,

        /// Material name for density lookup (see `materials`)
        #[arg(short = 'M', long, conflicts_with = "density")]
        material: Option<String>,

        /// Material density (kg/m³)
        #[arg(short = 'd', long)]
        density: Option<f64>,

        /// Mean aircraft speed at release (m/s)
        #[arg(short = 'v', long, default_value = "0.0")]
        launch_speed: f64,

        /// Mean wind speed (m/s, signed)
        #[arg(short = 'w', long, default_value = "0.0")]
        wind_speed: f64,

        /// Mean release height above ground (m)
        #[arg(short = 'H', long)]
        height: f64,

        /// Number of simulations
        #[arg(short = 'n', long, default_value = "1000")]
        num_runs: usize,

        /// Launch speed standard deviation (m/s)
        #[arg(long, default_value = "2.0")]
        launch_speed_std: f64,

        /// Wind speed standard deviation (m/s)
        #[arg(long, default_value = "1.0")]
        wind_speed_std: f64,

        /// Release height standard deviation (m)
        #[arg(long, default_value = "5.0")]
        height_std: f64,

        /// RNG seed for reproducible dispersions
        #[arg(long)]
        seed: Option<u64>,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// List known materials and their densities
    Materials,

    /// Display information about the physics model
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Serialize)]
struct SamplePoint {
    time_s: f64,
    x_m: f64,
    y_m: f64,
    checkpoint: bool,
}

#[derive(Debug, Serialize)]
struct DropOutput {
    report: DropReport,
    samples: Vec<SamplePoint>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Drop {
            mass,
            material,
            density,
            launch_speed,
            wind_speed,
            height,
            time_step,
            max_time,
            checkpoint_interval,
            vacuum,
            output,
            full,
        } => {
            let density = resolve_density(material.as_deref(), density)?;
            let geometry = SphereGeometry::resolve(mass, density)?;
            let release = ReleaseConditions {
                launch_speed,
                wind_speed,
                release_height: height,
            };

            let mut solver = DropSolver::new(geometry, release);
            solver.set_time_step(time_step);
            solver.set_max_time(max_time);
            solver.set_checkpoint_interval(checkpoint_interval);
            if vacuum {
                solver.set_environment(Environment::vacuum());
            }

            let trajectory = solver.solve()?;
            let report = solver.report(&trajectory);
            print_drop(&trajectory, report, output, full);
            Ok(())
        }

        Commands::MonteCarlo {
            mass,
            material,
            density,
            launch_speed,
            wind_speed,
            height,
            num_runs,
            launch_speed_std,
            wind_speed_std,
            height_std,
            seed,
            output,
        } => {
            let density = resolve_density(material.as_deref(), density)?;
            let geometry = SphereGeometry::resolve(mass, density)?;
            let release = ReleaseConditions {
                launch_speed,
                wind_speed,
                release_height: height,
            };
            let params = MonteCarloParams {
                num_runs,
                launch_speed_std,
                wind_speed_std,
                release_height_std: height_std,
                seed,
            };

            let results = run_monte_carlo(
                geometry,
                release,
                Environment::default(),
                SolverSettings::default(),
                &params,
            )?;
            print_monte_carlo(&results, output)?;
            Ok(())
        }

        Commands::Materials => {
            println!("Known materials (kg/m³):");
            for name in material_names() {
                // Names come straight from the table; lookup cannot miss
                if let Some(density) = density_for(name) {
                    println!("  {name:<20} {density:>8.0}");
                }
            }
            Ok(())
        }

        Commands::Info => {
            println!("Spherefall Engine");
            println!();
            println!("Simulates a sphere released horizontally from a moving aircraft,");
            println!("integrating gravity and quadratic air drag with semi-implicit");
            println!("Euler steps until ground contact.");
            println!();
            println!("Model constants:");
            println!("  Air density:       1.225 kg/m³ (sea level)");
            println!("  Drag coefficient:  0.47 (smooth sphere)");
            println!("  Gravity:           9.81 m/s²");
            Ok(())
        }
    }
}

fn resolve_density(material: Option<&str>, density: Option<f64>) -> Result<f64, Box<dyn Error>> {
    if let Some(name) = material {
        return density_for(name).ok_or_else(|| {
            format!(
                "unknown material '{name}'; known: {}",
                material_names().join(", ")
            )
            .into()
        });
    }
    density.ok_or_else(|| "either --material or --density is required".into())
}

fn sample_points(trajectory: &Trajectory) -> Vec<SamplePoint> {
    trajectory
        .times
        .iter()
        .zip(&trajectory.positions)
        .enumerate()
        .map(|(idx, (&t, p))| SamplePoint {
            time_s: t,
            x_m: p.x,
            y_m: p.y,
            checkpoint: trajectory.checkpoints.contains(&idx),
        })
        .collect()
}

fn print_drop(trajectory: &Trajectory, report: DropReport, output: OutputFormat, full: bool) {
    let samples = sample_points(trajectory);

    match output {
        OutputFormat::Table => {
            println!("DROP SUMMARY");
            println!("  Release height:  {:.2} m", report.release_height_m);
            println!("  Time of flight:  {:.2} s", report.time_of_flight_s);
            println!("  Impact range:    {:.2} m", report.impact_range_m);
            println!("  Impact velocity: {:.2} m/s", report.impact_velocity_mps);
            println!("  Impact energy:   {:.2} J", report.impact_energy_j);
            println!("  Samples:         {}", report.sample_count);
            println!();

            let rows: Vec<&SamplePoint> = if full {
                samples.iter().collect()
            } else {
                samples.iter().filter(|s| s.checkpoint).collect()
            };

            println!("  Time (s) |    X (m)  |    Y (m)");
            println!("  ---------|-----------|----------");
            for row in rows {
                println!("  {:8.2} | {:9.2} | {:8.2}", row.time_s, row.x_m, row.y_m);
            }
        }
        OutputFormat::Json => {
            let out = DropOutput { report, samples };
            match serde_json::to_string_pretty(&out) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("Warning: JSON serialization failed: {e}"),
            }
        }
        OutputFormat::Csv => {
            println!("time_s,x_m,y_m,checkpoint");
            for s in &samples {
                println!("{},{},{},{}", s.time_s, s.x_m, s.y_m, s.checkpoint);
            }
        }
    }
}

fn print_monte_carlo(
    results: &spherefall_engine::MonteCarloResults,
    output: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(results)?),
        OutputFormat::Csv => {
            println!("num_runs,mean_range_m,std_range_m,min_range_m,max_range_m,mean_flight_time_s,std_flight_time_s");
            println!(
                "{},{},{},{},{},{},{}",
                results.num_runs,
                results.mean_range_m,
                results.std_range_m,
                results.min_range_m,
                results.max_range_m,
                results.mean_flight_time_s,
                results.std_flight_time_s
            );
        }
        OutputFormat::Table => {
            println!("MONTE CARLO DISPERSION ({} runs)", results.num_runs);
            println!(
                "  Impact range:  mean {:.2} m, std {:.2} m",
                results.mean_range_m, results.std_range_m
            );
            println!(
                "  Range spread:  {:.2} m to {:.2} m",
                results.min_range_m, results.max_range_m
            );
            println!(
                "  Flight time:   mean {:.2} s, std {:.2} s",
                results.mean_flight_time_s, results.std_flight_time_s
            );
        }
    }
    Ok(())
}
