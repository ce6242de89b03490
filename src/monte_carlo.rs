//! Dispersion analysis over perturbed release conditions.
//!
//! Each run is an independent trajectory with no shared state, so the batch
//! is computed in parallel, one worker per trajectory.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rayon::prelude::*;
use serde::Serialize;

use crate::environment::Environment;
use crate::error::SimulationError;
use crate::solver::{DropSolver, ReleaseConditions, SolverSettings};
use crate::sphere::SphereGeometry;

/// Parameters for a Monte Carlo dispersion run
#[derive(Debug, Clone)]
pub struct MonteCarloParams {
    /// Number of independent trajectories
    pub num_runs: usize,
    /// Standard deviation of launch speed (m/s)
    pub launch_speed_std: f64,
    /// Standard deviation of wind speed (m/s)
    pub wind_speed_std: f64,
    /// Standard deviation of release height (m)
    pub release_height_std: f64,
    /// RNG seed; `None` draws one from the OS for a fresh dispersion
    pub seed: Option<u64>,
}

impl Default for MonteCarloParams {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            launch_speed_std: 2.0,
            wind_speed_std: 1.0,
            release_height_std: 5.0,
            seed: None,
        }
    }
}

/// Aggregate statistics over the dispersion batch
#[derive(Debug, Clone, Serialize)]
pub struct MonteCarloResults {
    pub num_runs: usize,
    pub mean_range_m: f64,
    pub std_range_m: f64,
    pub min_range_m: f64,
    pub max_range_m: f64,
    pub mean_flight_time_s: f64,
    pub std_flight_time_s: f64,
}

/// Run `params.num_runs` independent drops with normally perturbed release
/// conditions and aggregate impact statistics.
pub fn run_monte_carlo(
    geometry: SphereGeometry,
    release: ReleaseConditions,
    environment: Environment,
    settings: SolverSettings,
    params: &MonteCarloParams,
) -> Result<MonteCarloResults, SimulationError> {
    if params.num_runs == 0 {
        return Err(SimulationError::invalid_input(
            "number of runs must be at least 1",
        ));
    }

    let launch_dist = normal(release.launch_speed, params.launch_speed_std)?;
    let wind_dist = normal(release.wind_speed, params.wind_speed_std)?;
    let height_dist = normal(release.release_height, params.release_height_std)?;

    // Draw all perturbations up front on one seedable RNG; the solves
    // themselves run in parallel with no shared state.
    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let perturbed: Vec<ReleaseConditions> = (0..params.num_runs)
        .map(|_| ReleaseConditions {
            launch_speed: launch_dist.sample(&mut rng),
            wind_speed: wind_dist.sample(&mut rng),
            // A perturbation below ground terminates immediately; that run
            // still counts as an impact at the release point.
            release_height: height_dist.sample(&mut rng),
        })
        .collect();

    let outcomes: Result<Vec<(f64, f64)>, SimulationError> = perturbed
        .par_iter()
        .map(|conditions| {
            let mut solver = DropSolver::new(geometry, *conditions);
            solver.set_environment(environment);
            solver.set_time_step(settings.time_step);
            solver.set_max_time(settings.max_time);
            solver.set_checkpoint_interval(settings.checkpoint_interval);

            let trajectory = solver.solve()?;
            let report = solver.report(&trajectory);
            Ok((report.impact_range_m, report.time_of_flight_s))
        })
        .collect();
    let outcomes = outcomes?;

    let ranges: Vec<f64> = outcomes.iter().map(|o| o.0).collect();
    let times: Vec<f64> = outcomes.iter().map(|o| o.1).collect();
    let (mean_range_m, std_range_m) = mean_and_std(&ranges);
    let (mean_flight_time_s, std_flight_time_s) = mean_and_std(&times);

    Ok(MonteCarloResults {
        num_runs: params.num_runs,
        mean_range_m,
        std_range_m,
        min_range_m: ranges.iter().copied().fold(f64::INFINITY, f64::min),
        max_range_m: ranges.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        mean_flight_time_s,
        std_flight_time_s,
    })
}

fn normal(mean: f64, std: f64) -> Result<Normal<f64>, SimulationError> {
    Normal::new(mean, std).map_err(|e| {
        SimulationError::invalid_input(format!("bad dispersion for mean {mean}: {e}"))
    })
}

fn mean_and_std(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    (mean, variance.sqrt())
}
