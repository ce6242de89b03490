use nalgebra::Vector2;
use serde::Serialize;

use crate::constants::{DEFAULT_CHECKPOINT_INTERVAL_S, DEFAULT_MAX_TIME_S, DEFAULT_TIME_STEP_S};
use crate::drag::drag_force;
use crate::environment::Environment;
use crate::error::SimulationError;
use crate::sampling::{CheckpointSampler, Trajectory};
use crate::sphere::SphereGeometry;

/// Release conditions for a drop
#[derive(Debug, Clone, Copy)]
pub struct ReleaseConditions {
    /// Aircraft speed at release (m/s), carried over as initial horizontal
    /// velocity of the sphere
    pub launch_speed: f64,
    /// Wind speed (m/s), signed; added to the horizontal velocity
    pub wind_speed: f64,
    /// Height above ground at release (m)
    pub release_height: f64,
}

/// Tunable solver settings
#[derive(Debug, Clone, Copy)]
pub struct SolverSettings {
    /// Integration time step (s)
    pub time_step: f64,
    /// Simulated time cap (s); bounds the run when the sphere never lands
    pub max_time: f64,
    /// Spacing of recorded checkpoint markers (s)
    pub checkpoint_interval: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP_S,
            max_time: DEFAULT_MAX_TIME_S,
            checkpoint_interval: DEFAULT_CHECKPOINT_INTERVAL_S,
        }
    }
}

/// Instantaneous state of the falling sphere, owned by the solver for the
/// duration of one run
#[derive(Debug, Clone, Copy)]
struct KinematicState {
    position: Vector2<f64>,
    velocity: Vector2<f64>,
    elapsed_s: f64,
}

impl KinematicState {
    fn at_release(release: &ReleaseConditions) -> Self {
        Self {
            position: Vector2::new(0.0, release.release_height),
            velocity: Vector2::new(release.launch_speed + release.wind_speed, 0.0),
            elapsed_s: 0.0,
        }
    }
}

/// Summary of a finished drop, for reporting and serialization
#[derive(Debug, Clone, Serialize)]
pub struct DropReport {
    pub release_height_m: f64,
    pub time_of_flight_s: f64,
    pub impact_range_m: f64,
    pub impact_velocity_mps: f64,
    pub impact_energy_j: f64,
    pub sample_count: usize,
    pub checkpoint_count: usize,
}

/// Trajectory integrator for a sphere released horizontally.
///
/// Advances a single kinematic state with semi-implicit Euler steps:
/// velocity is updated from forces evaluated at the current velocity, then
/// position is advanced with the just-updated velocity. The run terminates
/// on ground contact (`y <= 0`) or when the time cap elapses. The final
/// sample may sit below ground level; impact position is not clamped.
pub struct DropSolver {
    geometry: SphereGeometry,
    release: ReleaseConditions,
    environment: Environment,
    settings: SolverSettings,
}

impl DropSolver {
    /// Create a solver with default sea-level environment and settings.
    /// Geometry is assumed already validated by `SphereGeometry::resolve`.
    pub fn new(geometry: SphereGeometry, release: ReleaseConditions) -> Self {
        Self {
            geometry,
            release,
            environment: Environment::default(),
            settings: SolverSettings::default(),
        }
    }

    pub fn set_environment(&mut self, environment: Environment) {
        self.environment = environment;
    }

    pub fn set_time_step(&mut self, time_step: f64) {
        self.settings.time_step = time_step;
    }

    pub fn set_max_time(&mut self, max_time: f64) {
        self.settings.max_time = max_time;
    }

    pub fn set_checkpoint_interval(&mut self, interval: f64) {
        self.settings.checkpoint_interval = interval;
    }

    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    fn validate_settings(&self) -> Result<(), SimulationError> {
        let SolverSettings {
            time_step,
            max_time,
            checkpoint_interval,
        } = self.settings;

        if !time_step.is_finite() || time_step <= 0.0 {
            return Err(SimulationError::invalid_input(format!(
                "time step must be a positive number of seconds, got {time_step}"
            )));
        }
        if !max_time.is_finite() || max_time <= 0.0 {
            return Err(SimulationError::invalid_input(format!(
                "max time must be a positive number of seconds, got {max_time}"
            )));
        }
        if !checkpoint_interval.is_finite() || checkpoint_interval <= 0.0 {
            return Err(SimulationError::invalid_input(format!(
                "checkpoint interval must be a positive number of seconds, got {checkpoint_interval}"
            )));
        }
        Ok(())
    }

    /// Run the integration to completion and return the recorded trajectory.
    ///
    /// Only solver settings can fail validation here; nothing fails mid-run.
    /// A release at or below ground level terminates immediately with the
    /// seed sample alone.
    pub fn solve(&self) -> Result<Trajectory, SimulationError> {
        self.validate_settings()?;

        let dt = self.settings.time_step;
        let mut state = KinematicState::at_release(&self.release);
        let mut sampler = CheckpointSampler::new(self.settings.checkpoint_interval);

        let mut times = vec![0.0];
        let mut positions = vec![state.position];
        let mut checkpoints = Vec::new();

        while state.elapsed_s < self.settings.max_time && state.position.y > 0.0 {
            let force = drag_force(&self.environment, self.geometry.area_m2, state.velocity);

            let acceleration = Vector2::new(
                force.x / self.geometry.mass_kg,
                -self.environment.gravity + force.y / self.geometry.mass_kg,
            );

            // Velocity first, then position from the updated velocity
            state.velocity += acceleration * dt;
            state.position += state.velocity * dt;
            state.elapsed_s += dt;

            times.push(state.elapsed_s);
            positions.push(state.position);

            if let Some(index) = sampler.observe(state.elapsed_s, positions.len() - 1) {
                checkpoints.push(index);
            }
        }

        Ok(Trajectory {
            times,
            positions,
            checkpoints,
        })
    }

    /// Summarize a trajectory produced by this solver.
    ///
    /// With semi-implicit stepping the velocity of sample *n* is exactly
    /// `(p_n - p_{n-1}) / dt`, so the impact velocity is recovered from the
    /// last two samples without storing the velocity series.
    pub fn report(&self, trajectory: &Trajectory) -> DropReport {
        let n = trajectory.len();
        let impact_velocity_mps = if n >= 2 {
            let last = trajectory.positions[n - 1];
            let prev = trajectory.positions[n - 2];
            ((last - prev) / self.settings.time_step).norm()
        } else {
            (self.release.launch_speed + self.release.wind_speed).abs()
        };

        let impact_range_m = trajectory.final_position().map(|p| p.x).unwrap_or(0.0);

        DropReport {
            release_height_m: self.release.release_height,
            time_of_flight_s: trajectory.flight_time(),
            impact_range_m,
            impact_velocity_mps,
            impact_energy_j: 0.5 * self.geometry.mass_kg * impact_velocity_mps * impact_velocity_mps,
            sample_count: n,
            checkpoint_count: trajectory.checkpoints.len(),
        }
    }
}
