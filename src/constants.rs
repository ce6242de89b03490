/// Physical constants used in trajectory calculations

/// Gravitational acceleration in m/s²
pub const G_ACCEL_MPS2: f64 = 9.81;

/// Air density at sea level (kg/m³)
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225;

/// Drag coefficient for a smooth sphere (dimensionless shape factor)
///
/// Value: 0.47, the classical subsonic sphere coefficient in the
/// Reynolds-number plateau where Cd is roughly velocity-independent.
pub const SPHERE_DRAG_COEFFICIENT: f64 = 0.47;

// Solver defaults

/// Default integration time step (s)
pub const DEFAULT_TIME_STEP_S: f64 = 0.1;

/// Default simulation time cap (s), bounding the step count even when the
/// sphere never reaches the ground
pub const DEFAULT_MAX_TIME_S: f64 = 500.0;

/// Default interval between recorded trajectory checkpoints (s)
pub const DEFAULT_CHECKPOINT_INTERVAL_S: f64 = 1.0;
