use crate::constants::{AIR_DENSITY_SEA_LEVEL, G_ACCEL_MPS2, SPHERE_DRAG_COEFFICIENT};

/// Environmental conditions for a trajectory run
///
/// Defaults to sea-level air and standard gravity. The fields are plain
/// values so tests can run under alternate conditions, e.g. a vacuum by
/// zeroing the drag coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    /// Fluid density the sphere falls through (kg/m³)
    pub air_density: f64,
    /// Shape-dependent drag coefficient (dimensionless)
    pub drag_coefficient: f64,
    /// Gravitational acceleration (m/s²), acting in -y
    pub gravity: f64,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            air_density: AIR_DENSITY_SEA_LEVEL,
            drag_coefficient: SPHERE_DRAG_COEFFICIENT,
            gravity: G_ACCEL_MPS2,
        }
    }
}

impl Environment {
    /// Environment with no drag at all; gravity still applies
    pub fn vacuum() -> Self {
        Self {
            drag_coefficient: 0.0,
            ..Self::default()
        }
    }
}
