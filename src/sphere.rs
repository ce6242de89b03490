use std::f64::consts::PI;

use crate::error::SimulationError;

/// Geometry of the dropped sphere, derived once from mass and material
/// density.
///
/// Every field is strictly positive. Radius and cross-sectional area are
/// pure functions of mass and density: identical inputs always resolve to
/// bit-identical geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereGeometry {
    /// Sphere mass (kg)
    pub mass_kg: f64,
    /// Material density (kg/m³)
    pub density_kgm3: f64,
    /// Volume (m³), mass / density
    pub volume_m3: f64,
    /// Radius (m), from the inverse sphere-volume formula
    pub radius_m: f64,
    /// Cross-sectional (frontal) area (m²), π·r²
    pub area_m2: f64,
}

impl SphereGeometry {
    /// Resolve sphere geometry from mass and density.
    ///
    /// Fails with `SimulationError::InvalidInput` when mass or density is
    /// non-positive or non-finite; the drag formulas are undefined there.
    pub fn resolve(mass_kg: f64, density_kgm3: f64) -> Result<Self, SimulationError> {
        if !mass_kg.is_finite() || mass_kg <= 0.0 {
            return Err(SimulationError::invalid_input(format!(
                "mass must be a positive number of kilograms, got {mass_kg}"
            )));
        }
        if !density_kgm3.is_finite() || density_kgm3 <= 0.0 {
            return Err(SimulationError::invalid_input(format!(
                "density must be a positive number of kg/m³, got {density_kgm3}"
            )));
        }

        let volume_m3 = mass_kg / density_kgm3;
        let radius_m = (3.0 * volume_m3 / (4.0 * PI)).cbrt();
        let area_m2 = PI * radius_m * radius_m;

        Ok(Self {
            mass_kg,
            density_kgm3,
            volume_m3,
            radius_m,
            area_m2,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_resolve_is_deterministic() {
        let a = SphereGeometry::resolve(1.0, 8960.0).unwrap();
        let b = SphereGeometry::resolve(1.0, 8960.0).unwrap();
        assert_eq!(a.volume_m3.to_bits(), b.volume_m3.to_bits());
        assert_eq!(a.radius_m.to_bits(), b.radius_m.to_bits());
        assert_eq!(a.area_m2.to_bits(), b.area_m2.to_bits());
    }

    #[test]
    fn test_copper_sphere_radius() {
        // A copper sphere whose mass is exactly the volume of a 0.1 m radius
        // ball times copper density must resolve back to that radius.
        let mass = 8960.0 * (4.0 / 3.0) * PI * 0.1_f64.powi(3);
        let geometry = SphereGeometry::resolve(mass, 8960.0).unwrap();
        assert_relative_eq!(geometry.radius_m, 0.1, epsilon = 1e-12);
        assert_relative_eq!(geometry.area_m2, PI * 0.01, epsilon = 1e-12);
    }

    #[test]
    fn test_volume_is_mass_over_density() {
        let geometry = SphereGeometry::resolve(2.0, 500.0).unwrap();
        assert_relative_eq!(geometry.volume_m3, 0.004, epsilon = 1e-15);
    }

    #[test]
    fn test_rejects_non_positive_mass() {
        assert!(SphereGeometry::resolve(0.0, 1000.0).is_err());
        assert!(SphereGeometry::resolve(-1.0, 1000.0).is_err());
    }

    #[test]
    fn test_rejects_non_positive_density() {
        assert!(SphereGeometry::resolve(1.0, 0.0).is_err());
        assert!(SphereGeometry::resolve(1.0, -8960.0).is_err());
    }

    #[test]
    fn test_rejects_non_finite_inputs() {
        assert!(SphereGeometry::resolve(f64::NAN, 1000.0).is_err());
        assert!(SphereGeometry::resolve(1.0, f64::INFINITY).is_err());
    }
}
