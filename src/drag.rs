use nalgebra::Vector2;

use crate::environment::Environment;

/// Quadratic drag force on the sphere, opposing the velocity vector.
///
/// Magnitude is `0.5 · ρ · Cd · A · v²`; the components are the magnitude
/// projected onto `-velocity / speed`. At exactly zero speed the drag
/// direction is undefined and both components are zero.
pub fn drag_force(env: &Environment, area_m2: f64, velocity: Vector2<f64>) -> Vector2<f64> {
    let speed = velocity.norm();
    if speed == 0.0 {
        return Vector2::zeros();
    }

    let magnitude = 0.5 * env.air_density * env.drag_coefficient * area_m2 * speed * speed;
    -magnitude * (velocity / speed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_velocity_gives_zero_force() {
        let env = Environment::default();
        let force = drag_force(&env, 0.05, Vector2::zeros());
        assert_eq!(force, Vector2::zeros());
    }

    #[test]
    fn test_magnitude_matches_quadratic_law() {
        let env = Environment::default();
        let area = 0.05;
        let velocity = Vector2::new(30.0, -40.0); // speed 50
        let force = drag_force(&env, area, velocity);

        let expected = 0.5 * 1.225 * 0.47 * area * 50.0 * 50.0;
        assert_relative_eq!(force.norm(), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_force_opposes_velocity() {
        let env = Environment::default();
        let velocity = Vector2::new(12.0, -5.0);
        let force = drag_force(&env, 0.01, velocity);

        // Antiparallel: normalized directions sum to zero
        let sum = force.normalize() + velocity.normalize();
        assert!(sum.norm() < 1e-12);
    }

    #[test]
    fn test_vacuum_produces_no_drag() {
        let env = Environment::vacuum();
        let force = drag_force(&env, 0.05, Vector2::new(100.0, -100.0));
        assert_eq!(force, Vector2::zeros());
    }
}
