use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Densities of common sphere materials (kg/m³)
static MATERIAL_DENSITIES: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("rubber", 1100.0),
        ("polyethylene", 900.0),
        ("leather", 900.0),
        ("foam", 60.0),
        ("steel", 7850.0),
        ("composite materials", 1700.0),
        ("ceramic", 2600.0),
        ("glass", 2500.0),
        ("silicone", 1100.0),
        ("bamboo", 700.0),
        ("copper", 8960.0),
    ])
});

/// Look up a material density by name, case-insensitively.
/// Unknown names return `None`; callers fall back to a direct density value.
pub fn density_for(name: &str) -> Option<f64> {
    MATERIAL_DENSITIES
        .get(name.trim().to_lowercase().as_str())
        .copied()
}

/// Known material names, sorted for display
pub fn material_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = MATERIAL_DENSITIES.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_material() {
        assert_eq!(density_for("copper"), Some(8960.0));
        assert_eq!(density_for("foam"), Some(60.0));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(density_for("Copper"), Some(8960.0));
        assert_eq!(density_for("  STEEL "), Some(7850.0));
    }

    #[test]
    fn test_unknown_material() {
        assert_eq!(density_for("unobtainium"), None);
    }

    #[test]
    fn test_names_sorted_and_complete() {
        let names = material_names();
        assert_eq!(names.len(), 11);
        assert!(names.contains(&"copper"));
        assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
