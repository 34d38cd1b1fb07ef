//! Planner configuration.

/// Distance parameters for graph construction and filtering.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Maximum distance between two coordinates for their routes to be
    /// considered directly connected (km).
    pub proximity_threshold_km: f64,

    /// Starting radius for relevance filtering (km).
    pub initial_radius_km: f64,

    /// How much the relevance radius grows per attempt (km).
    /// Must be positive; a non-positive increment jumps straight to the
    /// ceiling.
    pub radius_increment_km: f64,

    /// Radius beyond which relevance filtering gives up (km).
    pub radius_ceiling_km: f64,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        proximity_threshold_km: f64,
        initial_radius_km: f64,
        radius_increment_km: f64,
        radius_ceiling_km: f64,
    ) -> Self {
        Self {
            proximity_threshold_km,
            initial_radius_km,
            radius_increment_km,
            radius_ceiling_km,
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            proximity_threshold_km: 0.2,
            initial_radius_km: 0.2,
            radius_increment_km: 0.1,
            radius_ceiling_km: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.proximity_threshold_km, 0.2);
        assert_eq!(config.initial_radius_km, 0.2);
        assert_eq!(config.radius_increment_km, 0.1);
        assert_eq!(config.radius_ceiling_km, 5.0);
    }

    #[test]
    fn custom_config() {
        let config = PlannerConfig::new(0.5, 1.0, 0.25, 10.0);

        assert_eq!(config.proximity_threshold_km, 0.5);
        assert_eq!(config.initial_radius_km, 1.0);
        assert_eq!(config.radius_increment_km, 0.25);
        assert_eq!(config.radius_ceiling_km, 10.0);
    }
}
