//! Hardcoded parameters for a few arm setups

use crate::parameters::Parameters;

impl Default for Parameters {
    fn default() -> Self {
        Parameters::new()
    }
}

impl Parameters {
    // Provides default values: the reference arm of the simulation.
    pub fn new() -> Self {
        Parameters {
            l3: 1.2,
            l4: 0.7,
            phi32_min: 25.0,
            phi32_max: 80.0,
            phi43_min: 45.0,
            phi43_max: 135.0,
            accel_time: 0.5,
            max_velocity: 0.5,
        }
    }

    /// Arm with equal links. It can fold back onto the shoulder, so the reachable
    /// region has no hole.
    pub fn equal_links() -> Self {
        Parameters {
            l3: 1.0,
            l4: 1.0,
            phi32_min: 0.0,
            phi32_max: 90.0,
            phi43_min: 30.0,
            phi43_max: 150.0,
            ..Self::new()
        }
    }

    /// Desktop-sized arm with a long forearm, moving faster.
    pub fn desktop() -> Self {
        Parameters {
            l3: 0.25,
            l4: 0.3,
            phi32_min: 10.0,
            phi32_max: 120.0,
            phi43_min: 20.0,
            phi43_max: 160.0,
            accel_time: 0.2,
            max_velocity: 0.8,
        }
    }
}
