//! Defines the arm parameter data structure

use crate::constraints::JointLimits;
use crate::parameter_error::ParameterError;

/// Parameters for the arm. See [parameters_robots.rs](parameters_robots.rs) for the
/// default setup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Length of link 3, shoulder to elbow (meters).
    pub l3: f64,

    /// Length of link 4, elbow to end effector (meters).
    pub l4: f64,

    /// Lower limit of the shoulder angle, degrees.
    pub phi32_min: f64,

    /// Upper limit of the shoulder angle, degrees.
    pub phi32_max: f64,

    /// Lower limit of the elbow angle, degrees.
    pub phi43_min: f64,

    /// Upper limit of the elbow angle, degrees.
    pub phi43_max: f64,

    /// Time to accelerate from standstill to the maximal velocity (seconds).
    /// Zero means an instant jump to the maximal velocity.
    pub accel_time: f64,

    /// Maximal Cartesian velocity of the end effector (m/s). Non-positive values
    /// are replaced by a fallback when timing the motion.
    pub max_velocity: f64,
}

impl Parameters {
    /// Check the invariants: all values finite, positive link lengths, `min <= max`
    /// for both joints and non-negative acceleration time.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (name, value) in [
            ("l3", self.l3),
            ("l4", self.l4),
            ("phi32_min", self.phi32_min),
            ("phi32_max", self.phi32_max),
            ("phi43_min", self.phi43_min),
            ("phi43_max", self.phi43_max),
            ("accel_time", self.accel_time),
            ("max_velocity", self.max_velocity),
        ] {
            if !value.is_finite() {
                return Err(ParameterError::NonFinite(format!(
                    "{} must be finite (got {})",
                    name, value
                )));
            }
        }

        for (name, value) in [("l3", self.l3), ("l4", self.l4)] {
            if value <= 0.0 {
                return Err(ParameterError::NonPositiveLength { name, value });
            }
        }

        for (joint, min, max) in [
            ("phi32", self.phi32_min, self.phi32_max),
            ("phi43", self.phi43_min, self.phi43_max),
        ] {
            if min > max {
                return Err(ParameterError::InvertedLimits { joint, min, max });
            }
        }

        if self.accel_time < 0.0 {
            return Err(ParameterError::NegativeAccelTime(self.accel_time));
        }
        Ok(())
    }

    /// Joint limits converted to radians.
    pub fn limits(&self) -> JointLimits {
        JointLimits::from_degrees(
            self.phi32_min,
            self.phi32_max,
            self.phi43_min,
            self.phi43_max,
        )
    }

    /// Distance from the shoulder to the end effector of the fully stretched arm.
    pub fn reach(&self) -> f64 {
        self.l3 + self.l4
    }

    /// Radius of the unreachable hole around the shoulder.
    pub fn inner_radius(&self) -> f64 {
        (self.l3 - self.l4).abs()
    }

    /// Convert to string yaml representation (quick viewing, etc).
    pub fn to_yaml(&self) -> String {
        format!(
            "planar_arm_geometric_parameters:\n  \
              l3: {}\n  \
              l4: {}\n\
            planar_arm_joint_limits:\n  \
              phi32: [{}, {}]\n  \
              phi43: [{}, {}]\n\
            planar_arm_motion:\n  \
              accel_time: {}\n  \
              max_velocity: {}\n",
            self.l3,
            self.l4,
            self.phi32_min,
            self.phi32_max,
            self.phi43_min,
            self.phi43_max,
            self.accel_time,
            self.max_velocity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Parameters::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_length() {
        let parameters = Parameters {
            l4: 0.0,
            ..Parameters::default()
        };
        match parameters.validate() {
            Err(ParameterError::NonPositiveLength { name, .. }) => assert_eq!(name, "l4"),
            other => panic!("Unexpected validation result {:?}", other),
        }
    }

    #[test]
    fn test_rejects_inverted_limits() {
        let parameters = Parameters {
            phi43_min: 140.0,
            phi43_max: 135.0,
            ..Parameters::default()
        };
        match parameters.validate() {
            Err(ParameterError::InvertedLimits { joint, .. }) => assert_eq!(joint, "phi43"),
            other => panic!("Unexpected validation result {:?}", other),
        }
    }

    #[test]
    fn test_rejects_nan() {
        let parameters = Parameters {
            max_velocity: f64::NAN,
            ..Parameters::default()
        };
        assert!(matches!(
            parameters.validate(),
            Err(ParameterError::NonFinite(_))
        ));
    }

    #[test]
    fn test_equal_limits_allowed() {
        let parameters = Parameters {
            phi32_min: 40.0,
            phi32_max: 40.0,
            ..Parameters::default()
        };
        assert!(parameters.validate().is_ok());
    }

    #[test]
    fn test_annulus() {
        let parameters = Parameters::default();
        assert!((parameters.reach() - 1.9).abs() < 1e-12);
        assert!((parameters.inner_radius() - 0.5).abs() < 1e-12);
    }
}
