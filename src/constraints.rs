use crate::kinematic_traits::{Joint, JointAngles};
use rand::Rng;

/// Tolerance applied on both sides of every joint range (radians). Solutions that land
/// on the limit only due to rounding are still accepted.
pub const LIMIT_TOLERANCE: f64 = 0.001;

/// Joint ranges in radians. Unlike revolving industrial joints, the ranges of the planar
/// arm never wrap around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointLimits {
    pub min32: f64,
    pub max32: f64,
    pub min43: f64,
    pub max43: f64,
}

impl JointLimits {
    pub fn new(min32: f64, max32: f64, min43: f64, max43: f64) -> Self {
        JointLimits {
            min32,
            max32,
            min43,
            max43,
        }
    }

    /// Limits given in degrees, as they are entered by the user.
    pub fn from_degrees(min32: f64, max32: f64, min43: f64, max43: f64) -> Self {
        JointLimits::new(
            min32.to_radians(),
            max32.to_radians(),
            min43.to_radians(),
            max43.to_radians(),
        )
    }

    /// The first joint found outside its range, with the offending angle.
    pub fn violation(&self, joints: &JointAngles) -> Option<(Joint, f64)> {
        let within = |angle: f64, min: f64, max: f64| {
            angle >= min - LIMIT_TOLERANCE && angle <= max + LIMIT_TOLERANCE
        };
        if !within(joints.phi32, self.min32, self.max32) {
            return Some((Joint::Shoulder, joints.phi32));
        }
        if !within(joints.phi43, self.min43, self.max43) {
            return Some((Joint::Elbow, joints.phi43));
        }
        None
    }

    pub fn compliant(&self, joints: &JointAngles) -> bool {
        self.violation(joints).is_none()
    }

    /// Both joints at their lower limits. The arm rests here before anything is picked.
    pub fn lower(&self) -> JointAngles {
        JointAngles::new(self.min32, self.min43)
    }

    /// Both joints at their upper limits.
    pub fn upper(&self) -> JointAngles {
        JointAngles::new(self.max32, self.max43)
    }

    pub fn centre(&self) -> JointAngles {
        JointAngles::new(
            (self.min32 + self.max32) / 2.0,
            (self.min43 + self.max43) / 2.0,
        )
    }

    /// Random joint angles within limits.
    pub fn random_angles(&self) -> JointAngles {
        self.random_angles_with(&mut rand::thread_rng())
    }

    /// Random joint angles within limits, drawn from the given generator
    /// (use a seeded one for reproducible sampling).
    pub fn random_angles_with<R: Rng>(&self, rng: &mut R) -> JointAngles {
        let sample = |rng: &mut R, min: f64, max: f64| {
            if min < max {
                rng.gen_range(min..=max)
            } else {
                min
            }
        };
        let phi32 = sample(rng, self.min32, self.max32);
        let phi43 = sample(rng, self.min43, self.max43);
        JointAngles::new(phi32, phi43)
    }
}
