//! Joint and Cartesian types shared by the solver and the planner

use nalgebra::Point2;
use std::fmt;

/// Cartesian point in the plane of the arm, meters. The shoulder sits at the origin.
pub type Point = Point2<f64>;

/// Joint configuration of the arm, radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JointAngles {
    /// Shoulder angle, from the X axis to link 3.
    pub phi32: f64,

    /// Elbow interior angle between link 3 and link 4. This is a bend relative to
    /// link 3, not an absolute direction.
    pub phi43: f64,
}

impl JointAngles {
    pub const fn new(phi32: f64, phi43: f64) -> Self {
        JointAngles { phi32, phi43 }
    }

    /// Build from angles given in degrees.
    pub fn from_degrees(phi32: f64, phi43: f64) -> Self {
        JointAngles {
            phi32: phi32.to_radians(),
            phi43: phi43.to_radians(),
        }
    }

    /// Both angles in degrees, shoulder first.
    pub fn to_degrees(&self) -> [f64; 2] {
        [self.phi32.to_degrees(), self.phi43.to_degrees()]
    }

    /// Absolute direction of link 4 measured from the X axis.
    pub fn link4_direction(&self) -> f64 {
        self.phi32 - self.phi43
    }

    pub fn is_finite(&self) -> bool {
        self.phi32.is_finite() && self.phi43.is_finite()
    }
}

/// The three kinematic points of the arm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmPose {
    /// A, the fixed base. Always at the origin.
    pub shoulder: Point,

    /// B, the elbow joint at the end of link 3.
    pub elbow: Point,

    /// C, the tool tip at the end of link 4.
    pub effector: Point,
}

/// Names the joint that caused a limit violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Joint {
    Shoulder,
    Elbow,
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Joint::Shoulder => write!(f, "phi32"),
            Joint::Elbow => write!(f, "phi43"),
        }
    }
}

/// Reason why inverse kinematics produced no solution. Callers that only need
/// "solution or not" use [`Kinematics::inverse`] instead; this type exists for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IkFailure {
    /// Target has a NaN or infinite coordinate.
    NonFinite,

    /// Target coincides with the shoulder, direction is undefined.
    AtOrigin,

    /// Target is further away than the fully stretched arm.
    TooFar { distance: f64, reach: f64 },

    /// Target is inside the hole of the reachable annulus.
    TooClose { distance: f64, inner_radius: f64 },

    /// A geometric solution exists but the joint is outside its configured range.
    JointLimit { joint: Joint, angle: f64 },
}

impl fmt::Display for IkFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            IkFailure::NonFinite => write!(f, "target coordinates are not finite"),
            IkFailure::AtOrigin => write!(f, "target at the shoulder"),
            IkFailure::TooFar { distance, reach } => write!(
                f,
                "target too far: distance {:.4} m, reach {:.4} m",
                distance, reach
            ),
            IkFailure::TooClose {
                distance,
                inner_radius,
            } => write!(
                f,
                "target too close: distance {:.4} m, inner radius {:.4} m",
                distance, inner_radius
            ),
            IkFailure::JointLimit { joint, angle } => write!(
                f,
                "{} = {:.2}° is outside the joint limits",
                joint,
                angle.to_degrees()
            ),
        }
    }
}

impl std::error::Error for IkFailure {}

pub trait Kinematics {
    /// Solve the target, returning the reason on failure. Joint limits are only checked
    /// when `check_limits` is set; reachability is always checked.
    fn solve(&self, target: &Point, check_limits: bool) -> Result<JointAngles, IkFailure>;

    /// Positions of shoulder, elbow and end effector for the given joints.
    fn forward(&self, joints: &JointAngles) -> ArmPose;

    /// Elbow-up solution within joint limits, if any.
    fn inverse(&self, target: &Point) -> Option<JointAngles> {
        self.solve(target, true).ok()
    }

    /// Elbow-up solution ignoring joint limits. The target must still be reachable.
    fn inverse_unconstrained(&self, target: &Point) -> Option<JointAngles> {
        self.solve(target, false).ok()
    }
}
