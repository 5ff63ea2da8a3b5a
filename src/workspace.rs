//! Outline of the region the end effector can reach within the joint limits

use crate::constraints::JointLimits;
use crate::kinematic_traits::{JointAngles, Kinematics, Point};

/// Default sampling step along the limits, degrees.
pub const DEFAULT_STEP_DEG: f64 = 2.0;

/// End effector positions at the four corners of the joint limit rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkspaceCorners {
    /// Both joints at maximum.
    pub a: Point,
    /// Shoulder at maximum, elbow at minimum.
    pub b: Point,
    /// Both joints at minimum.
    pub c: Point,
    /// Shoulder at minimum, elbow at maximum.
    pub d: Point,
}

/// Angles from `from` to `to` (inclusive) with at most `step` between neighbours.
fn sweep(from: f64, to: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = ((to - from).abs() / step).ceil().max(1.0) as usize;
    (0..=count).map(move |k| from + (to - from) * k as f64 / count as f64)
}

/// Closed outline of the workspace, walking the border of the joint limit rectangle:
/// shoulder min to max at elbow minimum, elbow min to max at shoulder maximum, then
/// back along the two other sides. Non-positive `step_deg` uses [`DEFAULT_STEP_DEG`].
pub fn workspace_boundary<K: Kinematics>(
    kinematics: &K,
    limits: &JointLimits,
    step_deg: f64,
) -> Vec<Point> {
    let step = if step_deg > 0.0 {
        step_deg
    } else {
        DEFAULT_STEP_DEG
    }
    .to_radians();

    let effector = |phi32: f64, phi43: f64| {
        kinematics
            .forward(&JointAngles::new(phi32, phi43))
            .effector
    };

    let mut outline = Vec::new();
    outline.extend(sweep(limits.min32, limits.max32, step).map(|p| effector(p, limits.min43)));
    outline.extend(sweep(limits.min43, limits.max43, step).map(|p| effector(limits.max32, p)));
    outline.extend(sweep(limits.max32, limits.min32, step).map(|p| effector(p, limits.max43)));
    outline.extend(sweep(limits.max43, limits.min43, step).map(|p| effector(limits.min32, p)));
    outline
}

pub fn workspace_corners<K: Kinematics>(kinematics: &K, limits: &JointLimits) -> WorkspaceCorners {
    let effector = |joints: JointAngles| kinematics.forward(&joints).effector;
    WorkspaceCorners {
        a: effector(limits.upper()),
        b: effector(JointAngles::new(limits.max32, limits.min43)),
        c: effector(limits.lower()),
        d: effector(JointAngles::new(limits.min32, limits.max43)),
    }
}
