//! Helper functions

use crate::annotations::Frame;
use crate::kinematic_traits::{ArmPose, JointAngles};

/// Allows to specify joint values in degrees (converts to radians)
#[allow(dead_code)]
pub fn as_radians(degrees: [i32; 2]) -> JointAngles {
    JointAngles::from_degrees(degrees[0] as f64, degrees[1] as f64)
}

/// Print joint values, converting radians to degrees.
#[allow(dead_code)]
pub fn dump_joints(joints: &JointAngles) {
    let [phi32, phi43] = joints.to_degrees();
    println!("[{:5.2} {:5.2}]", phi32, phi43);
}

pub fn dump_pose(pose: &ArmPose) {
    println!(
        "A: ({:.3}, {:.3}), B: ({:.3}, {:.3}), C: ({:.3}, {:.3})",
        pose.shoulder.x, pose.shoulder.y, pose.elbow.x, pose.elbow.y, pose.effector.x,
        pose.effector.y
    );
}

/// Print one line per frame.
#[allow(dead_code)]
pub fn dump_frames(frames: &[Frame]) {
    if frames.is_empty() {
        println!("No frames");
    }
    for frame in frames {
        println!("{:?}", frame);
    }
}

/// Maximal difference of the two joint angles.
pub fn joint_distance(a: &JointAngles, b: &JointAngles) -> f64 {
    (a.phi32 - b.phi32).abs().max((a.phi43 - b.phi43).abs())
}

/// Panics with both joint sets printed if they differ by more than `tolerance`.
#[cfg(test)]
pub fn assert_joints_eq(a: &JointAngles, b: &JointAngles, tolerance: f64) -> bool {
    if joint_distance(a, b) > tolerance {
        dump_joints(a);
        dump_joints(b);
        panic!("Joint angles differ by more than {}", tolerance);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_radians() {
        let joints = as_radians([90, 180]);
        assert!((joints.phi32 - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((joints.phi43 - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_joint_distance_takes_maximum() {
        let a = JointAngles::new(0.1, 0.5);
        let b = JointAngles::new(0.3, 0.45);
        assert!((joint_distance(&a, &b) - 0.2).abs() < 1e-12);
    }

    #[test]
    #[should_panic]
    fn test_assert_joints_eq_panics() {
        assert_joints_eq(&JointAngles::new(0.0, 0.0), &JointAngles::new(0.0, 0.1), 1e-3);
    }
}
