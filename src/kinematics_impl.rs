use crate::constraints::JointLimits;
use crate::kinematic_traits::{ArmPose, IkFailure, JointAngles, Kinematics, Point};
use crate::parameters::Parameters;
use std::f64::consts::PI;
use tracing::debug;

/// Closed form kinematics of the two-link planar arm.
#[derive(Debug, Clone)]
pub struct PlanarKinematics {
    parameters: Parameters,
    limits: JointLimits,
}

impl PlanarKinematics {
    /// Creates a new `PlanarKinematics` instance with the given parameters. Parameters
    /// are taken as they are, call [`Parameters::validate`] first if they come from outside.
    pub fn new(parameters: Parameters) -> Self {
        PlanarKinematics {
            limits: parameters.limits(),
            parameters,
        }
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Joint limits in radians, recomputed from the degree values of the parameters.
    pub fn limits(&self) -> &JointLimits {
        &self.limits
    }
}

/// acos that does not produce NaN when rounding pushes the cosine slightly outside [-1, 1]
/// at the border of the reachable region.
fn clamped_acos(cosine: f64) -> f64 {
    cosine.clamp(-1.0, 1.0).acos()
}

impl Kinematics for PlanarKinematics {
    fn solve(&self, target: &Point, check_limits: bool) -> Result<JointAngles, IkFailure> {
        let l3 = self.parameters.l3;
        let l4 = self.parameters.l4;

        if !target.x.is_finite() || !target.y.is_finite() {
            debug!("IK rejected ({}, {}): not a finite point", target.x, target.y);
            return Err(IkFailure::NonFinite);
        }

        let dist_sq = target.x * target.x + target.y * target.y;
        let dist = dist_sq.sqrt();

        if dist == 0.0 {
            debug!("IK rejected ({:.4}, {:.4}): at the shoulder", target.x, target.y);
            return Err(IkFailure::AtOrigin);
        }
        let reach = self.parameters.reach();
        if dist > reach {
            debug!("IK rejected ({:.4}, {:.4}): beyond reach", target.x, target.y);
            return Err(IkFailure::TooFar { distance: dist, reach });
        }
        let inner_radius = self.parameters.inner_radius();
        if dist < inner_radius {
            debug!("IK rejected ({:.4}, {:.4}): inside the inner hole", target.x, target.y);
            return Err(IkFailure::TooClose {
                distance: dist,
                inner_radius,
            });
        }

        // Interior angle at the elbow, law of cosines
        let gamma = clamped_acos((l3 * l3 + l4 * l4 - dist_sq) / (2.0 * l3 * l4));
        let phi43 = PI - gamma;

        // Direction to the target and the angle between it and link 3
        let beta = target.y.atan2(target.x);
        let alpha = clamped_acos((l3 * l3 + dist_sq - l4 * l4) / (2.0 * l3 * dist));

        // Elbow up only. The elbow down branch (beta - alpha) is never produced.
        let phi32 = beta + alpha;
        let joints = JointAngles::new(phi32, phi43);

        if check_limits {
            if let Some((joint, angle)) = self.limits.violation(&joints) {
                debug!(
                    "IK rejected ({:.4}, {:.4}): {} = {:.2}° outside limits",
                    target.x,
                    target.y,
                    joint,
                    angle.to_degrees()
                );
                return Err(IkFailure::JointLimit { joint, angle });
            }
        }
        Ok(joints)
    }

    fn forward(&self, joints: &JointAngles) -> ArmPose {
        let l3 = self.parameters.l3;
        let l4 = self.parameters.l4;

        let shoulder = Point::origin();
        let elbow = Point::new(l3 * joints.phi32.cos(), l3 * joints.phi32.sin());

        // Elbow bends clockwise from link 3
        let direction = joints.link4_direction();
        let effector = Point::new(
            elbow.x + l4 * direction.cos(),
            elbow.y + l4 * direction.sin(),
        );

        ArmPose {
            shoulder,
            elbow,
            effector,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematic_traits::Joint;
    use crate::utils::assert_joints_eq;
    use nalgebra::distance;

    fn kinematics() -> PlanarKinematics {
        PlanarKinematics::new(Parameters::default())
    }

    #[test]
    fn test_forward_stretched() {
        let pose = kinematics().forward(&JointAngles::new(0.0, 0.0));
        assert_eq!(pose.shoulder, Point::origin());
        assert!(distance(&pose.elbow, &Point::new(1.2, 0.0)) < 1e-12);
        assert!(distance(&pose.effector, &Point::new(1.9, 0.0)) < 1e-12);
    }

    #[test]
    fn test_forward_right_angle_elbow() {
        // Link 3 straight up, link 4 bent 90° clockwise points along +X
        let pose = kinematics().forward(&JointAngles::from_degrees(90.0, 90.0));
        assert!(distance(&pose.elbow, &Point::new(0.0, 1.2)) < 1e-12);
        assert!(distance(&pose.effector, &Point::new(0.7, 1.2)) < 1e-12);
    }

    #[test]
    fn test_inverse_reproduces_target() {
        let robot = kinematics();
        let target = Point::new(0.9, 0.4);
        let joints = robot.inverse(&target).expect("Target should be reachable");
        let pose = robot.forward(&joints);
        assert!(distance(&pose.effector, &target) < 1e-9);
        assert!(robot.limits().compliant(&joints));
    }

    #[test]
    fn test_elbow_up_branch() {
        let robot = kinematics();
        let target = Point::new(1.3, 0.9);
        let joints = robot.inverse(&target).expect("Target should be reachable");
        // Shoulder points above the target direction, elbow above the line to the target
        assert!(joints.phi32 > target.y.atan2(target.x));
        let pose = robot.forward(&joints);
        let cross = target.x * pose.elbow.y - target.y * pose.elbow.x;
        assert!(cross > 0.0);
    }

    #[test]
    fn test_origin_rejected() {
        assert_eq!(
            kinematics().solve(&Point::origin(), false),
            Err(IkFailure::AtOrigin)
        );
    }

    #[test]
    fn test_too_far_and_too_close() {
        let robot = kinematics();
        assert!(matches!(
            robot.solve(&Point::new(5.0, 5.0), false),
            Err(IkFailure::TooFar { .. })
        ));
        assert!(matches!(
            robot.solve(&Point::new(0.2, 0.2), false),
            Err(IkFailure::TooClose { .. })
        ));
    }

    #[test]
    fn test_non_finite_target_rejected() {
        let robot = kinematics();
        for target in [
            Point::new(f64::NAN, 1.0),
            Point::new(1.0, f64::INFINITY),
            Point::new(f64::NEG_INFINITY, f64::NAN),
        ] {
            assert_eq!(robot.solve(&target, false), Err(IkFailure::NonFinite));
            assert!(robot.inverse(&target).is_none());
        }
    }

    #[test]
    fn test_limits_checked_only_when_asked() {
        let robot = kinematics();
        // Straight above the shoulder needs phi32 well above 80°
        let target = Point::new(0.0, 1.5);
        match robot.solve(&target, true) {
            Err(IkFailure::JointLimit { joint, .. }) => assert_eq!(joint, Joint::Shoulder),
            other => panic!("Unexpected solution {:?}", other),
        }
        let joints = robot
            .inverse_unconstrained(&target)
            .expect("Reachable with limits bypassed");
        assert!(distance(&robot.forward(&joints).effector, &target) < 1e-9);
    }

    #[test]
    fn test_round_trip_equal_links() {
        let robot = PlanarKinematics::new(Parameters::equal_links());
        let joints = JointAngles::from_degrees(45.0, 100.0);
        let target = robot.forward(&joints).effector;
        let solved = robot.inverse(&target).expect("Round trip target is reachable");
        assert_joints_eq(&joints, &solved, 1e-9);
    }
}
