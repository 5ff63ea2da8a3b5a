use crate::annotations::{Frame, FrameFlags};
use crate::kinematic_traits::{JointAngles, Kinematics};
use crate::parameters::Parameters;
use crate::path_plan::velocity_profile::VelocityProfile;
use nalgebra::distance;

/// Linear interpolation in joint space, each joint independently. `t` outside [0, 1]
/// returns the nearest end.
pub fn interpolate_joints(start: &JointAngles, end: &JointAngles, t: f64) -> JointAngles {
    if t <= 0.0 {
        return *start;
    } else if t >= 1.0 {
        return *end;
    }
    JointAngles::new(
        start.phi32 + (end.phi32 - start.phi32) * t,
        start.phi43 + (end.phi43 - start.phi43) * t,
    )
}

/// Generates timed segments between two joint configurations.
///
/// The poses are interpolated linearly in joint space, while the time label of every
/// step comes from the velocity profile over the Cartesian distance between the two
/// end effector positions. The label is therefore an annotation: the end effector does
/// not really move along a straight line with this timing.
pub struct Interpolator<'a, K: Kinematics> {
    pub kinematics: &'a K,

    /// Maximal end effector velocity (m/s).
    pub max_velocity: f64,

    /// Time to reach the maximal velocity (s).
    pub accel_time: f64,
}

impl<'a, K: Kinematics> Interpolator<'a, K> {
    pub fn new(kinematics: &'a K, max_velocity: f64, accel_time: f64) -> Self {
        Interpolator {
            kinematics,
            max_velocity,
            accel_time,
        }
    }

    /// Interpolator taking the motion limits from the arm parameters.
    pub fn with_parameters(kinematics: &'a K, parameters: &Parameters) -> Self {
        Self::new(kinematics, parameters.max_velocity, parameters.accel_time)
    }

    /// Cartesian distance between the end effector positions of the two configurations.
    pub fn effector_distance(&self, start: &JointAngles, end: &JointAngles) -> f64 {
        let from = self.kinematics.forward(start).effector;
        let to = self.kinematics.forward(end).effector;
        distance(&from, &to)
    }

    pub fn profile(&self, start: &JointAngles, end: &JointAngles) -> VelocityProfile {
        VelocityProfile::new(
            self.effector_distance(start, end),
            self.max_velocity,
            self.accel_time,
        )
    }

    /// Produce `step_count + 1` recordable frames from `start` to `end`, both included.
    /// Elapsed time starts at zero. All frames carry the `holding` state unchanged.
    /// A step count of zero is treated as one.
    pub fn segment(
        &self,
        start: &JointAngles,
        end: &JointAngles,
        step_count: usize,
        holding: bool,
        segment: usize,
    ) -> Vec<Frame> {
        let steps = step_count.max(1);
        let profile = self.profile(start, end);

        let mut flags = FrameFlags::RECORDABLE;
        flags.set(FrameFlags::CARRYING, holding);

        (0..=steps)
            .map(|j| {
                let t = j as f64 / steps as f64;
                Frame {
                    joints: interpolate_joints(start, end, t),
                    step: j,
                    elapsed: profile.time_at(profile.distance * t),
                    segment,
                    flags,
                }
            })
            .collect()
    }
}
