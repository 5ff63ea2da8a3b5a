//! The arm as seen by a user interface: configuration, picked waypoints, live preview,
//! playback and the motion log in one place.
//!
//! The session has no timer and no threads. The interface calls [`ArmSession::tick`]
//! from its own periodic timer ([`DEFAULT_TICK`] is a good cadence) and draws whatever
//! [`ArmSession::display_angles`] returns. While a motion plays, pointer input is
//! ignored: waypoints cannot be added and the live preview is off.

use crate::annotations::Frame;
use crate::constraints::JointLimits;
use crate::kinematic_traits::{ArmPose, JointAngles, Kinematics, Point};
use crate::kinematics_impl::PlanarKinematics;
use crate::motion_log::MotionLog;
use crate::parameter_error::ParameterError;
use crate::parameters::Parameters;
use crate::path_plan::interpolator::Interpolator;
use crate::path_plan::sequencer::{build_queue, Mode, PickAndPlace, PlayState, Sequencer, Waypoint};
use crate::planning_error::{StartError, WaypointError};
use crate::workspace::{workspace_boundary, workspace_corners, WorkspaceCorners, DEFAULT_STEP_DEG};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Recommended interval between two ticks.
pub const DEFAULT_TICK: Duration = Duration::from_millis(50);

/// Default number of interpolation steps per segment.
pub const DEFAULT_STEPS: usize = 12;

#[derive(Debug, Clone)]
pub struct ArmSession {
    kinematics: PlanarKinematics,
    waypoints: Vec<Waypoint>,
    sequencer: Sequencer,
    pick_and_place: PickAndPlace,
    probe: Option<JointAngles>,
    log: MotionLog,
}

impl Default for ArmSession {
    fn default() -> Self {
        ArmSession::with_kinematics(PlanarKinematics::new(Parameters::default()))
    }
}

impl ArmSession {
    /// New session with validated parameters.
    pub fn new(parameters: Parameters) -> Result<Self, ParameterError> {
        parameters.validate()?;
        Ok(ArmSession::with_kinematics(PlanarKinematics::new(parameters)))
    }

    fn with_kinematics(kinematics: PlanarKinematics) -> Self {
        ArmSession {
            kinematics,
            waypoints: Vec::new(),
            sequencer: Sequencer::new(),
            pick_and_place: PickAndPlace::default(),
            probe: None,
            log: MotionLog::new(),
        }
    }

    /// Replace the arm configuration. Invalid values are rejected and the previous
    /// configuration stays in effect. Waypoints keep the joint solutions they were
    /// captured with.
    #[allow(clippy::too_many_arguments)]
    pub fn configure(
        &mut self,
        l3: f64,
        l4: f64,
        phi32_min: f64,
        phi32_max: f64,
        phi43_min: f64,
        phi43_max: f64,
        accel_time: f64,
        max_velocity: f64,
    ) -> Result<(), ParameterError> {
        self.configure_parameters(Parameters {
            l3,
            l4,
            phi32_min,
            phi32_max,
            phi43_min,
            phi43_max,
            accel_time,
            max_velocity,
        })
    }

    pub fn configure_parameters(&mut self, parameters: Parameters) -> Result<(), ParameterError> {
        if let Err(err) = parameters.validate() {
            warn!("Configuration rejected: {}", err);
            return Err(err);
        }
        self.kinematics = PlanarKinematics::new(parameters);
        debug!("Configured {:?}", parameters);
        Ok(())
    }

    pub fn set_pick_and_place(&mut self, settings: PickAndPlace) {
        self.pick_and_place = settings;
    }

    pub fn pick_and_place(&self) -> &PickAndPlace {
        &self.pick_and_place
    }

    /// Record the point as the next waypoint if it is reachable within joint limits.
    pub fn try_add_waypoint(&mut self, x: f64, y: f64) -> Result<&Waypoint, WaypointError> {
        if self.sequencer.is_running() {
            return Err(WaypointError::Busy);
        }
        let target = Point::new(x, y);
        let joints = self
            .kinematics
            .solve(&target, true)
            .map_err(|reason| WaypointError::Unreachable { target, reason })?;

        // The arm jumps to the picked point rather than the preview
        self.probe = None;
        self.waypoints.push(Waypoint {
            position: target,
            joints,
        });
        debug!("Waypoint {} at ({:.3}, {:.3})", self.waypoints.len(), x, y);
        Ok(&self.waypoints[self.waypoints.len() - 1])
    }

    /// Pointer-following preview. Remembers the solution for [`ArmSession::display_angles`]
    /// but never touches the waypoints. Always `None` while a motion plays.
    pub fn live_probe(&mut self, x: f64, y: f64) -> Option<JointAngles> {
        self.probe = if self.sequencer.is_running() {
            None
        } else {
            self.kinematics.inverse(&Point::new(x, y))
        };
        self.probe
    }

    pub fn clear_probe(&mut self) {
        self.probe = None;
    }

    pub fn clear_waypoints(&mut self) {
        self.waypoints.clear();
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Build the frame queue and start playing. Returns the number of queued frames.
    /// On success the motion log is cleared; on failure nothing changes.
    pub fn start(&mut self, mode: Mode, steps: usize) -> Result<usize, StartError> {
        let interpolator = Interpolator::with_parameters(&self.kinematics, self.kinematics.parameters());
        let queue = match build_queue(&interpolator, &self.waypoints, mode, steps, &self.pick_and_place) {
            Ok(queue) => queue,
            Err(err) => {
                warn!("Start rejected: {}", err);
                return Err(err);
            }
        };

        let count = queue.len();
        self.log.clear();
        self.probe = None;
        self.sequencer.load(queue);
        info!("Started {:?} motion, {} frames", mode, count);
        Ok(count)
    }

    pub fn stop(&mut self) {
        self.sequencer.stop();
    }

    /// Advance by one frame. Recordable frames are appended to the motion log.
    pub fn tick(&mut self) -> Option<Frame> {
        let frame = self.sequencer.step()?;
        let pose = self.kinematics.forward(&frame.joints);
        self.log.record(&frame, &pose);
        Some(frame)
    }

    /// Pose to draw now. While playing this is the current frame, or the first queued
    /// one before the first tick. Otherwise the live preview, the last waypoint, the pose
    /// where the last motion ended, or the lower joint limits, in this order.
    pub fn display_angles(&self) -> JointAngles {
        let shown = match self.sequencer.state() {
            PlayState::Running => self
                .sequencer
                .current()
                .or_else(|| self.sequencer.queued_frames().next())
                .map(|frame| frame.joints)
                .or(self.sequencer.last_angles()),
            PlayState::Idle => self
                .probe
                .or_else(|| self.waypoints.last().map(|w| w.joints))
                .or(self.sequencer.last_angles()),
        };
        shown.unwrap_or_else(|| self.kinematics.limits().lower())
    }

    /// Whether the shown pose is a preview rather than a recorded or played one.
    pub fn is_previewing(&self) -> bool {
        !self.sequencer.is_running() && self.probe.is_some()
    }

    pub fn forward(&self, joints: &JointAngles) -> ArmPose {
        self.kinematics.forward(joints)
    }

    pub fn inverse(&self, x: f64, y: f64) -> Option<JointAngles> {
        self.kinematics.inverse(&Point::new(x, y))
    }

    pub fn parameters(&self) -> &Parameters {
        self.kinematics.parameters()
    }

    pub fn limits(&self) -> &JointLimits {
        self.kinematics.limits()
    }

    pub fn kinematics(&self) -> &PlanarKinematics {
        &self.kinematics
    }

    pub fn play_state(&self) -> PlayState {
        self.sequencer.state()
    }

    pub fn is_carrying(&self) -> bool {
        self.sequencer.is_carrying()
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn queued_frames(&self) -> impl Iterator<Item = &Frame> {
        self.sequencer.queued_frames()
    }

    pub fn log(&self) -> &MotionLog {
        &self.log
    }

    pub fn workspace_boundary(&self) -> Vec<Point> {
        workspace_boundary(&self.kinematics, self.kinematics.limits(), DEFAULT_STEP_DEG)
    }

    pub fn workspace_corners(&self) -> WorkspaceCorners {
        workspace_corners(&self.kinematics, self.kinematics.limits())
    }
}
