//! Frame queue construction and the play state machine

use crate::annotations::{Frame, FrameFlags};
use crate::kinematic_traits::{JointAngles, Kinematics, Point};
use crate::path_plan::interpolator::Interpolator;
use crate::planning_error::StartError;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Default drop-off point of pick-and-place. Reachable by distance for the default arm,
/// but outside its joint limits.
pub const DEFAULT_DROP_OFF: (f64, f64) = (0.0, 1.5);

/// Default number of dwell frames for every pause of pick-and-place.
pub const DEFAULT_DWELL_FRAMES: usize = 10;

/// Upper bound on the length of a frame queue.
pub const MAX_QUEUED_FRAMES: usize = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Idle,
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Follow the waypoints in order.
    Normal,

    /// Visit each waypoint, pick the object up and carry it to the drop-off point.
    PickAndPlace,
}

impl Mode {
    /// Minimal number of waypoints to start a motion in this mode.
    pub fn required_waypoints(&self) -> usize {
        match self {
            Mode::Normal => 2,
            Mode::PickAndPlace => 1,
        }
    }
}

/// Settings of the pick-and-place extension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickAndPlace {
    /// Where every picked object is carried. Joint limits are not checked for this point.
    pub drop_off: Point,

    /// Number of repeated frames for the pause at the pick and at the drop-off point.
    pub dwell_frames: usize,
}

impl Default for PickAndPlace {
    fn default() -> Self {
        PickAndPlace {
            drop_off: Point::new(DEFAULT_DROP_OFF.0, DEFAULT_DROP_OFF.1),
            dwell_frames: DEFAULT_DWELL_FRAMES,
        }
    }
}

/// A picked point together with its joint solution, captured when it was picked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub position: Point,
    pub joints: JointAngles,
}

/// Build the queue of frames for the given waypoints. Nothing is built if the
/// preconditions of the mode are not met.
pub fn build_queue<K: Kinematics>(
    interpolator: &Interpolator<K>,
    waypoints: &[Waypoint],
    mode: Mode,
    steps: usize,
    pick_and_place: &PickAndPlace,
) -> Result<VecDeque<Frame>, StartError> {
    let required = mode.required_waypoints();
    if waypoints.len() < required {
        return Err(StartError::TooFewWaypoints {
            mode,
            required,
            found: waypoints.len(),
        });
    }
    if steps == 0 {
        return Err(StartError::NoSteps);
    }
    let frame_count = match mode {
        Mode::Normal => (waypoints.len() - 1).checked_mul(steps.saturating_add(1)),
        Mode::PickAndPlace => steps
            .checked_add(1)
            .and_then(|n| n.checked_add(pick_and_place.dwell_frames))
            .and_then(|n| n.checked_mul(2))
            .and_then(|n| n.checked_mul(waypoints.len())),
    };
    let frame_count = match frame_count {
        Some(count) if count <= MAX_QUEUED_FRAMES => count,
        _ => {
            return Err(StartError::TooManyFrames {
                limit: MAX_QUEUED_FRAMES,
            });
        }
    };

    let queue = match mode {
        Mode::Normal => path_queue(interpolator, waypoints, steps, frame_count),
        Mode::PickAndPlace => {
            pick_and_place_queue(interpolator, waypoints, steps, pick_and_place, frame_count)?
        }
    };
    debug!(
        "{:?}: {} waypoints, {} frames queued",
        mode,
        waypoints.len(),
        queue.len()
    );
    Ok(queue)
}

fn path_queue<K: Kinematics>(
    interpolator: &Interpolator<K>,
    waypoints: &[Waypoint],
    steps: usize,
    frame_count: usize,
) -> VecDeque<Frame> {
    let mut queue = VecDeque::with_capacity(frame_count);
    for (segment, pair) in waypoints.windows(2).enumerate() {
        queue.extend(interpolator.segment(&pair[0].joints, &pair[1].joints, steps, false, segment));
    }
    queue
}

/// Every cycle moves from the drop-off pose to the waypoint, pauses to pick up,
/// carries the object to the drop-off point and pauses to release it. The first
/// cycle also starts from the drop-off pose.
fn pick_and_place_queue<K: Kinematics>(
    interpolator: &Interpolator<K>,
    waypoints: &[Waypoint],
    steps: usize,
    settings: &PickAndPlace,
    frame_count: usize,
) -> Result<VecDeque<Frame>, StartError> {
    let drop_off = interpolator
        .kinematics
        .solve(&settings.drop_off, false)
        .map_err(|reason| StartError::DropOffUnreachable {
            drop_off: settings.drop_off,
            reason,
        })?;

    let dwell = settings.dwell_frames;
    let mut queue = VecDeque::with_capacity(frame_count);
    let mut segment = 0;

    for waypoint in waypoints {
        // Approach without load
        let approach = interpolator.segment(&drop_off, &waypoint.joints, steps, false, segment);
        let arrived = approach[approach.len() - 1];
        queue.extend(approach);
        segment += 1;

        // Grip
        queue.extend((0..dwell).map(|_| arrived.dwell(true, FrameFlags::PICK)));

        // Carry
        let carry = interpolator.segment(&waypoint.joints, &drop_off, steps, true, segment);
        let delivered = carry[carry.len() - 1];
        queue.extend(carry);
        segment += 1;

        // Release
        queue.extend((0..dwell).map(|_| delivered.dwell(false, FrameFlags::DROP)));
    }
    Ok(queue)
}

/// Owns the play state and the queue of pending frames. It has no timer: the owner
/// calls [`Sequencer::step`] once per tick.
#[derive(Debug, Clone)]
pub struct Sequencer {
    state: PlayState,
    queue: VecDeque<Frame>,
    last_angles: Option<JointAngles>,
    current: Option<Frame>,
    carrying: bool,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequencer {
    pub fn new() -> Self {
        Sequencer {
            state: PlayState::Idle,
            queue: VecDeque::new(),
            last_angles: None,
            current: None,
            carrying: false,
        }
    }

    /// Replace the pending frames and start playing them.
    pub fn load(&mut self, queue: VecDeque<Frame>) {
        self.queue = queue;
        self.current = None;
        self.state = PlayState::Running;
        debug!("Sequencer running, {} frames", self.queue.len());
    }

    /// One tick. Returns the next frame, or `None` after switching to idle when
    /// stopped or when all frames are consumed.
    pub fn step(&mut self) -> Option<Frame> {
        if self.state == PlayState::Idle || self.queue.is_empty() {
            if self.state == PlayState::Running {
                debug!("Sequencer finished");
            }
            self.state = PlayState::Idle;
            self.carrying = false;
            self.current = None;
            return None;
        }

        let frame = self.queue.pop_front()?;
        trace!("{:?}", frame);
        self.last_angles = Some(frame.joints);
        self.carrying = frame.is_carrying();
        self.current = Some(frame);
        Some(frame)
    }

    /// Switch to idle; takes effect on the next tick. Frames already returned stay
    /// returned, the remaining ones are discarded.
    pub fn stop(&mut self) {
        if self.state == PlayState::Running {
            debug!("Sequencer stopped, {} frames discarded", self.queue.len());
        }
        self.state = PlayState::Idle;
        self.queue.clear();
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlayState::Running
    }

    /// Number of frames not yet returned by [`Sequencer::step`].
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn queued_frames(&self) -> impl Iterator<Item = &Frame> {
        self.queue.iter()
    }

    /// Joint angles of the most recently returned frame. Kept after the motion ends.
    pub fn last_angles(&self) -> Option<JointAngles> {
        self.last_angles
    }

    /// The frame shown during the current tick. Cleared when the sequencer goes idle.
    pub fn current(&self) -> Option<&Frame> {
        self.current.as_ref()
    }

    pub fn is_carrying(&self) -> bool {
        self.carrying
    }
}
