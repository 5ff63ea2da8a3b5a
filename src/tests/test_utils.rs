//! Shared helpers for the integration style tests

use anyhow::{Context, Result};

use crate::annotations::Frame;
use crate::kinematic_traits::{Kinematics, Point};
use crate::kinematics_impl::PlanarKinematics;
use crate::parameters::Parameters;
use crate::session::ArmSession;

/// Points of the reference arm that are reachable within its joint limits.
pub(crate) const REACHABLE: [(f64, f64); 3] = [(0.9, 0.4), (1.0, 0.2), (1.3, 0.9)];

/// Session on the given parameters with all points added as waypoints.
pub(crate) fn session_with(parameters: Parameters, points: &[(f64, f64)]) -> Result<ArmSession> {
    let mut session = ArmSession::new(parameters).context("Parameters must be valid")?;
    for &(x, y) in points {
        session
            .try_add_waypoint(x, y)
            .with_context(|| format!("Waypoint ({}, {}) must be accepted", x, y))?;
    }
    Ok(session)
}

/// Session on the reference arm.
pub(crate) fn reference_session(points: &[(f64, f64)]) -> Result<ArmSession> {
    session_with(Parameters::default(), points)
}

/// Tick until the sequencer goes idle, collecting every frame shown.
pub(crate) fn play(session: &mut ArmSession) -> Vec<Frame> {
    let mut frames = Vec::new();
    while let Some(frame) = session.tick() {
        frames.push(frame);
    }
    frames
}

/// End effector position for the frame.
pub(crate) fn effector(robot: &PlanarKinematics, frame: &Frame) -> Point {
    robot.forward(&frame.joints).effector
}
