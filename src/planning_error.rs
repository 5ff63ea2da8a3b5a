//! Errors reported when waypoints or motion requests are rejected

use crate::kinematic_traits::{IkFailure, Point};
use crate::path_plan::sequencer::Mode;
use std::fmt;

/// Reason why a picked point did not become a waypoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaypointError {
    /// Input is ignored while a motion is playing.
    Busy,
    Unreachable { target: Point, reason: IkFailure },
}

impl fmt::Display for WaypointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaypointError::Busy => write!(f, "Motion in progress, waypoints cannot be added"),
            WaypointError::Unreachable { target, reason } => write!(
                f,
                "Point ({:.3}, {:.3}) is outside the workspace: {}",
                target.x, target.y, reason
            ),
        }
    }
}

impl std::error::Error for WaypointError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WaypointError::Unreachable { reason, .. } => Some(reason),
            WaypointError::Busy => None,
        }
    }
}

/// Reason why a motion could not be started. A rejected start leaves everything as it was.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StartError {
    TooFewWaypoints {
        mode: Mode,
        required: usize,
        found: usize,
    },

    /// At least one interpolation step per segment is needed.
    NoSteps,

    /// The drop-off point cannot be reached even with joint limits bypassed.
    DropOffUnreachable { drop_off: Point, reason: IkFailure },

    /// Step count and dwell frames ask for a longer queue than allowed.
    TooManyFrames { limit: usize },
}

impl fmt::Display for StartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartError::TooFewWaypoints {
                mode,
                required,
                found,
            } => write!(
                f,
                "{:?} mode needs at least {} waypoint(s), {} recorded",
                mode, required, found
            ),
            StartError::NoSteps => write!(f, "Step count must be at least 1"),
            StartError::DropOffUnreachable { drop_off, reason } => write!(
                f,
                "Drop-off point ({:.3}, {:.3}) is unreachable: {}",
                drop_off.x, drop_off.y, reason
            ),
            StartError::TooManyFrames { limit } => {
                write!(f, "Motion would need more than {} frames", limit)
            }
        }
    }
}

impl std::error::Error for StartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartError::DropOffUnreachable { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
