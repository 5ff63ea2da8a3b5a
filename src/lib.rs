//! Rust implementation of inverse and forward kinematics, velocity-profile timing and
//! motion sequencing for a two-link planar arm.
//!
//! The arm has a fixed shoulder at the origin (A), an elbow (B) at the end of link 3 and
//! the end effector (C) at the end of link 4. The shoulder angle `phi32` is measured from
//! the X axis to link 3; the elbow angle `phi43` is the interior bend between link 3 and
//! link 4, so the absolute direction of link 4 is `phi32 - phi43`.
//!
//! # Features
//!
//! - Closed form inverse kinematics. Only the elbow-up solution is ever returned.
//! - Joint limits in degrees, checked with a small tolerance; limit checking can be
//!   bypassed for special targets such as the drop-off point of pick-and-place.
//! - Timing of every interpolated step with a trapezoidal velocity profile that
//!   degenerates into a triangular one for short moves.
//! - A sequencer that turns recorded waypoints into a queue of frames, either as a plain
//!   path or as pick-and-place cycles with dwell pauses and a "carrying" flag.
//! - [`session::ArmSession`], a single object to drive from a user interface: pick
//!   points, preview targets, start and stop, and pull one frame per timer tick.
//! - Arm parameters can be read from YAML (feature `allow_filesystem`).
//!
//! # Example
//!
//! ```
//! use rs_planar_arm::session::ArmSession;
//! use rs_planar_arm::path_plan::sequencer::Mode;
//!
//! let mut session = ArmSession::default();
//! session.try_add_waypoint(0.9, 0.4).expect("reachable");
//! session.try_add_waypoint(1.0, 0.2).expect("reachable");
//! let frames = session.start(Mode::Normal, 10).expect("enough waypoints");
//! assert_eq!(frames, 11);
//! while let Some(frame) = session.tick() {
//!     let pose = session.forward(&frame.joints);
//!     println!("{:.2} s: {:.3}, {:.3}", frame.elapsed, pose.effector.x, pose.effector.y);
//! }
//! ```

pub mod parameters;
pub mod parameters_robots;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;

pub mod parameter_error;
pub mod planning_error;

#[path = "utils/utils.rs"]
pub mod utils;
pub mod kinematic_traits;
pub mod kinematics_impl;

pub mod constraints;

pub mod workspace;

pub mod annotations;

pub mod path_plan;

pub mod motion_log;

pub mod session;

#[cfg(test)]
mod tests;
