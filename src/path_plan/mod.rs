//! Motion planning: velocity profile timing, joint space interpolation and sequencing

pub mod velocity_profile;

pub mod interpolator;

pub mod sequencer;
