//! Timing of a straight move with a trapezoidal velocity profile.

/// Velocity used when the configured maximal velocity is not positive (m/s).
pub const FALLBACK_VELOCITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    /// The move is too short to reach the cruise velocity: accelerate to the middle,
    /// then decelerate.
    Triangular,

    /// Accelerate, cruise at the maximal velocity, decelerate.
    Trapezoidal,
}

/// Trapezoidal velocity profile over a known distance. Answers how long it takes to
/// cover the first `d` meters of the move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityProfile {
    /// Total distance (m).
    pub distance: f64,
    /// Cruise velocity (m/s).
    pub velocity: f64,
    /// Acceleration (m/s²).
    pub accel: f64,
    /// Duration of the acceleration phase of the full profile (s).
    pub accel_time: f64,
    /// Distance covered while accelerating to the cruise velocity (m).
    pub accel_distance: f64,
    pub kind: ProfileKind,
}

impl VelocityProfile {
    /// Profile for the given distance, maximal velocity and time to reach it.
    /// A non-positive velocity is replaced by [`FALLBACK_VELOCITY`]; a non-positive
    /// acceleration time means the velocity is reached instantly. A non-finite distance
    /// gives a zero length profile.
    pub fn new(distance: f64, max_velocity: f64, accel_time: f64) -> Self {
        let velocity = if max_velocity > 0.0 {
            max_velocity
        } else {
            FALLBACK_VELOCITY
        };
        let accel_time = accel_time.max(0.0);
        let accel = if accel_time > 0.0 {
            velocity / accel_time
        } else {
            velocity
        };
        let accel_distance = 0.5 * accel * accel_time * accel_time;
        // A distance that cannot be timed is treated as no move at all
        let distance = if distance.is_finite() { distance.abs() } else { 0.0 };

        let kind = if distance < 2.0 * accel_distance {
            ProfileKind::Triangular
        } else {
            ProfileKind::Trapezoidal
        };

        VelocityProfile {
            distance,
            velocity,
            accel,
            accel_time,
            accel_distance,
            kind,
        }
    }

    /// Time when the velocity peaks. For the triangular profile this is the moment of
    /// switching from acceleration to deceleration, for the trapezoidal one the middle
    /// of the cruise phase.
    pub fn peak_time(&self) -> f64 {
        match self.kind {
            ProfileKind::Triangular => (self.distance / self.accel).sqrt(),
            ProfileKind::Trapezoidal => self.total_time() / 2.0,
        }
    }

    /// Duration of the whole move.
    pub fn total_time(&self) -> f64 {
        match self.kind {
            ProfileKind::Triangular => 2.0 * self.peak_time(),
            ProfileKind::Trapezoidal => {
                2.0 * self.accel_time + self.cruise_distance() / self.velocity
            }
        }
    }

    /// Distance covered at cruise velocity, zero for the triangular profile.
    pub fn cruise_distance(&self) -> f64 {
        match self.kind {
            ProfileKind::Triangular => 0.0,
            ProfileKind::Trapezoidal => self.distance - 2.0 * self.accel_distance,
        }
    }

    /// Time needed to cover the first `covered` meters, obtained by inverting
    /// distance over time in each phase. Clamped to `[0, distance]`.
    pub fn time_at(&self, covered: f64) -> f64 {
        let covered = covered.clamp(0.0, self.distance);
        let remaining = (self.distance - covered).max(0.0);

        match self.kind {
            ProfileKind::Triangular => {
                if covered <= self.distance / 2.0 {
                    (2.0 * covered / self.accel).sqrt()
                } else {
                    2.0 * self.peak_time() - (2.0 * remaining / self.accel).sqrt()
                }
            }
            ProfileKind::Trapezoidal => {
                if covered <= self.accel_distance {
                    (2.0 * covered / self.accel).sqrt()
                } else if covered <= self.accel_distance + self.cruise_distance() {
                    self.accel_time + (covered - self.accel_distance) / self.velocity
                } else {
                    self.total_time() - (2.0 * remaining / self.accel).sqrt()
                }
            }
        }
    }
}
