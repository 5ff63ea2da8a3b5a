//! Record of the played motion, one row per recordable frame

use crate::annotations::Frame;
use crate::kinematic_traits::ArmPose;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogEntry {
    /// Interpolation step within the segment.
    pub step: usize,
    /// Elapsed time within the segment (s).
    pub time: f64,
    /// End effector position (m).
    pub x: f64,
    pub y: f64,
    /// Joint angles in degrees.
    pub phi32: f64,
    pub phi43: f64,
    pub carrying: bool,
}

impl LogEntry {
    pub fn new(frame: &Frame, pose: &ArmPose) -> Self {
        let [phi32, phi43] = frame.joints.to_degrees();
        LogEntry {
            step: frame.step,
            time: frame.elapsed,
            x: pose.effector.x,
            y: pose.effector.y,
            phi32,
            phi43,
            carrying: frame.is_carrying(),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>3} {:>6.2} s {:>6.2} {:>6.2} {:>6.1} {:>6.1}",
            self.step, self.time, self.x, self.y, self.phi32, self.phi43
        )?;
        if self.carrying {
            write!(f, " *")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MotionLog {
    entries: Vec<LogEntry>,
}

impl MotionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row for the frame. Frames that are not recordable are skipped;
    /// returns whether a row was added.
    pub fn record(&mut self, frame: &Frame, pose: &ArmPose) -> bool {
        if !frame.is_recordable() {
            return false;
        }
        self.entries.push(LogEntry::new(frame, pose));
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Text table with a header row. Carrying rows are marked with `*`.
    pub fn to_table(&self) -> String {
        let mut table = format!(
            "{:>3} {:>8} {:>6} {:>6} {:>6} {:>6}\n",
            "n", "t", "x", "y", "φ32", "φ43"
        );
        for entry in &self.entries {
            table.push_str(&entry.to_string());
            table.push('\n');
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::FrameFlags;
    use crate::kinematic_traits::{JointAngles, Point};

    fn pose() -> ArmPose {
        ArmPose {
            shoulder: Point::origin(),
            elbow: Point::new(0.6, 1.0),
            effector: Point::new(0.9, 0.4),
        }
    }

    fn frame(flags: FrameFlags) -> Frame {
        Frame {
            joints: JointAngles::from_degrees(59.6, 124.8),
            step: 4,
            elapsed: 0.5,
            segment: 0,
            flags,
        }
    }

    #[test]
    fn test_skips_non_recordable() {
        let mut log = MotionLog::new();
        assert!(log.record(&frame(FrameFlags::RECORDABLE), &pose()));
        assert!(!log.record(&frame(FrameFlags::DWELL), &pose()));
        assert_eq!(log.len(), 1);
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_entry_values() {
        let mut log = MotionLog::new();
        log.record(&frame(FrameFlags::RECORDABLE | FrameFlags::CARRYING), &pose());
        let entry = log.last().expect("One entry");
        assert_eq!(entry.step, 4);
        assert!((entry.phi32 - 59.6).abs() < 1e-9);
        assert!((entry.x - 0.9).abs() < 1e-12);
        assert!(entry.carrying);
        assert!(entry.to_string().ends_with('*'));
    }

    #[test]
    fn test_table_has_header_and_rows() {
        let mut log = MotionLog::new();
        log.record(&frame(FrameFlags::RECORDABLE), &pose());
        log.record(&frame(FrameFlags::RECORDABLE), &pose());
        let table = log.to_table();
        assert_eq!(table.lines().count(), 3);
        assert!(table.lines().next().unwrap_or_default().contains("φ32"));
        assert!(table.contains("0.50 s"));
    }
}
