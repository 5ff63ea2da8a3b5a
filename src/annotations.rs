use crate::kinematic_traits::JointAngles;
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Flags that can be set on frames in the output of the planner
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct FrameFlags: u32 {
        /// The frame is part of a motion and should go into the motion log.
        const RECORDABLE =  0b0000_0001;

        /// The gripper holds an object while this frame is shown.
        const CARRYING =    0b0000_0010;

        /// Repeated frame holding a fixed pose to represent a pause.
        const DWELL =       0b0000_0100;

        /// Pause at a waypoint where the object is picked up.
        const PICK =        0b0000_1000;

        /// Pause at the drop-off point where the object is released.
        const DROP =        0b0001_0000;
    }
}

/// One unit of the planner output: the joint angles to show at a single tick
/// together with the timing label and annotations.
#[derive(Clone, Copy, PartialEq)]
pub struct Frame {
    pub joints: JointAngles,

    /// Index of the interpolation step within its segment, 0 ..= step count.
    pub step: usize,

    /// Time since the start of the segment (seconds), from the velocity profile.
    pub elapsed: f64,

    /// Index of the segment within the whole queue.
    pub segment: usize,

    pub flags: FrameFlags,
}

impl Frame {
    pub fn is_carrying(&self) -> bool {
        self.flags.contains(FrameFlags::CARRYING)
    }

    pub fn is_recordable(&self) -> bool {
        self.flags.contains(FrameFlags::RECORDABLE)
    }

    pub fn is_dwell(&self) -> bool {
        self.flags.contains(FrameFlags::DWELL)
    }

    /// Non-recordable copy of this frame holding the same pose, with the given flags added.
    /// Step, time and segment are inherited.
    pub fn dwell(&self, carrying: bool, extra: FrameFlags) -> Frame {
        let mut flags = FrameFlags::DWELL | extra;
        flags.set(FrameFlags::CARRYING, carrying);
        Frame {
            flags,
            ..*self
        }
    }
}

fn flag_representation(flags: &FrameFlags) -> String {
    const FLAG_MAP: &[(FrameFlags, &str)] = &[
        (FrameFlags::RECORDABLE, "RECORDABLE"),
        (FrameFlags::CARRYING, "CARRYING"),
        (FrameFlags::DWELL, "DWELL"),
        (FrameFlags::PICK, "PICK"),
        (FrameFlags::DROP, "DROP"),
    ];

    FLAG_MAP
        .iter()
        .filter(|(flag, _)| flags.contains(*flag))
        .map(|(_, name)| *name)
        .collect::<Vec<_>>()
        .join(" | ")
}

impl fmt::Debug for FrameFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", flag_representation(self))
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [phi32, phi43] = self.joints.to_degrees();
        write!(
            formatter,
            "{}/{} {:.3} s [{:.2}, {:.2}] {}",
            self.segment,
            self.step,
            self.elapsed,
            phi32,
            phi43,
            flag_representation(&self.flags)
        )
    }
}
