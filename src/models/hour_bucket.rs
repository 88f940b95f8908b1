use std::fmt;

use chrono::Timelike;
use serde::{Serialize, Serializer};

/// One-hour activity window, labelled `"HH-HH+1"`
///
/// The last bucket of the day wraps midnight and is labelled `"23-00"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourBucket(u8);

impl HourBucket {
    pub const COUNT: usize = 24;

    /// Bucket starting at `hour`; returns `None` for hours outside 0–23
    pub fn new(hour: u32) -> Option<Self> {
        u8::try_from(hour).ok().filter(|h| usize::from(*h) < Self::COUNT).map(Self)
    }

    /// Bucket containing the hour of `time`
    pub fn of(time: &impl Timelike) -> Self {
        // Timelike::hour() is always 0..=23
        Self(time.hour() as u8)
    }

    pub fn hour(self) -> u32 {
        u32::from(self.0)
    }

    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// All 24 buckets in order, `00-01` through `23-00`
    pub fn all() -> impl Iterator<Item = HourBucket> {
        (0..Self::COUNT as u8).map(Self)
    }

    pub fn label(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HourBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = (self.0 + 1) % Self::COUNT as u8;
        write!(f, "{:02}-{:02}", self.0, end)
    }
}

impl Serialize for HourBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
