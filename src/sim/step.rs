//! Per-reference step records.

use std::fmt;

use crate::common::PageId;

/// Whether a reference found its page resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The page was already resident.
    Hit,
    /// The page had to be loaded (a page fault).
    Miss,
}

impl Outcome {
    #[inline]
    pub fn is_hit(self) -> bool {
        self == Outcome::Hit
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Hit => write!(f, "Hit"),
            Outcome::Miss => write!(f, "Miss"),
        }
    }
}

/// What happened when one reference was processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// The referenced page.
    pub page: PageId,

    /// Frame contents after processing the reference, in slot order.
    pub frames: Vec<PageId>,

    /// Hit or miss.
    pub outcome: Outcome,

    /// Page replaced to make room, if this miss evicted one.
    pub evicted: Option<PageId>,
}
