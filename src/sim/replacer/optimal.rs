//! Optimal (Belady's MIN) replacement policy.
//!
//! Needs the whole reference sequence up front: it is an offline reference
//! point that no real pager can implement, used to judge the online policies.

use std::cmp::Reverse;

use crate::common::PageId;
use crate::sim::replacer::Replacer;
use crate::sim::FrameSet;

/// When a resident page is referenced next.
///
/// `Never` orders above every `At`, so a page with no future reference is
/// always the farthest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NextUse {
    /// Referenced again at this sequence position.
    At(usize),
    /// Not referenced again.
    Never,
}

impl NextUse {
    /// Next reference to `page` strictly after `position`.
    pub fn find(sequence: &[PageId], position: usize, page: PageId) -> Self {
        let start = position.saturating_add(1);
        sequence
            .get(start..)
            .and_then(|rest| rest.iter().position(|&p| p == page))
            .map_or(NextUse::Never, |offset| NextUse::At(start + offset))
    }
}

/// Evicts the resident page whose next reference is farthest away.
#[derive(Debug, Default)]
pub struct OptimalReplacer;

impl OptimalReplacer {
    /// Create a new Optimal replacer.
    pub fn new() -> Self {
        OptimalReplacer
    }
}

impl Replacer for OptimalReplacer {
    fn name(&self) -> &'static str {
        "Optimal"
    }

    fn select_victim(&mut self, frames: &FrameSet, position: usize, sequence: &[PageId]) -> usize {
        // Minimum of Reverse(next use) == first maximum in slot order.
        frames
            .iter()
            .enumerate()
            .min_by_key(|&(_, page)| Reverse(NextUse::find(sequence, position, page)))
            .map(|(slot, _)| slot)
            .unwrap_or(0)
    }
}
