//! LRU (Least Recently Used) replacement policy.

use std::collections::HashMap;

use crate::common::PageId;
use crate::sim::replacer::Replacer;
use crate::sim::FrameSet;

/// Evicts the resident page whose last reference is furthest in the past.
///
/// Timestamps are positions in the reference sequence, so they are unique
/// per run. A resident page with no recorded reference sorts as `None`,
/// below every `Some(position)`, and is evicted first.
#[derive(Debug, Default)]
pub struct LruReplacer {
    /// Page -> position of its most recent reference.
    last_used: HashMap<PageId, usize>,
}

impl LruReplacer {
    /// Create a new LRU replacer.
    pub fn new() -> Self {
        Self {
            last_used: HashMap::new(),
        }
    }

    /// Position of the most recent reference to `page`, if any.
    pub fn last_used(&self, page: PageId) -> Option<usize> {
        self.last_used.get(&page).copied()
    }
}

impl Replacer for LruReplacer {
    fn name(&self) -> &'static str {
        "LRU"
    }

    fn record_access(&mut self, page: PageId, position: usize) {
        self.last_used.insert(page, position);
    }

    fn select_victim(&mut self, frames: &FrameSet, _position: usize, _sequence: &[PageId]) -> usize {
        // min_by_key keeps the first of equal minima, i.e. the earliest slot.
        frames
            .iter()
            .enumerate()
            .min_by_key(|&(_, page)| self.last_used(page))
            .map(|(slot, _)| slot)
            .unwrap_or(0)
    }
}
