//! FIFO (First-In-First-Out) replacement policy.

use crate::common::PageId;
use crate::sim::replacer::Replacer;
use crate::sim::FrameSet;

/// Evicts pages in the order they were loaded.
///
/// Slots fill left to right, so once the frame set is full the oldest page
/// sits at slot 0, the next oldest at slot 1, and so on. A cursor walking
/// the slots round-robin therefore always points at the page that has been
/// resident longest. Hits never move the cursor: re-referencing a page does
/// not make it any younger.
#[derive(Debug, Default)]
pub struct FifoReplacer {
    /// Next slot to overwrite.
    cursor: usize,
}

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        Self { cursor: 0 }
    }
}

impl Replacer for FifoReplacer {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn select_victim(&mut self, frames: &FrameSet, _position: usize, _sequence: &[PageId]) -> usize {
        let slot = self.cursor;
        self.cursor = (self.cursor + 1) % frames.capacity();
        slot
    }
}
