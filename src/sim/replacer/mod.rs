//! Eviction policy implementations (replacers).
//!
//! A replacer never touches the frame set itself. The [`Simulator`] asks it
//! which slot to overwrite when a miss finds every frame occupied, and
//! reports every reference to it afterwards.
//!
//! Implements:
//! - [`FifoReplacer`] - insertion order, via a rotating cursor
//! - [`LruReplacer`] - least recently referenced page
//! - [`OptimalReplacer`] - page referenced farthest in the future (offline)
//!
//! [`Simulator`]: crate::sim::Simulator

mod fifo;
mod lru;
mod optimal;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

use crate::common::PageId;
use crate::sim::FrameSet;

/// An eviction policy driven by the shared simulation protocol.
///
/// Ties between equally good victims are always broken by slot order: the
/// first candidate in the frame set wins.
pub trait Replacer {
    /// Display name of the policy (used in results and reports).
    fn name(&self) -> &'static str;

    /// Record that `page` was referenced at `position` in the sequence.
    ///
    /// Called after every reference, hit or miss, once the frame set has
    /// been updated.
    fn record_access(&mut self, _page: PageId, _position: usize) {}

    /// Select the slot to overwrite for the reference at `position`.
    ///
    /// Only called when `frames` is full. `sequence` is the whole reference
    /// sequence; online policies ignore everything after `position`. A slot
    /// outside the occupied frames is logged and replaced by slot 0.
    fn select_victim(&mut self, frames: &FrameSet, position: usize, sequence: &[PageId]) -> usize;
}
