//! FrameSet - the resident pages of a simulation.
//!
//! A [`FrameSet`] is a fixed-capacity row of frame slots. Slots fill left to
//! right while there is free capacity; once full, a replacer picks the slot
//! to overwrite. Slot order is what FIFO's cursor walks over. For every other
//! purpose the frame set is just a set with a membership test.

use crate::common::PageId;

/// The frames of a simulation run.
///
/// Owned exclusively by one [`Simulator`](crate::sim::Simulator) and dropped
/// with it. Replacers only ever see it by shared reference.
#[derive(Debug, Clone)]
pub struct FrameSet {
    /// Resident pages in slot order. `slots.len() <= capacity` always.
    slots: Vec<PageId>,

    /// Number of frames (immutable after construction).
    capacity: usize,
}

impl FrameSet {
    /// Create an empty frame set with `capacity` frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            // Grows on load; `capacity` may far exceed the pages ever referenced.
            slots: Vec::new(),
            capacity,
        }
    }

    /// Whether `page` is resident.
    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.slots.contains(&page)
    }

    /// Number of occupied frames.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Total number of frames.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether every frame is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Load `page` into the next free frame.
    ///
    /// # Panics
    /// Panics if the frame set is full; callers must evict instead.
    pub(crate) fn load(&mut self, page: PageId) {
        assert!(!self.is_full(), "load into a full frame set");
        self.slots.push(page);
    }

    /// Overwrite `slot` with `page`, returning the evicted page.
    ///
    /// # Panics
    /// Panics if `slot` is not occupied.
    pub(crate) fn replace(&mut self, slot: usize, page: PageId) -> PageId {
        std::mem::replace(&mut self.slots[slot], page)
    }

    /// Iterate resident pages in slot order.
    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.slots.iter().copied()
    }

    /// Resident pages in slot order.
    #[inline]
    pub fn as_slice(&self) -> &[PageId] {
        &self.slots
    }

    /// An owned copy of the current contents.
    ///
    /// Step records hold these, so later mutation of the live frame set never
    /// shows through in earlier steps.
    pub fn snapshot(&self) -> Vec<PageId> {
        self.slots.clone()
    }
}
