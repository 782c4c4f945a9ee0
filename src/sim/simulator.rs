//! Simulator - the shared simulation protocol.
//!
//! The [`Simulator`] owns everything a run mutates: the frame set, the
//! statistics, and the replacer's bookkeeping. Every policy goes through the
//! same loop, so hit/miss classification, step recording and counting exist
//! exactly once:
//!
//! ```text
//!   reference ──▶ resident? ──yes──▶ Hit
//!                    │
//!                    no (fault)
//!                    ▼
//!               free frame? ──yes──▶ load into next slot
//!                    │
//!                    no
//!                    ▼
//!          replacer.select_victim ──▶ overwrite slot (eviction)
//!
//!   then: replacer.record_access, append StepRecord(snapshot)
//! ```

use log::{debug, info, trace, warn};

use crate::common::{PageId, SimulationConfig};
use crate::sim::replacer::Replacer;
use crate::sim::{FrameSet, Outcome, SimulationResult, SimulationStats, StepRecord};

/// Runs one policy over one reference sequence.
///
/// [`run`](Simulator::run) consumes the simulator, so frame contents and
/// replacer state can never leak from one run into another.
///
/// # Example
/// ```
/// use pagesim::sim::replacer::FifoReplacer;
/// use pagesim::sim::Simulator;
/// use pagesim::{PageId, SimulationConfig};
///
/// let config = SimulationConfig::new(2).unwrap();
/// let sequence = PageId::sequence(&[1, 2, 1, 3]);
///
/// let result = Simulator::new(FifoReplacer::new(), config).run(&sequence);
/// assert_eq!(result.fault_count(), 3);
/// assert_eq!(result.hit_count(), 1);
/// ```
#[derive(Debug)]
pub struct Simulator<R: Replacer> {
    replacer: R,
    frames: FrameSet,
    stats: SimulationStats,
}

impl<R: Replacer> Simulator<R> {
    /// Create a simulator with an empty frame set.
    pub fn new(replacer: R, config: SimulationConfig) -> Self {
        Self {
            replacer,
            frames: FrameSet::new(config.frame_count()),
            stats: SimulationStats::new(),
        }
    }

    /// Process every reference in order and collect the result.
    pub fn run(mut self, sequence: &[PageId]) -> SimulationResult {
        let steps: Vec<StepRecord> = sequence
            .iter()
            .enumerate()
            .map(|(position, &page)| self.access(page, position, sequence))
            .collect();

        info!(
            "{} over {} references with {} frames: {}",
            self.replacer.name(),
            sequence.len(),
            self.frames.capacity(),
            self.stats
        );

        SimulationResult::new(self.replacer.name(), steps, self.stats)
    }

    /// Process a single reference.
    fn access(&mut self, page: PageId, position: usize, sequence: &[PageId]) -> StepRecord {
        let mut evicted = None;

        let outcome = if self.frames.contains(page) {
            Outcome::Hit
        } else {
            Outcome::Miss
        };

        if outcome.is_hit() {
            self.stats.record_hit();
        } else {
            self.stats.record_fault();

            if self.frames.is_full() {
                let slot = self.victim_slot(position, sequence);
                let victim = self.frames.replace(slot, page);
                self.stats.record_eviction();

                debug!(
                    "{}: evicted page {} from slot {} for page {} at position {}",
                    self.replacer.name(),
                    victim,
                    slot,
                    page,
                    position
                );
                evicted = Some(victim);
            } else {
                self.frames.load(page);
            }
        }

        self.replacer.record_access(page, position);

        trace!(
            "{}: step {} page {} -> {} {:?}",
            self.replacer.name(),
            position + 1,
            page,
            outcome,
            self.frames.as_slice()
        );

        StepRecord {
            page,
            frames: self.frames.snapshot(),
            outcome,
            evicted,
        }
    }

    /// Ask the replacer for a victim, falling back to slot 0 when it names a
    /// slot that is not occupied.
    fn victim_slot(&mut self, position: usize, sequence: &[PageId]) -> usize {
        let slot = self.replacer.select_victim(&self.frames, position, sequence);
        if slot < self.frames.len() {
            slot
        } else {
            warn!(
                "{}: victim slot {} out of range for {} frames, evicting slot 0",
                self.replacer.name(),
                slot,
                self.frames.len()
            );
            0
        }
    }
}
