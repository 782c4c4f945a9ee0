//! The outcome of one simulation run.

use crate::common::PageId;
use crate::sim::{SimulationStats, StepRecord};

/// Everything one policy produced over one reference sequence.
///
/// Results are plain values: running the same policy on the same input twice
/// yields results that compare equal.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Name of the policy that produced this result ("FIFO", "LRU", "Optimal").
    pub policy_name: &'static str,

    /// One record per reference, in input order.
    pub steps: Vec<StepRecord>,

    /// Hit, fault and eviction counters.
    pub stats: SimulationStats,
}

impl SimulationResult {
    pub(crate) fn new(
        policy_name: &'static str,
        steps: Vec<StepRecord>,
        stats: SimulationStats,
    ) -> Self {
        Self {
            policy_name,
            steps,
            stats,
        }
    }

    /// Number of page faults (misses).
    #[inline]
    pub fn fault_count(&self) -> usize {
        self.stats.faults
    }

    /// Number of hits.
    #[inline]
    pub fn hit_count(&self) -> usize {
        self.stats.hits
    }

    /// Hits divided by total references; 0 for an empty sequence.
    #[inline]
    pub fn hit_ratio(&self) -> f64 {
        self.stats.hit_ratio()
    }

    /// Frame contents after the last reference.
    pub fn final_frames(&self) -> &[PageId] {
        self.steps
            .last()
            .map(|step| step.frames.as_slice())
            .unwrap_or(&[])
    }
}
