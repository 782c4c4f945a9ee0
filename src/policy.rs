//! The policies a caller can choose between.
//!
//! [`Policy`] is the uniform entry point to the core: every variant runs the
//! same [`Simulator`] loop with its own [`Replacer`](crate::sim::replacer::Replacer).

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, PageId, Result, SimulationConfig};
use crate::sim::replacer::{FifoReplacer, LruReplacer, OptimalReplacer};
use crate::sim::{SimulationResult, Simulator};

/// A page replacement policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Evict the page loaded earliest.
    Fifo,
    /// Evict the page referenced least recently.
    Lru,
    /// Evict the page referenced farthest in the future.
    Optimal,
}

impl Policy {
    /// Every policy, in evaluation order.
    ///
    /// Best-policy selection breaks fault-count ties by this order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    /// Display name, as reported in results.
    pub fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
        }
    }

    /// Simulate this policy over `sequence` with `frame_count` frames.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if `frame_count < 1`.
    ///
    /// # Example
    /// ```
    /// use pagesim::{PageId, Policy};
    ///
    /// let sequence = PageId::sequence(&[1, 2, 3, 1, 4]);
    /// let result = Policy::Lru.simulate(&sequence, 3).unwrap();
    ///
    /// assert_eq!(result.fault_count(), 4);
    /// assert_eq!(result.hit_count(), 1);
    ///
    /// assert!(Policy::Lru.simulate(&sequence, 0).is_err());
    /// ```
    pub fn simulate(self, sequence: &[PageId], frame_count: usize) -> Result<SimulationResult> {
        let config = SimulationConfig::new(frame_count)?;
        Ok(self.simulate_with(sequence, config))
    }

    /// Simulate this policy with an already validated configuration.
    pub fn simulate_with(self, sequence: &[PageId], config: SimulationConfig) -> SimulationResult {
        match self {
            Policy::Fifo => Simulator::new(FifoReplacer::new(), config).run(sequence),
            Policy::Lru => Simulator::new(LruReplacer::new(), config).run(sequence),
            Policy::Optimal => Simulator::new(OptimalReplacer::new(), config).run(sequence),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "optimal" | "opt" => Ok(Policy::Optimal),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}
