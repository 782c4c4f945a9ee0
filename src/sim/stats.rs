//! Simulation statistics tracking.

use std::fmt;

/// Counters accumulated over one simulation run.
///
/// Every reference is counted exactly once as a hit or a fault, so
/// `hits + faults` always equals the number of references processed.
/// `evictions` counts the faults that had to displace a resident page.
///
/// # Example
/// ```
/// use pagesim::SimulationStats;
///
/// let mut stats = SimulationStats::new();
/// stats.record_fault();
/// stats.record_hit();
/// assert_eq!(stats.total(), 2);
/// assert_eq!(stats.hit_ratio(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// References that found their page resident.
    pub hits: usize,

    /// References that had to load their page (page faults).
    pub faults: usize,

    /// Faults that replaced a resident page.
    pub evictions: usize,
}

impl SimulationStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    #[inline]
    pub fn record_fault(&mut self) {
        self.faults += 1;
    }

    #[inline]
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Number of references processed.
    #[inline]
    pub fn total(&self) -> usize {
        self.hits + self.faults
    }

    /// Hit ratio (0.0 to 1.0), defined as 0 when nothing was referenced.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Miss ratio (0.0 to 1.0), defined as 0 when nothing was referenced.
    pub fn miss_ratio(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.faults as f64 / total as f64
        }
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, faults: {}, evictions: {}, hit_ratio: {:.2}% }}",
            self.hits,
            self.faults,
            self.evictions,
            self.hit_ratio() * 100.0
        )
    }
}
