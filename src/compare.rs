//! Running several policies on the same input and picking the best.
//!
//! Runs share nothing but the (immutable) reference sequence, so they can be
//! evaluated one after another or on separate threads with identical results.

use std::thread;

use log::debug;
use parking_lot::Mutex;

use crate::common::{PageId, Result, SimulationConfig};
use crate::policy::Policy;
use crate::sim::SimulationResult;

/// Select the result with the fewest page faults.
///
/// Ties go to the earliest result in the slice. Returns `None` for an empty
/// slice.
///
/// # Example
/// ```
/// use pagesim::{best_policy, PageId, Policy};
///
/// let sequence = PageId::sequence(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
/// let results: Vec<_> = Policy::ALL
///     .iter()
///     .map(|p| p.simulate(&sequence, 3).unwrap())
///     .collect();
///
/// assert_eq!(best_policy(&results).unwrap().policy_name, "Optimal");
/// ```
pub fn best_policy(results: &[SimulationResult]) -> Option<&SimulationResult> {
    // min_by_key returns the first of several equal minima.
    results.iter().min_by_key(|result| result.fault_count())
}

/// Results of several policies over one input, in evaluation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Frame count every policy ran with.
    pub frame_count: usize,

    /// One result per requested policy, in the order requested.
    pub results: Vec<SimulationResult>,
}

impl Comparison {
    /// The result with the fewest faults (first wins ties).
    pub fn best(&self) -> Option<&SimulationResult> {
        best_policy(&self.results)
    }

    /// The result produced by `policy`, if it was part of the comparison.
    pub fn get(&self, policy: Policy) -> Option<&SimulationResult> {
        self.results
            .iter()
            .find(|result| result.policy_name == policy.name())
    }
}

/// Run each of `policies` over `sequence`, one after another.
///
/// # Errors
/// `Error::InvalidConfiguration` if `frame_count < 1`; no policy runs.
pub fn compare(sequence: &[PageId], frame_count: usize, policies: &[Policy]) -> Result<Comparison> {
    let config = SimulationConfig::new(frame_count)?;

    let results = policies
        .iter()
        .map(|policy| policy.simulate_with(sequence, config))
        .collect();

    Ok(Comparison {
        frame_count,
        results,
    })
}

/// Run each of `policies` over `sequence`, one thread per policy.
///
/// Produces exactly what [`compare`] produces; results are placed by index,
/// so evaluation order (and therefore tie-breaking) is unaffected by which
/// thread finishes first.
///
/// # Errors
/// `Error::InvalidConfiguration` if `frame_count < 1`; no thread is spawned.
pub fn compare_parallel(
    sequence: &[PageId],
    frame_count: usize,
    policies: &[Policy],
) -> Result<Comparison> {
    let config = SimulationConfig::new(frame_count)?;
    let slots: Mutex<Vec<Option<SimulationResult>>> = Mutex::new(vec![None; policies.len()]);

    thread::scope(|scope| {
        for (index, &policy) in policies.iter().enumerate() {
            let slots = &slots;
            scope.spawn(move || {
                let result = policy.simulate_with(sequence, config);
                debug!("{} finished on its own thread", policy);
                slots.lock()[index] = Some(result);
            });
        }
    });

    Ok(Comparison {
        frame_count,
        results: slots.into_inner().into_iter().flatten().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;
    use crate::sim::SimulationStats;

    /// A synthetic result with the given name and fault count.
    fn synthetic(name: &'static str, faults: usize) -> SimulationResult {
        SimulationResult {
            policy_name: name,
            steps: Vec::new(),
            stats: SimulationStats {
                hits: 0,
                faults,
                evictions: 0,
            },
        }
    }

    #[test]
    fn test_best_policy_minimum() {
        let results = vec![synthetic("FIFO", 9), synthetic("LRU", 10), synthetic("Optimal", 7)];
        assert_eq!(best_policy(&results).unwrap().policy_name, "Optimal");
    }

    #[test]
    fn test_best_policy_tie_first_wins() {
        let results = vec![synthetic("FIFO", 5), synthetic("LRU", 5), synthetic("Optimal", 6)];
        assert_eq!(best_policy(&results).unwrap().policy_name, "FIFO");
    }

    #[test]
    fn test_best_policy_empty() {
        assert!(best_policy(&[]).is_none());
    }

    #[test]
    fn test_compare_runs_in_order() {
        let seq = PageId::sequence(&[7, 0, 1, 2, 0, 3, 0, 4]);
        let comparison = compare(&seq, 3, &Policy::ALL).unwrap();

        let names: Vec<_> = comparison.results.iter().map(|r| r.policy_name).collect();
        assert_eq!(names, vec!["FIFO", "LRU", "Optimal"]);
        assert_eq!(comparison.frame_count, 3);
        assert!(comparison.get(Policy::Lru).is_some());
    }

    #[test]
    fn test_compare_subset() {
        let seq = PageId::sequence(&[1, 2, 3]);
        let comparison = compare(&seq, 2, &[Policy::Optimal]).unwrap();

        assert_eq!(comparison.results.len(), 1);
        assert!(comparison.get(Policy::Fifo).is_none());
        assert_eq!(comparison.best().unwrap().policy_name, "Optimal");
    }

    #[test]
    fn test_compare_rejects_zero_frames() {
        let seq = PageId::sequence(&[1, 2, 3]);
        assert!(matches!(
            compare(&seq, 0, &Policy::ALL),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            compare_parallel(&seq, 0, &Policy::ALL),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let seq = PageId::sequence(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1]);

        let sequential = compare(&seq, 3, &Policy::ALL).unwrap();
        let parallel = compare_parallel(&seq, 3, &Policy::ALL).unwrap();

        assert_eq!(sequential, parallel);
    }
}
