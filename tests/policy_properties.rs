//! Property tests for the simulation protocol.
//!
//! These hold for every policy and every input, so they are checked over
//! generated reference strings rather than hand-picked ones.

use std::collections::HashSet;

use pagesim::{compare, compare_parallel, Outcome, PageId, Policy};
use proptest::prelude::*;

/// Frame counts from tight to far beyond any sequence length.
fn frame_count() -> impl Strategy<Value = usize> {
    prop_oneof![1usize..6, Just(1usize << 40), Just(usize::MAX)]
}

/// Reference strings over a small page alphabet, so repeats are common.
fn reference_string() -> impl Strategy<Value = Vec<PageId>> {
    prop::collection::vec((0i64..8).prop_map(PageId), 0..60)
}

proptest! {
    #[test]
    fn prop_hits_plus_faults_is_length(pages in reference_string(), frames in frame_count()) {
        for policy in Policy::ALL {
            let result = policy.simulate(&pages, frames).unwrap();

            prop_assert_eq!(result.fault_count() + result.hit_count(), pages.len());
            prop_assert_eq!(result.steps.len(), pages.len());
        }
    }

    #[test]
    fn prop_hit_ratio_matches_counts(pages in reference_string(), frames in 1usize..6) {
        for policy in Policy::ALL {
            let result = policy.simulate(&pages, frames).unwrap();

            let expected = if pages.is_empty() {
                0.0
            } else {
                result.hit_count() as f64 / pages.len() as f64
            };
            prop_assert!((result.hit_ratio() - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn prop_frames_never_overflow(pages in reference_string(), frames in frame_count()) {
        for policy in Policy::ALL {
            let result = policy.simulate(&pages, frames).unwrap();

            for step in &result.steps {
                prop_assert!(step.frames.len() <= frames);
            }
        }
    }

    #[test]
    fn prop_steps_follow_input(pages in reference_string(), frames in 1usize..6) {
        for policy in Policy::ALL {
            let result = policy.simulate(&pages, frames).unwrap();
            let mut seen = HashSet::new();

            for (step, &page) in result.steps.iter().zip(&pages) {
                seen.insert(page);

                prop_assert_eq!(step.page, page);
                // The referenced page is resident after its step.
                prop_assert!(step.frames.contains(&page));
                // Every resident page was referenced at or before this step.
                prop_assert!(step.frames.iter().all(|p| seen.contains(p)));
                // Frames hold distinct pages.
                let distinct: HashSet<_> = step.frames.iter().collect();
                prop_assert_eq!(distinct.len(), step.frames.len());
                // Only misses evict.
                if step.outcome == Outcome::Hit {
                    prop_assert!(step.evicted.is_none());
                }
            }
        }
    }

    #[test]
    fn prop_optimal_never_worse(pages in reference_string(), frames in 1usize..6) {
        let comparison = compare(&pages, frames, &Policy::ALL).unwrap();
        let optimal = comparison.get(Policy::Optimal).unwrap().fault_count();

        prop_assert!(optimal <= comparison.get(Policy::Fifo).unwrap().fault_count());
        prop_assert!(optimal <= comparison.get(Policy::Lru).unwrap().fault_count());
    }

    #[test]
    fn prop_enough_frames_only_cold_misses(pages in reference_string()) {
        let distinct = pages.iter().collect::<HashSet<_>>().len();

        for policy in Policy::ALL {
            let result = policy.simulate(&pages, distinct.max(1)).unwrap();

            prop_assert_eq!(result.fault_count(), distinct);
            prop_assert_eq!(result.stats.evictions, 0);
        }
    }

    #[test]
    fn prop_parallel_matches_sequential(pages in reference_string(), frames in frame_count()) {
        let sequential = compare(&pages, frames, &Policy::ALL).unwrap();
        let parallel = compare_parallel(&pages, frames, &Policy::ALL).unwrap();

        prop_assert_eq!(sequential, parallel);
    }
}
