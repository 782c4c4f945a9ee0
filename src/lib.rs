//! pagesim - A page replacement simulator.
//!
//! Replays a page reference sequence against a fixed number of frames under
//! FIFO, LRU and Optimal eviction, recording every step, and reports which
//! policy faulted least.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Front-end (input/, report/, bin/pagesim)          │   │
//! │  │     parse reference string → render tables → best        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Comparison (compare/, policy/)                │   │
//! │  │   Policy::ALL → one run each → best_policy (first min)   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Simulation core (sim/)                   │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │      Replacers:  FIFO  |  LRU  |  Optimal       │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │      Simulator + FrameSet + StepRecord + Statistics      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, config)
//! - [`sim`] - The simulation loop and eviction policies
//! - [`policy`] - The uniform `Policy::simulate` entry point
//! - [`compare`] - Multi-policy runs and best-policy selection
//! - [`input`] / [`report`] - Text in, text out
//!
//! # Quick Start
//! ```
//! use pagesim::{compare, PageId, Policy};
//!
//! let sequence = PageId::sequence(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
//! let comparison = compare(&sequence, 3, &Policy::ALL).unwrap();
//!
//! assert_eq!(comparison.best().unwrap().policy_name, "Optimal");
//! ```

pub mod common;
pub mod compare;
pub mod input;
pub mod policy;
pub mod report;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::config::DEFAULT_FRAME_COUNT;
pub use common::{Error, PageId, Result, SimulationConfig};

pub use compare::{best_policy, compare, compare_parallel, Comparison};
pub use policy::Policy;
pub use sim::{Outcome, SimulationResult, SimulationStats, StepRecord};
