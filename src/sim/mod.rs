//! Page replacement simulation.
//!
//! The simulation core: a fixed row of frames, a reference sequence, and a
//! replacer deciding what to evict.
//!
//! # Components
//! - [`Simulator`] - The shared hit/miss/evict loop
//! - [`FrameSet`] - The resident pages
//! - [`StepRecord`] / [`Outcome`] - What each reference did
//! - [`SimulationStats`] / [`SimulationResult`] - What a run produced
//! - [`replacer`] - Eviction policy implementations

mod frame_set;
pub mod replacer;
mod result;
mod simulator;
mod stats;
mod step;

pub use frame_set::FrameSet;
pub use result::SimulationResult;
pub use simulator::Simulator;
pub use stats::SimulationStats;
pub use step::{Outcome, StepRecord};
