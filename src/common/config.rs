//! Configuration for pagesim.
//!
//! Constants live at module level; [`SimulationConfig`] is the validated
//! per-run configuration every policy receives.

use std::num::NonZeroUsize;

use crate::common::{Error, Result};

/// Frame count used by the console front-end when none is given.
///
/// Three frames is the classic textbook setup and exposes Belady's anomaly
/// for FIFO on `1 2 3 4 1 2 5 1 2 3 4 5`.
pub const DEFAULT_FRAME_COUNT: usize = 3;

/// Smallest frame count a simulation accepts.
pub const MIN_FRAME_COUNT: usize = 1;

/// Validated configuration for a single simulation run.
///
/// Construction is the only place a frame count is checked, so every
/// simulator can rely on `frame_count >= 1` (the FIFO cursor arithmetic is
/// modulo the frame count).
///
/// # Example
/// ```
/// use pagesim::SimulationConfig;
///
/// let config = SimulationConfig::new(3).unwrap();
/// assert_eq!(config.frame_count(), 3);
///
/// assert!(SimulationConfig::new(0).is_err());
/// assert!(SimulationConfig::from_signed(-2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    frame_count: NonZeroUsize,
}

impl SimulationConfig {
    /// Create a configuration with `frame_count` frames.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if `frame_count < 1`.
    pub fn new(frame_count: usize) -> Result<Self> {
        NonZeroUsize::new(frame_count)
            .map(|frame_count| Self { frame_count })
            .ok_or_else(|| {
                Error::InvalidConfiguration(format!(
                    "frame count must be at least {}, got {}",
                    MIN_FRAME_COUNT, frame_count
                ))
            })
    }

    /// Create a configuration from a signed frame count (as typed by a user).
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if `frame_count < 1`.
    pub fn from_signed(frame_count: i64) -> Result<Self> {
        let count = usize::try_from(frame_count).map_err(|_| {
            Error::InvalidConfiguration(format!(
                "frame count must be at least {}, got {}",
                MIN_FRAME_COUNT, frame_count
            ))
        })?;
        Self::new(count)
    }

    /// Number of frames available to the simulation.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frame_count.get()
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frame_count: NonZeroUsize::new(DEFAULT_FRAME_COUNT).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame_count() {
        assert_eq!(SimulationConfig::default().frame_count(), DEFAULT_FRAME_COUNT);
    }

    #[test]
    fn test_zero_frames_rejected() {
        let err = SimulationConfig::new(0).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_negative_frames_rejected() {
        let err = SimulationConfig::from_signed(-1).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidConfiguration("frame count must be at least 1, got -1".into())
        );
    }

    #[test]
    fn test_min_frame_count_accepted() {
        let config = SimulationConfig::from_signed(MIN_FRAME_COUNT as i64).unwrap();
        assert_eq!(config.frame_count(), 1);
    }
}
