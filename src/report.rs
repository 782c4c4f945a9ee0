//! Text rendering of simulation results.
//!
//! Rendering lives outside the core: these types only read results and are
//! implemented as `Display` wrappers so callers decide where the text goes.
//!
//! ```text
//! Algorithm: FIFO
//! Step    Page    Frames          Result
//! 1       1       1               Miss
//! 2       2       1 2             Miss
//! Total Page Faults: 2
//! Total Hits: 0
//! Hit Ratio: 0.00%
//! ```

use std::fmt;

use crate::common::PageId;
use crate::sim::SimulationResult;

/// Space-separated frame contents, e.g. `"4 2 3"`.
pub fn format_frames(frames: &[PageId]) -> String {
    frames
        .iter()
        .map(|page| page.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Step-by-step table followed by the totals.
pub struct ResultTable<'a>(pub &'a SimulationResult);

impl fmt::Display for ResultTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;

        writeln!(f, "Algorithm: {}", result.policy_name)?;
        writeln!(f, "Step\tPage\tFrames\t\tResult")?;
        for (idx, step) in result.steps.iter().enumerate() {
            writeln!(
                f,
                "{}\t{}\t{:<10}\t{}",
                idx + 1,
                step.page,
                format_frames(&step.frames),
                step.outcome
            )?;
        }
        write!(f, "{}", Summary(result))
    }
}

/// Totals only: faults, hits and hit ratio.
pub struct Summary<'a>(pub &'a SimulationResult);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;

        writeln!(f, "Total Page Faults: {}", result.fault_count())?;
        writeln!(f, "Total Hits: {}", result.hit_count())?;
        writeln!(f, "Hit Ratio: {:.2}%", result.hit_ratio() * 100.0)
    }
}

/// The closing line naming the policy with the fewest faults.
pub struct BestPolicyLine<'a>(pub &'a SimulationResult);

impl fmt::Display for BestPolicyLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Best algorithm for this input (least page faults): {}",
            self.0.policy_name
        )
    }
}
