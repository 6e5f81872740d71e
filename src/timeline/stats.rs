//! Hit/fault statistics for a simulation run.

use std::fmt;

use crate::timeline::FrameTimeline;

/// Totals derived from a [`FrameTimeline`].
///
/// Nothing here is stored alongside the timeline; every field is recounted
/// from the step records, so the numbers can never drift from the table
/// they summarize.
///
/// # Example
/// ```
/// use pagesim::{simulate, PolicyKind, ReferenceString};
///
/// let refs = ReferenceString::from_ids([1, 2, 1, 3]);
/// let stats = simulate(&refs, 2, PolicyKind::Fifo).unwrap().statistics();
/// assert_eq!(stats.faults, 3);
/// assert_eq!(stats.hits, 1);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Statistics {
    /// Length of the reference string (N).
    pub references: usize,

    /// References that found their page resident.
    pub hits: usize,

    /// References that had to load their page.
    pub faults: usize,

    /// Faults that displaced a resident page (frames were full).
    pub evictions: usize,
}

impl Statistics {
    /// Count hits, faults and evictions over a timeline.
    pub fn from_timeline(timeline: &FrameTimeline) -> Self {
        let references = timeline.len();
        let faults = timeline.fault_flags().filter(|&faulted| faulted).count();
        let evictions = timeline
            .steps()
            .iter()
            .filter(|record| record.evicted.is_some())
            .count();

        Self {
            references,
            hits: references - faults,
            faults,
            evictions,
        }
    }

    /// Fraction of references that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Fraction of references that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
