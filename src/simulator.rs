//! Simulator - replays a reference string through an eviction policy.
//!
//! The [`Simulator`] provides:
//! - Single-policy runs producing a complete [`FrameTimeline`]
//! - Side-by-side runs of several policies over the same input

use crate::common::config::MIN_CAPACITY;
use crate::common::{Error, Result};
use crate::reference::ReferenceString;
use crate::replacer::{EvictionPolicy, PolicyKind};
use crate::timeline::{FrameTimeline, Statistics};

/// Replays one reference string against a fixed number of frames.
///
/// # Architecture
/// ```text
/// for each step i:
///   timeline.snapshot_before(i) ──▶ policy.on_access(..) ──▶ timeline.record(i, ..)
/// ```
///
/// Every run starts from empty frames with a fresh policy, so runs never
/// influence each other and repeated runs give identical timelines.
///
/// # Usage
/// ```
/// use pagesim::{PolicyKind, ReferenceString, Simulator};
///
/// let sim = Simulator::new(ReferenceString::default(), 3).unwrap();
/// let timeline = sim.run(PolicyKind::Optimal).unwrap();
/// assert_eq!(timeline.statistics().faults, 9);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    /// Pages referenced, in order.
    reference: ReferenceString,

    /// Number of frames (immutable after construction).
    capacity: usize,
}

impl Simulator {
    /// Create a simulator.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if `capacity` is 0.
    pub fn new(reference: ReferenceString, capacity: usize) -> Result<Self> {
        if capacity < MIN_CAPACITY {
            return Err(Error::InvalidConfiguration(format!(
                "capacity must be at least {}, got {}",
                MIN_CAPACITY, capacity
            )));
        }

        Ok(Self {
            reference,
            capacity,
        })
    }

    pub fn reference(&self) -> &ReferenceString {
        &self.reference
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Run the whole reference string through a fresh `kind` policy.
    pub fn run(&self, kind: PolicyKind) -> Result<FrameTimeline> {
        let policy = EvictionPolicy::new(kind, self.capacity)?;
        self.run_with(policy)
    }

    /// Run the whole reference string through `policy`.
    ///
    /// The policy is consumed: its state belongs to this run only.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if the policy was built for a different
    /// frame count or has already served references.
    pub fn run_with(&self, mut policy: EvictionPolicy) -> Result<FrameTimeline> {
        policy.check_ready(self.capacity)?;
        let kind = policy.kind();
        tracing::debug!(
            policy = %kind,
            capacity = self.capacity,
            references = self.reference.len(),
            "starting run"
        );

        let mut timeline = FrameTimeline::with_steps(self.capacity, self.reference.len());

        for (step, page) in self.reference.iter().enumerate() {
            let before = timeline.snapshot_before(step)?;
            let record = policy.on_access(&before, &self.reference, step, page);
            timeline.record(step, record)?;
        }

        let stats = timeline.statistics();
        tracing::debug!(
            policy = %kind,
            faults = stats.faults,
            hits = stats.hits,
            "finished run"
        );

        Ok(timeline)
    }

    /// Run each policy in `kinds`, in order, each from empty frames.
    pub fn compare(&self, kinds: &[PolicyKind]) -> Result<Vec<PolicyRun>> {
        kinds
            .iter()
            .map(|&kind| {
                Ok(PolicyRun {
                    kind,
                    timeline: self.run(kind)?,
                })
            })
            .collect()
    }
}

/// Simulate `reference` on `capacity` frames under `kind`.
///
/// Shorthand for [`Simulator::new`] followed by [`Simulator::run`].
pub fn simulate(
    reference: &ReferenceString,
    capacity: usize,
    kind: PolicyKind,
) -> Result<FrameTimeline> {
    Simulator::new(reference.clone(), capacity)?.run(kind)
}

/// The completed timeline of one policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyRun {
    pub kind: PolicyKind,
    pub timeline: FrameTimeline,
}

impl PolicyRun {
    pub fn statistics(&self) -> Statistics {
        self.timeline.statistics()
    }
}
