//! Eviction policy implementations (replacers).
//!
//! Implements:
//! - [`FifoReplacer`] - round-robin over slots
//! - [`LruReplacer`] - oldest last reference
//! - [`OptimalReplacer`] - furthest next reference (Belady)
//!
//! [`EvictionPolicy`] wraps the three in a closed enum so the simulator can
//! drive any of them through one `on_access` call.

mod fifo;
mod lru;
mod optimal;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

use std::fmt;
use std::str::FromStr;

use crate::common::config::MIN_CAPACITY;
use crate::common::{Error, FrameId, PageId, Result};
use crate::reference::ReferenceString;
use crate::timeline::{FrameSet, StepRecord};

/// Names an eviction policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Fifo,
    Lru,
    Optimal,
}

impl PolicyKind {
    /// Every policy, in report order.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Fifo, PolicyKind::Lru, PolicyKind::Optimal];

    /// Short lowercase token, as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lru => "lru",
            PolicyKind::Optimal => "optimal",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Optimal => "Optimal",
        };
        f.pad(name)
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "optimal" | "opt" => Ok(PolicyKind::Optimal),
            other => Err(Error::MalformedInput(format!(
                "unknown policy {:?} (expected fifo, lru or optimal)",
                other
            ))),
        }
    }
}

/// A page replacement policy with its private state.
///
/// Each variant carries only what it needs: FIFO its pointer, LRU and
/// Optimal nothing at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvictionPolicy {
    Fifo(FifoReplacer),
    Lru(LruReplacer),
    Optimal(OptimalReplacer),
}

impl EvictionPolicy {
    /// Build a fresh policy of `kind` for `capacity` frames.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if `capacity` is 0.
    pub fn new(kind: PolicyKind, capacity: usize) -> Result<Self> {
        if capacity < MIN_CAPACITY {
            return Err(Error::InvalidConfiguration(format!(
                "capacity must be at least {}, got {}",
                MIN_CAPACITY, capacity
            )));
        }

        Ok(match kind {
            PolicyKind::Fifo => EvictionPolicy::Fifo(FifoReplacer::new(capacity)?),
            PolicyKind::Lru => EvictionPolicy::Lru(LruReplacer::new()),
            PolicyKind::Optimal => EvictionPolicy::Optimal(OptimalReplacer::new()),
        })
    }

    pub fn kind(&self) -> PolicyKind {
        match self {
            EvictionPolicy::Fifo(_) => PolicyKind::Fifo,
            EvictionPolicy::Lru(_) => PolicyKind::Lru,
            EvictionPolicy::Optimal(_) => PolicyKind::Optimal,
        }
    }

    /// Check that this policy can start a run on `capacity` empty frames.
    ///
    /// LRU and Optimal carry no state. FIFO must be sized for `capacity` and
    /// have its pointer on slot 0.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` otherwise.
    pub fn check_ready(&self, capacity: usize) -> Result<()> {
        match self {
            EvictionPolicy::Fifo(fifo) if fifo.capacity() != capacity => {
                Err(Error::InvalidConfiguration(format!(
                    "FIFO replacer sized for {} frames, run has {}",
                    fifo.capacity(),
                    capacity
                )))
            }
            EvictionPolicy::Fifo(fifo) if !fifo.at_start() => {
                Err(Error::InvalidConfiguration(format!(
                    "FIFO replacer already advanced to {}",
                    fifo.pointer()
                )))
            }
            _ => Ok(()),
        }
    }

    /// Serve the reference to `incoming` at step `index`.
    ///
    /// - Resident page: hit, frames unchanged.
    /// - Otherwise a fault: the page goes into the lowest empty frame, or,
    ///   when every frame is occupied, over the victim this policy selects.
    ///
    /// Returns the step's record; `before` is left untouched.
    pub fn on_access(
        &mut self,
        before: &FrameSet,
        reference: &ReferenceString,
        index: usize,
        incoming: PageId,
    ) -> StepRecord {
        if before.contains(incoming) {
            return StepRecord::hit(before.clone());
        }

        let mut frames = before.clone();
        let frame_id = match frames.first_empty() {
            Some(free) => free,
            None => self.victim(&frames, reference, index),
        };

        let evicted = frames.place(frame_id, incoming);
        if let EvictionPolicy::Fifo(fifo) = self {
            fifo.record_placement();
        }

        if let Some(victim) = evicted {
            tracing::trace!(
                policy = %self.kind(),
                step = index,
                slot = frame_id.0,
                victim = victim.0,
                incoming = incoming.0,
                "evicted page"
            );
        }

        StepRecord::fault(frames, evicted)
    }

    /// Victim slot among full `frames`.
    fn victim(&self, frames: &FrameSet, reference: &ReferenceString, index: usize) -> FrameId {
        match self {
            EvictionPolicy::Fifo(fifo) => fifo.victim(),
            EvictionPolicy::Lru(lru) => lru.victim(frames, reference, index),
            EvictionPolicy::Optimal(optimal) => optimal.victim(frames, reference, index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(id: u32) -> PageId {
        PageId::new(id)
    }

    /// Drive a policy by hand, returning per-step (frames, faulted).
    fn drive(kind: PolicyKind, capacity: usize, ids: &[u32]) -> Vec<StepRecord> {
        let refs = ReferenceString::from_ids(ids.iter().copied());
        let mut policy = EvictionPolicy::new(kind, capacity).unwrap();
        let mut frames = FrameSet::empty(capacity);
        let mut records = vec![];

        for (i, page) in refs.iter().enumerate() {
            let record = policy.on_access(&frames, &refs, i, page);
            frames = record.frames.clone();
            records.push(record);
        }
        records
    }

    #[test]
    fn test_zero_capacity_rejected() {
        for kind in PolicyKind::ALL {
            match EvictionPolicy::new(kind, 0) {
                Err(Error::InvalidConfiguration(_)) => {}
                other => panic!("expected InvalidConfiguration, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_check_ready() {
        for kind in PolicyKind::ALL {
            assert!(EvictionPolicy::new(kind, 3).unwrap().check_ready(3).is_ok());
        }
        assert!(EvictionPolicy::new(PolicyKind::Lru, 2).unwrap().check_ready(5).is_ok());

        let fifo = EvictionPolicy::new(PolicyKind::Fifo, 2).unwrap();
        assert!(matches!(
            fifo.check_ready(3),
            Err(Error::InvalidConfiguration(_))
        ));

        // One placement moves the pointer off slot 0
        let refs = ReferenceString::from_ids([1]);
        let mut used = EvictionPolicy::new(PolicyKind::Fifo, 3).unwrap();
        used.on_access(&FrameSet::empty(3), &refs, 0, pid(1));
        assert!(matches!(
            used.check_ready(3),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_kind_roundtrip() {
        for kind in PolicyKind::ALL {
            assert_eq!(EvictionPolicy::new(kind, 2).unwrap().kind(), kind);
            assert_eq!(kind.as_str().parse::<PolicyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_policy_kind_parse() {
        assert_eq!("OPT".parse::<PolicyKind>().unwrap(), PolicyKind::Optimal);
        assert_eq!(" Lru ".parse::<PolicyKind>().unwrap(), PolicyKind::Lru);
        assert!(matches!(
            "clock".parse::<PolicyKind>(),
            Err(Error::MalformedInput(_))
        ));
    }

    #[test]
    fn test_policy_kind_display() {
        assert_eq!(PolicyKind::Fifo.to_string(), "FIFO");
        assert_eq!(PolicyKind::Lru.to_string(), "LRU");
        assert_eq!(format!("{:<8}|", PolicyKind::Optimal), "Optimal |");
    }

    #[test]
    fn test_hit_leaves_frames_alone() {
        let refs = ReferenceString::from_ids([3, 3]);
        let mut frames = FrameSet::empty(2);
        frames.place(FrameId::new(1), pid(3));

        let mut policy = EvictionPolicy::new(PolicyKind::Fifo, 2).unwrap();
        let record = policy.on_access(&frames, &refs, 1, pid(3));

        assert!(!record.faulted);
        assert_eq!(record.evicted, None);
        assert_eq!(record.frames, frames);
        // A hit is not a placement
        match policy {
            EvictionPolicy::Fifo(fifo) => assert_eq!(fifo.pointer(), FrameId::new(0)),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_fill_uses_lowest_empty_slot() {
        for kind in PolicyKind::ALL {
            let records = drive(kind, 3, &[7, 8]);
            assert_eq!(records[1].frames.find(pid(7)), Some(FrameId::new(0)));
            assert_eq!(records[1].frames.find(pid(8)), Some(FrameId::new(1)));
            assert!(records.iter().all(|r| r.faulted && r.evicted.is_none()));
        }
    }

    #[test]
    fn test_fifo_evicts_oldest_despite_reuse() {
        // 1 is re-referenced but FIFO still evicts it first
        let records = drive(PolicyKind::Fifo, 2, &[1, 2, 1, 3]);
        assert_eq!(records[3].evicted, Some(pid(1)));
        assert_eq!(records[3].frames.find(pid(3)), Some(FrameId::new(0)));
    }

    #[test]
    fn test_lru_keeps_recently_used() {
        let records = drive(PolicyKind::Lru, 2, &[1, 2, 1, 3]);
        assert_eq!(records[3].evicted, Some(pid(2)));
        assert_eq!(records[3].frames.find(pid(3)), Some(FrameId::new(1)));
    }

    #[test]
    fn test_optimal_looks_ahead() {
        // At step 2, 1 is needed again at 3 but 2 never is
        let records = drive(PolicyKind::Optimal, 2, &[1, 2, 3, 1]);
        assert_eq!(records[2].evicted, Some(pid(2)));
        assert!(!records[3].faulted);
    }
}
