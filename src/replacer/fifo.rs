//! FIFO (First-In-First-Out) replacement policy.

use crate::common::config::MIN_CAPACITY;
use crate::common::{Error, FrameId, Result};

/// Round-robin FIFO over frame slots.
///
/// Keeps a single pointer to the next slot to overwrite. The pointer moves
/// one slot forward (wrapping at `capacity`) on every placement, including
/// the initial fills of empty frames. Since frames are filled lowest-first and
/// never vacated, the pointer sits on the oldest resident page once the frames
/// are full, which makes this plain queue FIFO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FifoReplacer {
    /// Next slot to overwrite.
    pointer: FrameId,

    /// Number of slots the pointer cycles through.
    capacity: usize,
}

impl FifoReplacer {
    /// Create a FIFO replacer for `capacity` frames.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity < MIN_CAPACITY {
            return Err(Error::InvalidConfiguration(format!(
                "capacity must be at least {}, got {}",
                MIN_CAPACITY, capacity
            )));
        }

        Ok(Self {
            pointer: FrameId::new(0),
            capacity,
        })
    }

    /// Slot to overwrite when every frame is occupied.
    #[inline]
    pub fn victim(&self) -> FrameId {
        self.pointer
    }

    /// Advance the pointer after a page was placed.
    pub fn record_placement(&mut self) {
        self.pointer = self.pointer.next(self.capacity);
    }

    /// Current pointer position.
    #[inline]
    pub fn pointer(&self) -> FrameId {
        self.pointer
    }

    /// Number of slots this replacer cycles through.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Pointer sits on slot 0, where a run from empty frames must begin.
    #[inline]
    pub fn at_start(&self) -> bool {
        self.pointer == FrameId::new(0)
    }
}
