//! LRU (Least Recently Used) replacement policy.

use crate::common::FrameId;
use crate::reference::ReferenceString;
use crate::timeline::FrameSet;

/// Evicts the resident page whose last reference is oldest.
///
/// Stateless: recency is recomputed by scanning the reference string
/// backwards from the current step, so the choice depends only on the
/// frames and the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LruReplacer;

impl LruReplacer {
    pub fn new() -> Self {
        LruReplacer
    }

    /// Pick the victim among full `frames` at step `index`.
    ///
    /// A page with no reference before `index` is chosen immediately.
    /// Otherwise the smallest last-use index wins; on equal indices the
    /// lower slot is kept.
    pub fn victim(&self, frames: &FrameSet, reference: &ReferenceString, index: usize) -> FrameId {
        let mut victim = FrameId::new(0);
        let mut oldest = index;

        for (frame_id, page) in frames.resident() {
            match reference.last_use_before(page, index) {
                None => return frame_id,
                Some(last) if last < oldest => {
                    oldest = last;
                    victim = frame_id;
                }
                Some(_) => {}
            }
        }

        victim
    }
}
