//! Optimal (Belady's MIN) replacement policy.

use crate::common::FrameId;
use crate::reference::ReferenceString;
use crate::timeline::FrameSet;

/// Evicts the resident page whose next use lies furthest in the future.
///
/// Needs the whole reference string up front, which is why it only exists
/// in simulation. No policy incurs fewer faults on the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptimalReplacer;

impl OptimalReplacer {
    pub fn new() -> Self {
        OptimalReplacer
    }

    /// Pick the victim among full `frames` at step `index`.
    ///
    /// A page never referenced after `index` is chosen immediately.
    /// Otherwise the furthest next use wins; only a strictly later use
    /// replaces the current choice, so the lowest slot wins ties.
    pub fn victim(&self, frames: &FrameSet, reference: &ReferenceString, index: usize) -> FrameId {
        let mut victim = None;
        let mut furthest = index;

        for (frame_id, page) in frames.resident() {
            match reference.next_use_after(page, index) {
                None => return frame_id,
                Some(next) if next > furthest => {
                    furthest = next;
                    victim = Some(frame_id);
                }
                Some(_) => {}
            }
        }

        victim.unwrap_or(FrameId::new(0))
    }
}
