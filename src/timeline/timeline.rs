//! FrameTimeline - the step-by-step history of one simulation run.

use crate::common::{Error, PageId, Result};
use crate::timeline::{FrameSet, Statistics};

/// The outcome of serving one reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StepRecord {
    /// Frame contents after the reference was served.
    pub frames: FrameSet,

    /// Whether the referenced page was absent before this step.
    pub faulted: bool,

    /// Page displaced from a full frame set, if any.
    pub evicted: Option<PageId>,
}

impl StepRecord {
    /// A hit: frames unchanged.
    pub fn hit(frames: FrameSet) -> Self {
        Self {
            frames,
            faulted: false,
            evicted: None,
        }
    }

    /// A fault, optionally displacing a resident page.
    pub fn fault(frames: FrameSet, evicted: Option<PageId>) -> Self {
        Self {
            frames,
            faulted: true,
            evicted,
        }
    }
}

/// Append-only sequence of [`StepRecord`]s, one per reference.
///
/// Step `i` holds the frames *after* reference `i`. There is no way to
/// remove or rewrite a step once recorded.
///
/// # Example
/// ```
/// use pagesim::{FrameId, FrameSet, FrameTimeline, PageId, StepRecord};
///
/// let mut timeline = FrameTimeline::new(2);
/// let mut frames = timeline.snapshot_before(0).unwrap();
/// frames.place(FrameId::new(0), PageId::new(5));
/// timeline.record(0, StepRecord::fault(frames, None)).unwrap();
///
/// assert_eq!(timeline.len(), 1);
/// assert!(timeline.snapshot_before(1).unwrap().contains(PageId::new(5)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameTimeline {
    capacity: usize,
    steps: Vec<StepRecord>,
}

impl FrameTimeline {
    /// Create an empty timeline for `capacity` frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            steps: Vec::new(),
        }
    }

    /// Create an empty timeline with room for `steps` records.
    pub fn with_steps(capacity: usize, steps: usize) -> Self {
        Self {
            capacity,
            steps: Vec::with_capacity(steps),
        }
    }

    /// Append the record for `step`.
    ///
    /// # Errors
    /// - `Error::StepOutOfBounds` unless `step` is exactly the next index
    /// - `Error::InvalidConfiguration` if the snapshot has the wrong number
    ///   of frames
    pub fn record(&mut self, step: usize, record: StepRecord) -> Result<()> {
        if step != self.steps.len() {
            return Err(Error::StepOutOfBounds {
                step,
                len: self.steps.len(),
            });
        }
        if record.frames.capacity() != self.capacity {
            return Err(Error::InvalidConfiguration(format!(
                "snapshot has {} frames, timeline has {}",
                record.frames.capacity(),
                self.capacity
            )));
        }

        self.steps.push(record);
        Ok(())
    }

    /// Frames as they stood before `step` was served.
    ///
    /// Step 0 starts from all-empty frames.
    ///
    /// # Errors
    /// `Error::StepOutOfBounds` if `step > len()`.
    pub fn snapshot_before(&self, step: usize) -> Result<FrameSet> {
        if step == 0 {
            return Ok(FrameSet::empty(self.capacity));
        }
        self.steps
            .get(step - 1)
            .map(|record| record.frames.clone())
            .ok_or(Error::StepOutOfBounds {
                step,
                len: self.steps.len(),
            })
    }

    /// Record for `step`, if recorded.
    #[inline]
    pub fn get(&self, step: usize) -> Option<&StepRecord> {
        self.steps.get(step)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Fault flag per step.
    pub fn fault_flags(&self) -> impl Iterator<Item = bool> + '_ {
        self.steps.iter().map(|record| record.faulted)
    }

    /// Hit/fault totals.
    pub fn statistics(&self) -> Statistics {
        Statistics::from_timeline(self)
    }

    /// CRC32 over the encoded timeline.
    ///
    /// Two timelines with equal fingerprints are, for practical purposes,
    /// bit-identical. Encoding per step: fault byte, evicted tag + id, then
    /// each slot as tag + id. All integers little-endian.
    pub fn fingerprint(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&(self.capacity as u64).to_le_bytes());

        for record in &self.steps {
            hasher.update(&[record.faulted as u8]);
            match record.evicted {
                Some(page) => {
                    hasher.update(&[1]);
                    hasher.update(&page.0.to_le_bytes());
                }
                None => hasher.update(&[0]),
            }
            for slot in record.frames.slots() {
                match slot.page() {
                    Some(page) => {
                        hasher.update(&[1]);
                        hasher.update(&page.0.to_le_bytes());
                    }
                    None => hasher.update(&[0]),
                }
            }
        }

        hasher.finalize()
    }
}
