//! FrameSet - the fixed group of frames a policy manages.
//!
//! A [`FrameSet`] is a row of [`Slot`]s, one per physical frame. Slots are
//! either empty or hold exactly one resident page.

use std::fmt;

use crate::common::{FrameId, PageId};

/// Contents of a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Slot {
    /// No page loaded.
    #[default]
    Empty,
    /// A resident page.
    Occupied(PageId),
}

impl Slot {
    /// The resident page, if any.
    #[inline]
    pub fn page(&self) -> Option<PageId> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(page) => Some(*page),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }
}

/// A fixed number of frames.
///
/// The number of slots never changes after construction, so the occupied
/// count can never exceed the capacity.
///
/// # Example
/// ```
/// use pagesim::{FrameId, FrameSet, PageId};
///
/// let mut frames = FrameSet::empty(3);
/// assert_eq!(frames.first_empty(), Some(FrameId::new(0)));
///
/// frames.place(FrameId::new(0), PageId::new(7));
/// assert!(frames.contains(PageId::new(7)));
/// assert_eq!(frames.occupied_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameSet {
    slots: Vec<Slot>,
}

impl FrameSet {
    /// Create `capacity` empty frames.
    pub fn empty(capacity: usize) -> Self {
        Self {
            slots: vec![Slot::Empty; capacity],
        }
    }

    /// Number of frames.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of frames holding a page.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    /// True when no frame is empty.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| !slot.is_empty())
    }

    /// Whether `page` is resident in any frame.
    pub fn contains(&self, page: PageId) -> bool {
        self.find(page).is_some()
    }

    /// Frame holding `page`, if resident.
    pub fn find(&self, page: PageId) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|slot| *slot == Slot::Occupied(page))
            .map(FrameId::new)
    }

    /// Lowest-indexed empty frame.
    pub fn first_empty(&self) -> Option<FrameId> {
        self.slots.iter().position(Slot::is_empty).map(FrameId::new)
    }

    /// Contents of a frame, or `None` if `frame_id` is out of range.
    #[inline]
    pub fn get(&self, frame_id: FrameId) -> Option<Slot> {
        self.slots.get(frame_id.0).copied()
    }

    /// Load `page` into `frame_id`, returning the page it displaced.
    ///
    /// # Panics
    /// Panics if `frame_id` is out of range.
    pub fn place(&mut self, frame_id: FrameId, page: PageId) -> Option<PageId> {
        let previous = self.slots[frame_id.0].page();
        self.slots[frame_id.0] = Slot::Occupied(page);
        previous
    }

    /// All slots in frame order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Resident pages with their frames, in frame order.
    pub fn resident(&self) -> impl Iterator<Item = (FrameId, PageId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.page().map(|page| (FrameId::new(i), page)))
    }

    /// Number of frames whose contents differ from `other`.
    ///
    /// Frames beyond the shorter set count as differing.
    pub fn changed_slots(&self, other: &FrameSet) -> usize {
        let common = self
            .slots
            .iter()
            .zip(other.slots.iter())
            .filter(|(a, b)| a != b)
            .count();
        common + self.capacity().abs_diff(other.capacity())
    }
}

impl fmt::Display for FrameSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match slot {
                Slot::Empty => write!(f, "-")?,
                Slot::Occupied(page) => write!(f, "{}", page)?,
            }
        }
        write!(f, "]")
    }
}
