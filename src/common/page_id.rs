//! Page identifier type.

use std::fmt;

/// Identifies a virtual page in a reference string.
///
/// Page ids are plain non-negative integers. There is no sentinel value:
/// an empty frame is a [`Slot::Empty`](crate::timeline::Slot::Empty), never a
/// reserved page id.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Bare number: the reporter prints these straight into table cells.
        write!(f, "{}", self.0)
    }
}
