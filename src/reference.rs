//! Reference strings - the fixed sequence of page accesses a run replays.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::common::config::DEFAULT_REFERENCE;
use crate::common::{Error, PageId, Result};

/// An immutable, ordered sequence of page references.
///
/// Besides plain indexing, this provides the two scans the history-based
/// policies need: the most recent use of a page before a step (LRU) and the
/// next use of a page after a step (Optimal).
///
/// # Example
/// ```
/// use pagesim::{PageId, ReferenceString};
///
/// let refs = ReferenceString::parse("1 2 3, 2 1").unwrap();
/// assert_eq!(refs.len(), 5);
/// assert_eq!(refs.last_use_before(PageId::new(2), 4), Some(3));
/// assert_eq!(refs.next_use_after(PageId::new(1), 0), Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceString {
    pages: Vec<PageId>,
}

impl ReferenceString {
    /// Create a reference string from page ids.
    pub fn new(pages: Vec<PageId>) -> Self {
        Self { pages }
    }

    /// Build a reference string from raw integers.
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        Self::new(ids.into_iter().map(PageId::new).collect())
    }

    /// Parse page ids separated by whitespace and/or commas.
    ///
    /// # Errors
    /// `Error::MalformedInput` if any token is not a non-negative integer.
    pub fn parse(text: &str) -> Result<Self> {
        let pages = text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<u32>()
                    .map(PageId::new)
                    .map_err(|e| Error::MalformedInput(format!("page id {:?}: {}", token, e)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(pages))
    }

    /// Read and parse a reference string file.
    ///
    /// # Errors
    /// - `Error::Io` if the file cannot be read
    /// - `Error::MalformedInput` if its contents do not parse
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Number of references (N).
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page referenced at `index`, if in range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<PageId> {
        self.pages.get(index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[PageId] {
        &self.pages
    }

    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.pages.iter().copied()
    }

    /// Most recent index strictly before `index` at which `page` was referenced.
    pub fn last_use_before(&self, page: PageId, index: usize) -> Option<usize> {
        let end = index.min(self.pages.len());
        self.pages[..end].iter().rposition(|&p| p == page)
    }

    /// Next index strictly after `index` at which `page` is referenced.
    pub fn next_use_after(&self, page: PageId, index: usize) -> Option<usize> {
        let start = index.saturating_add(1);
        if start >= self.pages.len() {
            return None;
        }
        self.pages[start..]
            .iter()
            .position(|&p| p == page)
            .map(|offset| start + offset)
    }
}

impl Default for ReferenceString {
    fn default() -> Self {
        Self::from_ids(DEFAULT_REFERENCE)
    }
}

impl From<Vec<u32>> for ReferenceString {
    fn from(ids: Vec<u32>) -> Self {
        Self::from_ids(ids)
    }
}

impl fmt::Display for ReferenceString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", page)?;
        }
        Ok(())
    }
}
