//! Configuration constants for pagesim.

use crate::common::{Error, Result};

/// Reference string used when no file is supplied.
///
/// Twenty references over pages 1..=6, the classic classroom sequence.
pub const DEFAULT_REFERENCE: [u32; 20] = [
    1, 2, 3, 2, 1, 5, 2, 1, 6, 2, 5, 6, 3, 1, 3, 6, 1, 2, 4, 3,
];

/// Smallest usable frame count.
pub const MIN_CAPACITY: usize = 1;

/// Environment variable holding the `tracing` filter for the binary.
pub const LOG_ENV_VAR: &str = "PAGESIM_LOG";

/// Parse a frame count typed by the user.
///
/// Surrounding whitespace is ignored. Anything that is not a non-negative
/// integer is `MalformedInput`; no default is substituted. Range checks
/// (capacity >= 1) happen in [`Simulator::new`](crate::Simulator::new).
///
/// # Example
/// ```
/// use pagesim::common::config::parse_capacity;
///
/// assert_eq!(parse_capacity(" 3\n").unwrap(), 3);
/// assert!(parse_capacity("three").is_err());
/// ```
pub fn parse_capacity(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::MalformedInput("missing frame count".to_string()));
    }
    trimmed
        .parse::<usize>()
        .map_err(|e| Error::MalformedInput(format!("frame count {:?}: {}", trimmed, e)))
}
