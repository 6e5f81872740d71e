//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The simulation itself is a deterministic computation, so every variant
/// is a configuration or input error. Nothing here is worth retrying.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading a reference string or the frame count.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The simulator was configured with unusable parameters
    /// (e.g. zero frames).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// User-supplied text could not be parsed.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// A timeline was queried or appended at the wrong step.
    ///
    /// The simulator drives timelines sequentially, so this indicates a bug.
    #[error("Step {step} out of bounds for timeline of length {len}")]
    StepOutOfBounds { step: usize, len: usize },
}
