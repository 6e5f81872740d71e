//! Per-step frame state tracking.
//!
//! A simulation run produces one [`StepRecord`] per reference, each holding
//! a full [`FrameSet`] snapshot taken *after* the reference was served.
//!
//! # Components
//! - [`Slot`] / [`FrameSet`] - the frames and what they hold
//! - [`FrameTimeline`] - append-only sequence of step snapshots
//! - [`Statistics`] - hit/fault totals derived from a timeline

mod frame_set;
mod stats;
#[allow(clippy::module_inception)]
mod timeline;

pub use frame_set::{FrameSet, Slot};
pub use stats::Statistics;
pub use timeline::{FrameTimeline, StepRecord};
