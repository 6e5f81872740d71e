//! pagesim - a page replacement simulator.
//!
//! Replays a fixed page-reference string through a bank of frames and
//! records, step by step, which pages are resident and which references
//! faulted. Three eviction policies are provided so their behavior can be
//! compared on the same input.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Reporter (report)                        │   │
//! │  │        frame tables, totals, comparison summary          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↑                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Simulator (simulator)                     │   │
//! │  │      ReferenceString × capacity → FrameTimeline          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                 ↓                            ↓                  │
//! │  ┌──────────────────────────┐  ┌──────────────────────────┐    │
//! │  │  Eviction (replacer)     │  │  State (timeline)        │    │
//! │  │  FIFO | LRU | Optimal    │  │  FrameSet + StepRecord   │    │
//! │  └──────────────────────────┘  └──────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`reference`] - The reference string and its history/lookahead scans
//! - [`timeline`] - Frame sets and per-step snapshots
//! - [`replacer`] - Eviction policy implementations
//! - [`simulator`] - Drives a reference string through a policy
//! - [`report`] - Text rendering
//!
//! # Quick Start
//! ```
//! use pagesim::{report, PolicyKind, ReferenceString, Simulator};
//!
//! let refs = ReferenceString::default();
//! let sim = Simulator::new(refs.clone(), 3).unwrap();
//!
//! let timeline = sim.run(PolicyKind::Lru).unwrap();
//! println!("{}", report::render(&refs, &timeline));
//! ```

// Core modules
pub mod common;
pub mod reference;
pub mod replacer;
pub mod report;
pub mod simulator;
pub mod timeline;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameId, PageId, Result};
pub use reference::ReferenceString;
pub use replacer::{EvictionPolicy, PolicyKind};
pub use simulator::{simulate, PolicyRun, Simulator};
pub use timeline::{FrameSet, FrameTimeline, Slot, Statistics, StepRecord};
