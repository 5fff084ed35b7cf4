//! Heat map overlay: colors every line of the active document by a per-line value.
//!
//! [`HeatMapOverlay`] keeps one host decoration style per intensity level,
//! listens for focus and selection changes, and on each draw pass buckets the
//! document's lines by value and hands each level its set of line ranges.
//! All host interaction goes through [`heatline_host::HostCapabilities`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use heatline_host::HostCapabilities;
//! use heatline_host::memory::{MemoryDocument, MemoryHost};
//! use heatline_overlay::{HeatMapOverlay, OverlayOptions};
//!
//! let host = Arc::new(MemoryHost::new());
//! host.set_config("heatmap", "heatLevels", 4i64);
//!
//! let values = |_: &dyn heatline_host::Document| vec![10.0, 20.0, 30.0, 40.0];
//! let overlay = HeatMapOverlay::new(
//! 	HostCapabilities::from_host(host.clone()),
//! 	OverlayOptions::new(true).with_source(values),
//! )?;
//!
//! let editor = host.open(MemoryDocument::new(["a", "b", "c", "d"], "text"));
//! host.focus(Some(editor.clone()));
//! assert_eq!(host.decorations_for(editor.id()).len(), 4);
//! # drop(overlay);
//! # Ok::<(), heatline_overlay::OverlayError>(())
//! ```

mod error;
/// Bucketing of line values into intensity levels.
pub mod levels;
mod overlay;
/// Per-line value sources.
pub mod source;
/// Intensity level styles.
pub mod styles;

pub use error::{OverlayError, Result};
pub use heatline_config::HeatMapSettings;
pub use levels::{Degenerate, LevelAssignment, assign_levels};
pub use overlay::{DrawOutcome, HeatMapOverlay, OverlayOptions, SkipReason};
pub use source::{LineValueSource, RandomLineValues};
pub use styles::{StyleSet, alpha_for_level};
