//! Capability interface between the heat map overlay and its editor host.
//!
//! The overlay never talks to an editor directly. Everything it needs (events,
//! documents, decoration resources, configuration) is reached through the
//! traits in this crate, bundled together in [`HostCapabilities`]:
//!
//! - [`EditorEventSource`]: focus and selection change notifications
//! - [`Workbench`]: the currently focused editor
//! - [`DecorationStyleRegistry`]: allocation of host rendering resources
//! - [`EditorRenderer`]: applying decoration range sets to an editor
//! - [`ConfigurationStore`]: read-only settings lookup
//!
//! [`memory::MemoryHost`] implements all of them in process, for tests and for
//! embedders that drive the overlay without a real editor.

mod capabilities;
/// Read-only configuration lookup.
pub mod config;
/// Decoration styles and rendering.
pub mod decoration;
/// Documents and document-selector filters.
pub mod document;
/// Editors and focus tracking.
pub mod editor;
mod error;
/// Editor event streams and subscriptions.
pub mod event;
/// Identifier types for host entities.
pub mod ids;
/// In-process host implementation.
pub mod memory;

pub use capabilities::HostCapabilities;
pub use config::{ConfigValue, ConfigurationStore};
pub use decoration::{DecorationStyleRegistry, EditorRenderer, VisualStyle};
pub use document::{Document, DocumentFilter, DocumentSelector};
pub use editor::{Editor, EditorHandle, Workbench};
pub use error::{HostError, Result};
pub use event::{EditorEvent, EditorEventSource, EventHandler, EventKind, Subscription};
pub use heatline_primitives::{LineIdx, LineRange, Position, Rgb, Rgba, StyleSpec};
pub use ids::{EditorId, StyleId};
