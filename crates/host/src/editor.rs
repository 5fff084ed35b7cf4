use std::sync::Arc;

use crate::{Document, EditorId};

/// A view onto a document.
pub trait Editor: Send + Sync {
	/// Stable identifier of this editor within the host.
	fn id(&self) -> EditorId;

	/// The document currently displayed.
	fn document(&self) -> Arc<dyn Document>;
}

/// Shared handle to an editor.
pub type EditorHandle = Arc<dyn Editor>;

/// Focus tracking for the host's editor area.
pub trait Workbench: Send + Sync {
	/// Returns the focused editor, if any.
	fn active_editor(&self) -> Option<EditorHandle>;
}
