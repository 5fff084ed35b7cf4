use std::fmt;
use std::sync::Arc;

use heatline_primitives::{LineRange, StyleSpec};

use crate::{EditorId, Result, StyleId};

/// Allocation of host rendering resources for decoration styles.
pub trait DecorationStyleRegistry: Send + Sync {
	/// Allocates a style. Every successful call must be paired with [`dispose`].
	///
	/// [`dispose`]: DecorationStyleRegistry::dispose
	fn create(&self, spec: &StyleSpec) -> Result<StyleId>;

	/// Releases a style and removes its decorations from every editor.
	fn dispose(&self, style: StyleId);
}

/// Application of decorations to editors.
pub trait EditorRenderer: Send + Sync {
	/// Replaces the full range set for `style` on `editor`.
	///
	/// An empty slice clears the style from that editor. Calls are idempotent.
	fn set_decorations(&self, editor: EditorId, style: StyleId, ranges: &[LineRange]);
}

/// An allocated decoration style, released when dropped.
pub struct VisualStyle {
	id: StyleId,
	spec: StyleSpec,
	registry: Arc<dyn DecorationStyleRegistry>,
}

impl VisualStyle {
	/// Allocates a style from `registry`.
	pub fn create(registry: &Arc<dyn DecorationStyleRegistry>, spec: StyleSpec) -> Result<Self> {
		let id = registry.create(&spec)?;
		Ok(Self {
			id,
			spec,
			registry: registry.clone(),
		})
	}

	/// Host identifier of this style.
	pub fn id(&self) -> StyleId {
		self.id
	}

	/// The specification the style was created from.
	pub fn spec(&self) -> &StyleSpec {
		&self.spec
	}
}

impl Drop for VisualStyle {
	fn drop(&mut self) {
		self.registry.dispose(self.id);
	}
}

impl fmt::Debug for VisualStyle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("VisualStyle").field("id", &self.id).field("spec", &self.spec).finish()
	}
}
