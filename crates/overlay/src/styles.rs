use std::num::NonZeroUsize;
use std::sync::Arc;

use heatline_config::HeatMapSettings;
use heatline_host::{DecorationStyleRegistry, VisualStyle};
use heatline_primitives::StyleSpec;

use crate::error::{OverlayError, Result};

/// Opacity of intensity level `level` out of `levels`.
///
/// Level 0 is fully opaque and the last level fully transparent, linearly in
/// between. A single level is fully opaque.
pub fn alpha_for_level(level: usize, levels: NonZeroUsize) -> f32 {
	let n = levels.get();
	if n == 1 {
		return 1.0;
	}
	1.0 - level as f32 / (n - 1) as f32
}

/// The style specification of every level, highest intensity first.
pub fn level_specs(settings: &HeatMapSettings) -> impl Iterator<Item = StyleSpec> + use<> {
	let HeatMapSettings { levels, colour } = *settings;
	(0..levels.get()).map(move |level| StyleSpec::background(colour.with_alpha(alpha_for_level(level, levels))))
}

/// The live set of per-level styles. Dropping the set releases every style.
#[derive(Debug, Default)]
pub struct StyleSet {
	styles: Vec<VisualStyle>,
}

impl StyleSet {
	pub fn empty() -> Self {
		Self::default()
	}

	/// Allocates one style per level.
	///
	/// On failure the styles allocated so far are released before returning.
	pub fn allocate(registry: &Arc<dyn DecorationStyleRegistry>, settings: &HeatMapSettings) -> Result<Self> {
		let mut styles = Vec::new();
		for (level, spec) in level_specs(settings).enumerate() {
			let style = VisualStyle::create(registry, spec).map_err(|source| OverlayError::StyleAllocation { level, source })?;
			styles.push(style);
		}
		Ok(Self { styles })
	}

	/// Releases every style, returning how many were held.
	pub fn release(&mut self) -> usize {
		let released = self.styles.len();
		self.styles.clear();
		released
	}

	/// Number of levels, or `None` for an empty set.
	pub fn level_count(&self) -> Option<NonZeroUsize> {
		NonZeroUsize::new(self.styles.len())
	}

	pub fn len(&self) -> usize {
		self.styles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.styles.is_empty()
	}

	/// Style of `level`.
	pub fn get(&self, level: usize) -> Option<&VisualStyle> {
		self.styles.get(level)
	}

	/// Styles from level 0 upward.
	pub fn iter(&self) -> std::slice::Iter<'_, VisualStyle> {
		self.styles.iter()
	}
}
