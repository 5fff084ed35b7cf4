use crate::color::Rgba;

/// Visual treatment a host applies to decorated ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSpec {
	/// Background fill behind decorated text.
	pub background: Rgba,
}

impl StyleSpec {
	/// Creates a background-only style covering the text of each range.
	pub fn background(background: Rgba) -> Self {
		Self { background }
	}
}
