use std::fmt;

/// Identifies one editor (a view onto a document) within the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EditorId(pub u64);

/// Identifies one host-allocated decoration style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StyleId(pub u64);

impl fmt::Display for EditorId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "editor#{}", self.0)
	}
}

impl fmt::Display for StyleId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "style#{}", self.0)
	}
}
