use std::sync::Arc;

use heatline_primitives::{LineIdx, LineRange};

use crate::{Document, Editor, EditorId};

/// A document held as a list of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryDocument {
	lines: Vec<String>,
	language: String,
	scheme: String,
}

impl MemoryDocument {
	/// Creates a `file`-scheme document from already split lines.
	pub fn new(lines: impl IntoIterator<Item = impl Into<String>>, language: impl Into<String>) -> Self {
		Self {
			lines: lines.into_iter().map(Into::into).collect(),
			language: language.into(),
			scheme: "file".to_string(),
		}
	}

	/// Creates a document by splitting `text` on line terminators.
	///
	/// Like most editors, a trailing newline starts a final empty line, and
	/// empty text is a single empty line.
	pub fn from_text(text: &str, language: impl Into<String>) -> Self {
		let lines = text.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l));
		Self::new(lines, language)
	}

	/// Sets the URI scheme.
	pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
		self.scheme = scheme.into();
		self
	}

	/// Returns the text of line `line`.
	pub fn line_text(&self, line: LineIdx) -> Option<&str> {
		self.lines.get(line).map(String::as_str)
	}
}

impl Document for MemoryDocument {
	fn line_count(&self) -> usize {
		self.lines.len()
	}

	fn line_at(&self, line: LineIdx) -> LineRange {
		let len = self.lines.get(line).map_or(0, |l| l.chars().count());
		LineRange::line(line, len)
	}

	fn language_id(&self) -> &str {
		&self.language
	}

	fn scheme(&self) -> &str {
		&self.scheme
	}
}

/// An editor showing one [`MemoryDocument`].
#[derive(Debug)]
pub struct MemoryEditor {
	pub(super) id: EditorId,
	pub(super) document: Arc<MemoryDocument>,
}

impl Editor for MemoryEditor {
	fn id(&self) -> EditorId {
		self.id
	}

	fn document(&self) -> Arc<dyn Document> {
		self.document.clone()
	}
}
