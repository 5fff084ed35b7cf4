use heatline_primitives::{LineIdx, LineRange};

/// A text buffer as seen through an editor.
pub trait Document: Send + Sync {
	/// Number of lines in the document. An empty document has zero lines.
	fn line_count(&self) -> usize;

	/// Returns the range of line `line`.
	///
	/// Callers only ask for `line < line_count()`.
	fn line_at(&self, line: LineIdx) -> LineRange;

	/// Language identifier (e.g. `"rust"`, `"coq"`).
	fn language_id(&self) -> &str;

	/// URI scheme the document was loaded from (e.g. `"file"`, `"untitled"`).
	fn scheme(&self) -> &str;

	/// Returns true if this document passes `selector`.
	fn matches_selector(&self, selector: &DocumentSelector) -> bool {
		selector.matches(self.language_id(), self.scheme())
	}
}

/// One clause of a [`DocumentSelector`]. Unset fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFilter {
	pub language: Option<String>,
	pub scheme: Option<String>,
}

impl DocumentFilter {
	/// Matches documents of one language, from any scheme.
	pub fn language(language: impl Into<String>) -> Self {
		Self {
			language: Some(language.into()),
			scheme: None,
		}
	}

	/// Restricts this filter to one scheme.
	pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
		self.scheme = Some(scheme.into());
		self
	}

	fn matches(&self, language: &str, scheme: &str) -> bool {
		self.language.as_deref().is_none_or(|l| l == language) && self.scheme.as_deref().is_none_or(|s| s == scheme)
	}
}

/// Predicate restricting which documents a feature applies to.
///
/// A document matches when any filter matches. The empty selector matches
/// every document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSelector {
	filters: Vec<DocumentFilter>,
}

impl DocumentSelector {
	/// A selector accepting every document.
	pub fn any() -> Self {
		Self::default()
	}

	/// Builds a selector from a list of filters.
	pub fn new(filters: impl IntoIterator<Item = DocumentFilter>) -> Self {
		Self {
			filters: filters.into_iter().collect(),
		}
	}

	/// Adds a filter clause.
	pub fn with(mut self, filter: DocumentFilter) -> Self {
		self.filters.push(filter);
		self
	}

	/// Returns true if a document with this language and scheme passes.
	pub fn matches(&self, language: &str, scheme: &str) -> bool {
		self.filters.is_empty() || self.filters.iter().any(|f| f.matches(language, scheme))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_selector_matches_everything() {
		let selector = DocumentSelector::any();
		assert!(selector.matches("rust", "file"));
		assert!(selector.matches("", "untitled"));
	}

	#[test]
	fn filter_fields_are_conjunctive() {
		let selector = DocumentSelector::any().with(DocumentFilter::language("coq").with_scheme("file"));
		assert!(selector.matches("coq", "file"));
		assert!(!selector.matches("coq", "untitled"));
		assert!(!selector.matches("rust", "file"));
	}

	#[test]
	fn filters_are_disjunctive() {
		let selector = DocumentSelector::new([DocumentFilter::language("coq"), DocumentFilter::language("lean")]);
		assert!(selector.matches("coq", "file"));
		assert!(selector.matches("lean", "untitled"));
		assert!(!selector.matches("rust", "file"));
	}
}
