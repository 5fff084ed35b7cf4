/// A zero-based line number in a document.
pub type LineIdx = usize;

/// A position in the text, as a line and a character offset within that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
	/// Zero-based line number.
	pub line: LineIdx,
	/// Zero-based character offset within the line.
	pub character: usize,
}

impl Position {
	/// Creates a new position.
	pub const fn new(line: LineIdx, character: usize) -> Self {
		Self { line, character }
	}
}

/// The extent of a single document line, from its first character to the end
/// of its content (line terminator excluded).
///
/// Hosts hand these out from `Document::line_at` and receive them back in
/// decoration sets, so the overlay never builds ranges on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineRange {
	/// Start of the line (inclusive).
	pub start: Position,
	/// End of the line content (exclusive).
	pub end: Position,
}

impl LineRange {
	/// Creates the range covering `len` characters of line `line`.
	pub fn line(line: LineIdx, len: usize) -> Self {
		Self {
			start: Position::new(line, 0),
			end: Position::new(line, len),
		}
	}

	/// Returns the line this range starts on.
	#[inline]
	pub fn line_idx(&self) -> LineIdx {
		self.start.line
	}

	/// Returns true if start equals end (an empty line).
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_line_range_basics() {
		let r = LineRange::line(3, 12);
		assert_eq!(r.line_idx(), 3);
		assert_eq!(r.start, Position::new(3, 0));
		assert_eq!(r.end, Position::new(3, 12));
		assert!(!r.is_empty());
	}

	#[test]
	fn test_empty_line() {
		let r = LineRange::line(0, 0);
		assert!(r.is_empty());
	}
}
