use std::fmt;
use std::num::NonZeroUsize;

use heatline_primitives::LineIdx;

/// Why a set of line values has no heat gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degenerate {
	/// No values at all (an empty document).
	Empty,
	/// A value was NaN or infinite.
	NonFinite { line: LineIdx },
	/// Every value is equal, including the single-line case.
	Flat,
}

impl fmt::Display for Degenerate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Degenerate::Empty => f.write_str("no line values"),
			Degenerate::NonFinite { line } => write!(f, "non-finite value on line {line}"),
			Degenerate::Flat => f.write_str("all line values are equal"),
		}
	}
}

/// The intensity level of every line for one draw pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelAssignment {
	by_line: Vec<usize>,
	levels: usize,
}

impl LevelAssignment {
	/// Level of `line`, or `None` past the end of the document.
	pub fn level_of(&self, line: LineIdx) -> Option<usize> {
		self.by_line.get(line).copied()
	}

	/// Levels in line order.
	pub fn as_slice(&self) -> &[usize] {
		&self.by_line
	}

	/// Number of levels lines were bucketed into.
	pub fn level_count(&self) -> usize {
		self.levels
	}

	/// Number of lines assigned.
	pub fn line_count(&self) -> usize {
		self.by_line.len()
	}

	/// `(line, level)` pairs in line order.
	pub fn iter(&self) -> impl Iterator<Item = (LineIdx, usize)> + '_ {
		self.by_line.iter().copied().enumerate()
	}

	/// Groups lines by level. Levels with no lines get an empty list.
	pub fn lines_by_level(&self) -> Vec<Vec<LineIdx>> {
		let mut grouped = vec![Vec::new(); self.levels];
		for (line, level) in self.iter() {
			grouped[level].push(line);
		}
		grouped
	}
}

/// Buckets `values` (one per line) into `levels` equal-width intervals
/// between their minimum and maximum.
///
/// Line `i` lands in `min(levels - 1, floor((v - min) / ((max - min) / levels)))`.
/// The lowest value maps to level 0 and the highest to `levels - 1`.
pub fn assign_levels(values: &[f64], levels: NonZeroUsize) -> Result<LevelAssignment, Degenerate> {
	if values.is_empty() {
		return Err(Degenerate::Empty);
	}
	if let Some(line) = values.iter().position(|v| !v.is_finite()) {
		return Err(Degenerate::NonFinite { line });
	}

	let (min, max) = values
		.iter()
		.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
	if max == min {
		return Err(Degenerate::Flat);
	}

	let n = levels.get();
	// Spans wider than f64::MAX are measured at half scale so they stay finite.
	let scale = if (max - min).is_finite() { 1.0 } else { 0.5 };
	let per_level = (max * scale - min * scale) / n as f64;
	let top = n - 1;
	// Float-to-int `as` saturates, so overflowing quotients land on the clamp.
	let by_line = values
		.iter()
		.map(|&v| (((v * scale - min * scale) / per_level).floor() as usize).min(top))
		.collect();

	Ok(LevelAssignment { by_line, levels: n })
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use rstest::rstest;

	use super::*;

	fn levels(n: usize) -> NonZeroUsize {
		NonZeroUsize::new(n).expect("non-zero level count")
	}

	#[test]
	fn four_evenly_spaced_values() {
		let assignment = assign_levels(&[10.0, 20.0, 30.0, 40.0], levels(4)).unwrap();
		assert_eq!(assignment.as_slice(), &[0, 1, 2, 3]);
		assert_eq!(assignment.lines_by_level(), vec![vec![0], vec![1], vec![2], vec![3]]);
	}

	#[test]
	fn unsorted_values_and_empty_levels() {
		let assignment = assign_levels(&[40.0, 10.0, 11.0, 12.0], levels(4)).unwrap();
		assert_eq!(assignment.as_slice(), &[3, 0, 0, 0]);
		assert_eq!(assignment.lines_by_level(), vec![vec![1, 2, 3], vec![], vec![], vec![0]]);
		assert_eq!(assignment.level_of(0), Some(3));
		assert_eq!(assignment.level_of(4), None);
	}

	#[test]
	fn single_level_takes_every_line() {
		let assignment = assign_levels(&[1.0, 500.0, 999.0], levels(1)).unwrap();
		assert_eq!(assignment.as_slice(), &[0, 0, 0]);
	}

	#[rstest]
	#[case(&[], Degenerate::Empty)]
	#[case(&[42.0], Degenerate::Flat)]
	#[case(&[7.0, 7.0, 7.0], Degenerate::Flat)]
	#[case(&[1.0, f64::NAN, 3.0], Degenerate::NonFinite { line: 1 })]
	#[case(&[f64::INFINITY, 1.0], Degenerate::NonFinite { line: 0 })]
	fn degenerate_inputs(#[case] values: &[f64], #[case] expected: Degenerate) {
		assert_eq!(assign_levels(values, levels(4)), Err(expected));
	}

	#[test]
	fn tiny_spread_near_max_is_clamped() {
		let values = [0.0, 1.0 - f64::EPSILON, 1.0];
		let assignment = assign_levels(&values, levels(100)).unwrap();
		assert_eq!(assignment.as_slice(), &[0, 99, 99]);
	}

	#[test]
	fn span_wider_than_f64_max_keeps_extremes_apart() {
		let assignment = assign_levels(&[-1.0e308, 0.0, 1.0e308], levels(4)).unwrap();
		assert_eq!(assignment.as_slice(), &[0, 2, 3]);

		let assignment = assign_levels(&[f64::MAX, -f64::MAX], levels(100)).unwrap();
		assert_eq!(assignment.as_slice(), &[99, 0]);
	}

	proptest! {
		#[test]
		fn every_line_gets_one_level_in_range(
			values in prop::collection::vec(0.0f64..1000.0, 2..200),
			n in 2usize..150,
		) {
			prop_assume!(values.iter().any(|&v| v != values[0]));
			let assignment = assign_levels(&values, levels(n)).unwrap();

			prop_assert_eq!(assignment.line_count(), values.len());
			prop_assert!(assignment.as_slice().iter().all(|&level| level < n));

			let grouped = assignment.lines_by_level();
			prop_assert_eq!(grouped.len(), n);
			prop_assert_eq!(grouped.iter().map(Vec::len).sum::<usize>(), values.len());

			let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
			let min = values.iter().copied().fold(f64::INFINITY, f64::min);
			for (line, &v) in values.iter().enumerate() {
				if v == max {
					prop_assert_eq!(assignment.level_of(line), Some(n - 1));
				}
				if v == min {
					prop_assert_eq!(assignment.level_of(line), Some(0));
				}
			}
		}

		#[test]
		fn extreme_values_reach_both_ends(
			low in -f64::MAX..-1e300,
			high in 1e300..f64::MAX,
			n in 2usize..1000,
		) {
			let assignment = assign_levels(&[high, low], levels(n)).unwrap();
			prop_assert_eq!(assignment.as_slice(), &[n - 1, 0]);
		}

		#[test]
		fn levels_are_monotonic_in_value(
			values in prop::collection::vec(-1e6f64..1e6, 2..100),
			n in 1usize..64,
		) {
			prop_assume!(values.iter().any(|&v| v != values[0]));
			let assignment = assign_levels(&values, levels(n)).unwrap();
			for (a, &va) in values.iter().enumerate() {
				for (b, &vb) in values.iter().enumerate() {
					if va < vb {
						prop_assert!(assignment.level_of(a) <= assignment.level_of(b));
					}
				}
			}
		}
	}
}
