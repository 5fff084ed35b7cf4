use heatline_host::Document;
use rand::Rng;

/// Produces the value of every line of a document for one draw pass.
///
/// Implementations return exactly `document.line_count()` values; a pass
/// that receives any other number draws nothing. Values are never cached
/// between passes.
///
/// Closures `FnMut(&dyn Document) -> Vec<f64>` implement this trait, which is
/// how tests inject fixed data.
pub trait LineValueSource: Send {
	fn values(&mut self, document: &dyn Document) -> Vec<f64>;
}

impl<F> LineValueSource for F
where
	F: FnMut(&dyn Document) -> Vec<f64> + Send,
{
	fn values(&mut self, document: &dyn Document) -> Vec<f64> {
		self(document)
	}
}

/// Placeholder metric: independent uniform values in `[0, upper)`, fresh on
/// every pass and unseeded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomLineValues {
	upper: f64,
}

impl RandomLineValues {
	pub const DEFAULT_UPPER: f64 = 1000.0;

	/// Draws values in `[0, upper)`. A non-positive or non-finite bound falls
	/// back to [`Self::DEFAULT_UPPER`].
	pub fn new(upper: f64) -> Self {
		let upper = if upper.is_finite() && upper > 0.0 { upper } else { Self::DEFAULT_UPPER };
		Self { upper }
	}

	pub fn upper(&self) -> f64 {
		self.upper
	}
}

impl Default for RandomLineValues {
	fn default() -> Self {
		Self::new(Self::DEFAULT_UPPER)
	}
}

impl LineValueSource for RandomLineValues {
	fn values(&mut self, document: &dyn Document) -> Vec<f64> {
		let mut rng = rand::rng();
		(0..document.line_count()).map(|_| rng.random_range(0.0..self.upper)).collect()
	}
}
