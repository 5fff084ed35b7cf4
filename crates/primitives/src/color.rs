//! Color types for line backgrounds.
//!
//! These types carry no dependency on any rendering backend. Hosts convert
//! [`Rgba`] into whatever their decoration pipeline expects; the [`Display`]
//! form is the CSS `rgba(r, g, b, a)` notation most editor hosts accept.
//!
//! [`Display`]: std::fmt::Display

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced when parsing an `"r,g,b"` channel triple.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
	/// The input did not contain exactly three comma-separated channels.
	#[error("expected three comma-separated channels, found {0}")]
	ChannelCount(usize),
	/// A channel was not an integer in `0..=255`.
	#[error("invalid color channel {0:?} (expected 0-255)")]
	InvalidChannel(String),
}

/// An opaque true-color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Rgb {
	/// Creates a color from its three channels.
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Returns this color at the given opacity.
	pub fn with_alpha(self, alpha: f32) -> Rgba {
		Rgba::new(self, alpha)
	}
}

impl FromStr for Rgb {
	type Err = ParseColorError;

	/// Parses `"r,g,b"`; whitespace around each channel is ignored.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let parts: Vec<&str> = s.split(',').map(str::trim).collect();
		let [r, g, b] = parts.as_slice() else {
			return Err(ParseColorError::ChannelCount(parts.len()));
		};
		Ok(Self::new(parse_channel(r)?, parse_channel(g)?, parse_channel(b)?))
	}
}

fn parse_channel(c: &str) -> Result<u8, ParseColorError> {
	c.parse::<u8>().map_err(|_| ParseColorError::InvalidChannel(c.to_string()))
}

impl fmt::Display for Rgb {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{},{},{}", self.r, self.g, self.b)
	}
}

/// A color with an opacity in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
	pub rgb: Rgb,
	pub alpha: f32,
}

impl Rgba {
	/// Creates a translucent color. `alpha` is clamped to `[0.0, 1.0]`; NaN becomes opaque.
	pub fn new(rgb: Rgb, alpha: f32) -> Self {
		let alpha = if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) };
		Self { rgb, alpha }
	}

	/// Returns true if the color is fully opaque.
	pub fn is_opaque(&self) -> bool {
		self.alpha >= 1.0
	}

	/// Returns true if the color is fully transparent.
	pub fn is_transparent(&self) -> bool {
		self.alpha <= 0.0
	}
}

impl fmt::Display for Rgba {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "rgba({}, {}, {}, {})", self.rgb.r, self.rgb.g, self.rgb.b, self.alpha)
	}
}
