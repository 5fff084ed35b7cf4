//! The overlay's user-facing settings.

use std::num::NonZeroUsize;

use heatline_host::{ConfigValue, ConfigurationStore};
use heatline_primitives::Rgb;

/// Namespace holding the heat map settings.
pub const NAMESPACE: &str = "heatmap";
/// Number of intensity levels (integer in `1..=MAX_LEVELS`).
pub const HEAT_LEVELS_KEY: &str = "heatLevels";
/// Background color as an `"r,g,b"` triple.
pub const HEAT_COLOUR_KEY: &str = "heatColour";

pub const DEFAULT_LEVELS: NonZeroUsize = NonZeroUsize::new(100).unwrap();
/// Upper bound on `heatLevels`; each level costs one host style.
pub const MAX_LEVELS: NonZeroUsize = NonZeroUsize::new(1000).unwrap();
pub const DEFAULT_COLOUR: Rgb = Rgb::new(200, 0, 0);

/// Level count and color the overlay builds its styles from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatMapSettings {
	pub levels: NonZeroUsize,
	pub colour: Rgb,
}

impl Default for HeatMapSettings {
	fn default() -> Self {
		Self {
			levels: DEFAULT_LEVELS,
			colour: DEFAULT_COLOUR,
		}
	}
}

impl HeatMapSettings {
	pub fn new(levels: NonZeroUsize, colour: Rgb) -> Self {
		Self { levels, colour }
	}

	/// Reads the settings from `store`.
	///
	/// Never fails: a missing key silently takes its default, a malformed one
	/// takes its default and logs a warning.
	pub fn from_store(store: &dyn ConfigurationStore) -> Self {
		Self {
			levels: read_levels(store.get(NAMESPACE, HEAT_LEVELS_KEY)),
			colour: read_colour(store.get(NAMESPACE, HEAT_COLOUR_KEY)),
		}
	}
}

fn read_levels(value: Option<ConfigValue>) -> NonZeroUsize {
	let Some(value) = value else {
		return DEFAULT_LEVELS;
	};
	let levels = value
		.as_int()
		.and_then(|n| usize::try_from(n).ok())
		.and_then(NonZeroUsize::new)
		.filter(|n| *n <= MAX_LEVELS);
	match levels {
		Some(levels) => levels,
		None => {
			tracing::warn!(
				key = HEAT_LEVELS_KEY,
				%value,
				default = DEFAULT_LEVELS.get(),
				max = MAX_LEVELS.get(),
				"expected an integer in 1..=max, using default"
			);
			DEFAULT_LEVELS
		}
	}
}

fn read_colour(value: Option<ConfigValue>) -> Rgb {
	let Some(value) = value else {
		return DEFAULT_COLOUR;
	};
	let parsed = match value.as_str() {
		Some(s) => s.parse::<Rgb>().map_err(|e| e.to_string()),
		None => Err(format!("expected a string, found {}", value.type_name())),
	};
	parsed.unwrap_or_else(|error| {
		tracing::warn!(key = HEAT_COLOUR_KEY, %value, %error, default = %DEFAULT_COLOUR, "invalid colour, using default");
		DEFAULT_COLOUR
	})
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;
	use crate::TomlConfigStore;

	fn store_with(levels: Option<ConfigValue>, colour: Option<ConfigValue>) -> TomlConfigStore {
		let mut store = TomlConfigStore::new();
		match levels {
			Some(ConfigValue::Int(n)) => store.set(NAMESPACE, HEAT_LEVELS_KEY, n),
			Some(ConfigValue::Float(f)) => store.set(NAMESPACE, HEAT_LEVELS_KEY, f),
			Some(ConfigValue::String(s)) => store.set(NAMESPACE, HEAT_LEVELS_KEY, s),
			Some(ConfigValue::Bool(b)) => store.set(NAMESPACE, HEAT_LEVELS_KEY, b),
			None => {}
		}
		if let Some(ConfigValue::String(s)) = colour {
			store.set(NAMESPACE, HEAT_COLOUR_KEY, s);
		}
		store
	}

	#[test]
	fn empty_store_yields_defaults() {
		let settings = HeatMapSettings::from_store(&TomlConfigStore::new());
		assert_eq!(settings, HeatMapSettings::default());
		assert_eq!(settings.levels.get(), 100);
		assert_eq!(settings.colour, Rgb::new(200, 0, 0));
	}

	#[test]
	fn reads_configured_values() {
		let store = TomlConfigStore::parse("[heatmap]\nheatLevels = 4\nheatColour = \"0,0,255\"\n").unwrap();
		let settings = HeatMapSettings::from_store(&store);
		assert_eq!(settings.levels.get(), 4);
		assert_eq!(settings.colour, Rgb::new(0, 0, 255));
	}

	#[rstest]
	#[case(ConfigValue::Int(0))]
	#[case(ConfigValue::Int(-3))]
	#[case(ConfigValue::Float(2.5))]
	#[case(ConfigValue::String("12".into()))]
	#[case(ConfigValue::Bool(true))]
	#[case(ConfigValue::Int(1001))]
	#[case(ConfigValue::Int(i64::MAX))]
	#[case(ConfigValue::Float(1e300))]
	fn invalid_levels_fall_back(#[case] levels: ConfigValue) {
		let settings = HeatMapSettings::from_store(&store_with(Some(levels), None));
		assert_eq!(settings.levels, DEFAULT_LEVELS);
	}

	#[test]
	fn level_bound_is_inclusive() {
		let settings = HeatMapSettings::from_store(&store_with(Some(ConfigValue::Int(1000)), None));
		assert_eq!(settings.levels, MAX_LEVELS);
	}

	#[test]
	fn integral_float_levels_are_accepted() {
		let settings = HeatMapSettings::from_store(&store_with(Some(ConfigValue::Float(6.0)), None));
		assert_eq!(settings.levels.get(), 6);
	}

	#[rstest]
	#[case("200,0")]
	#[case("red")]
	#[case("300,0,0")]
	fn invalid_colour_falls_back(#[case] colour: &str) {
		let settings = HeatMapSettings::from_store(&store_with(None, Some(colour.into())));
		assert_eq!(settings.colour, DEFAULT_COLOUR);
	}
}
