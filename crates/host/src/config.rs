use std::fmt;

/// A configuration value as stored by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
	/// Boolean value (true/false).
	Bool(bool),
	/// Integer value.
	Int(i64),
	/// Floating point value.
	Float(f64),
	/// String value.
	String(String),
}

impl ConfigValue {
	/// Returns the integer value if this is an `Int` variant, or a `Float` with no fractional part.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			ConfigValue::Int(v) => Some(*v),
			ConfigValue::Float(v) if v.fract() == 0.0 && v.is_finite() => Some(*v as i64),
			_ => None,
		}
	}

	/// Returns the string value if this is a `String` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			ConfigValue::String(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the name of this value's type, for diagnostics.
	pub fn type_name(&self) -> &'static str {
		match self {
			ConfigValue::Bool(_) => "bool",
			ConfigValue::Int(_) => "int",
			ConfigValue::Float(_) => "float",
			ConfigValue::String(_) => "string",
		}
	}
}

impl fmt::Display for ConfigValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ConfigValue::Bool(v) => write!(f, "{v}"),
			ConfigValue::Int(v) => write!(f, "{v}"),
			ConfigValue::Float(v) => write!(f, "{v}"),
			ConfigValue::String(v) => write!(f, "{v:?}"),
		}
	}
}

impl From<bool> for ConfigValue {
	fn from(value: bool) -> Self {
		ConfigValue::Bool(value)
	}
}

impl From<i64> for ConfigValue {
	fn from(value: i64) -> Self {
		ConfigValue::Int(value)
	}
}

impl From<f64> for ConfigValue {
	fn from(value: f64) -> Self {
		ConfigValue::Float(value)
	}
}

impl From<&str> for ConfigValue {
	fn from(value: &str) -> Self {
		ConfigValue::String(value.to_string())
	}
}

impl From<String> for ConfigValue {
	fn from(value: String) -> Self {
		ConfigValue::String(value)
	}
}

/// Read-only access to the host's settings.
///
/// Keys are grouped by namespace (`heatmap`, `editor`, ...). Lookups never
/// fail: a missing or unreadable key is simply absent.
pub trait ConfigurationStore: Send + Sync {
	/// Returns the value stored under `namespace.key`, if any.
	fn get(&self, namespace: &str, key: &str) -> Option<ConfigValue>;

	/// Returns the value stored under `namespace.key`, or `default` when absent.
	fn get_or(&self, namespace: &str, key: &str, default: ConfigValue) -> ConfigValue {
		self.get(namespace, key).unwrap_or(default)
	}
}
