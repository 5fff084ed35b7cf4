//! TOML-backed configuration store.

use std::path::Path;

use heatline_host::{ConfigValue, ConfigurationStore};
use toml::{Table, Value};

use crate::error::{ConfigError, Result};

/// A parsed TOML document with one table per namespace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TomlConfigStore {
	namespaces: Table,
}

impl TomlConfigStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a TOML string.
	///
	/// Every top-level key must hold a table; values outside a namespace are
	/// rejected rather than silently ignored.
	pub fn parse(input: &str) -> Result<Self> {
		let namespaces: Table = toml::from_str(input)?;
		if let Some((name, _)) = namespaces.iter().find(|(_, v)| !v.is_table()) {
			return Err(ConfigError::NotATable(name.clone()));
		}
		Ok(Self { namespaces })
	}

	/// Loads configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Merges another store into this one.
	///
	/// Keys from `other` override keys in `self`; namespaces are merged key by key.
	pub fn merge(&mut self, other: TomlConfigStore) {
		for (name, value) in other.namespaces {
			let Value::Table(incoming) = value else {
				continue;
			};
			match self.namespaces.get_mut(&name) {
				Some(Value::Table(existing)) => existing.extend(incoming),
				_ => {
					self.namespaces.insert(name, Value::Table(incoming));
				}
			}
		}
	}

	/// Sets a single value, creating the namespace if needed.
	pub fn set(&mut self, namespace: &str, key: &str, value: impl Into<Value>) {
		let entry = self
			.namespaces
			.entry(namespace.to_string())
			.or_insert_with(|| Value::Table(Table::new()));
		if let Value::Table(table) = entry {
			table.insert(key.to_string(), value.into());
		}
	}

	/// Names of the namespaces present.
	pub fn namespaces(&self) -> impl Iterator<Item = &str> {
		self.namespaces.keys().map(String::as_str)
	}

	/// Returns true if no namespace is present.
	pub fn is_empty(&self) -> bool {
		self.namespaces.is_empty()
	}
}

fn to_config_value(value: &Value) -> Option<ConfigValue> {
	match value {
		Value::String(s) => Some(ConfigValue::String(s.clone())),
		Value::Integer(i) => Some(ConfigValue::Int(*i)),
		Value::Float(f) => Some(ConfigValue::Float(*f)),
		Value::Boolean(b) => Some(ConfigValue::Bool(*b)),
		Value::Datetime(_) | Value::Array(_) | Value::Table(_) => None,
	}
}

impl ConfigurationStore for TomlConfigStore {
	fn get(&self, namespace: &str, key: &str) -> Option<ConfigValue> {
		let value = self.namespaces.get(namespace)?.as_table()?.get(key)?;
		let converted = to_config_value(value);
		if converted.is_none() {
			tracing::debug!(namespace, key, kind = value.type_str(), "unsupported config value type");
		}
		converted
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reads_namespaced_values() {
		let store = TomlConfigStore::parse(
			r#"
			[heatmap]
			heatLevels = 8
			heatColour = "0,128,255"
			ratio = 0.5
			enabled = true
			"#,
		)
		.unwrap();

		assert_eq!(store.get("heatmap", "heatLevels"), Some(ConfigValue::Int(8)));
		assert_eq!(store.get("heatmap", "heatColour"), Some(ConfigValue::String("0,128,255".into())));
		assert_eq!(store.get("heatmap", "ratio"), Some(ConfigValue::Float(0.5)));
		assert_eq!(store.get("heatmap", "enabled"), Some(ConfigValue::Bool(true)));
		assert_eq!(store.get("heatmap", "missing"), None);
		assert_eq!(store.get("editor", "heatLevels"), None);
	}

	#[test]
	fn unsupported_values_read_as_absent() {
		let store = TomlConfigStore::parse("[heatmap]\nheatLevels = [1, 2]\n").unwrap();
		assert_eq!(store.get("heatmap", "heatLevels"), None);
	}

	#[test]
	fn rejects_top_level_values() {
		let err = TomlConfigStore::parse("heatLevels = 3\n").unwrap_err();
		assert!(matches!(err, ConfigError::NotATable(name) if name == "heatLevels"));
	}

	#[test]
	fn rejects_invalid_syntax() {
		assert!(matches!(TomlConfigStore::parse("[heatmap\n"), Err(ConfigError::Toml(_))));
	}

	#[test]
	fn merge_overrides_per_key() {
		let mut base = TomlConfigStore::parse("[heatmap]\nheatLevels = 100\nheatColour = \"200,0,0\"\n").unwrap();
		let local = TomlConfigStore::parse("[heatmap]\nheatLevels = 10\n[editor]\ntabWidth = 2\n").unwrap();
		base.merge(local);

		assert_eq!(base.get("heatmap", "heatLevels"), Some(ConfigValue::Int(10)));
		assert_eq!(base.get("heatmap", "heatColour"), Some(ConfigValue::String("200,0,0".into())));
		assert_eq!(base.get("editor", "tabWidth"), Some(ConfigValue::Int(2)));
	}

	#[test]
	fn set_creates_namespace() {
		let mut store = TomlConfigStore::new();
		assert!(store.is_empty());
		store.set("heatmap", "heatLevels", 4i64);
		assert_eq!(store.get("heatmap", "heatLevels"), Some(ConfigValue::Int(4)));
		assert_eq!(store.namespaces().collect::<Vec<_>>(), vec!["heatmap"]);
	}
}
