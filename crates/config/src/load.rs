//! Config directory loading.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::store::TomlConfigStore;

/// Files read from a config directory, lowest precedence first.
pub const CONFIG_LAYERS: [&str; 2] = ["config.toml", "config.local.toml"];

/// Aggregate result of loading the configuration layers of a directory.
#[derive(Debug, Default)]
pub struct ConfigLoadReport {
	/// Merged store if any layer was loaded successfully.
	pub store: Option<TomlConfigStore>,
	/// File read or parse errors keyed by source file path.
	pub errors: Vec<(PathBuf, ConfigError)>,
}

impl ConfigLoadReport {
	/// Returns the merged store, or an empty one when nothing loaded.
	pub fn into_store(self) -> TomlConfigStore {
		self.store.unwrap_or_default()
	}
}

/// Loads and merges the [`CONFIG_LAYERS`] found in `config_dir`.
///
/// Missing files are skipped. A layer that fails to read or parse is reported
/// in [`ConfigLoadReport::errors`] and the remaining layers still apply.
pub fn load_config_from_dir(config_dir: &Path) -> ConfigLoadReport {
	let mut report = ConfigLoadReport::default();
	let mut merged = TomlConfigStore::new();
	let mut found_any = false;

	for filename in CONFIG_LAYERS {
		let path = config_dir.join(filename);
		if !path.exists() {
			continue;
		}

		match TomlConfigStore::load(&path) {
			Ok(layer) => {
				merged.merge(layer);
				found_any = true;
			}
			Err(error) => {
				tracing::warn!(path = %path.display(), %error, "failed to load config layer");
				report.errors.push((path, error));
			}
		}
	}

	if found_any {
		report.store = Some(merged);
	}

	report
}
