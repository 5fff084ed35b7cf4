//! Configuration for the heat map overlay.
//!
//! Settings live in TOML documents, one table per namespace:
//!
//! ```toml
//! [heatmap]
//! heatLevels = 100
//! heatColour = "200,0,0"
//! ```
//!
//! [`TomlConfigStore`] exposes such a document through the host's
//! [`ConfigurationStore`] trait, [`load_config_from_dir`] layers the files of
//! a config directory, and [`HeatMapSettings::from_store`] reads the overlay's
//! two settings from any store, falling back to defaults for anything missing
//! or malformed.

pub mod error;
pub mod load;
pub mod settings;
pub mod store;

pub use error::{ConfigError, Result};
pub use heatline_host::{ConfigValue, ConfigurationStore};
pub use load::{CONFIG_LAYERS, ConfigLoadReport, load_config_from_dir};
pub use settings::HeatMapSettings;
pub use store::TomlConfigStore;
