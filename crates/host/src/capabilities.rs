use std::sync::Arc;

use crate::{ConfigurationStore, DecorationStyleRegistry, EditorEventSource, EditorRenderer, Workbench};

/// The set of host services an overlay is constructed against.
///
/// Cloning is cheap; every capability is shared.
#[derive(Clone)]
pub struct HostCapabilities {
	pub events: Arc<dyn EditorEventSource>,
	pub workbench: Arc<dyn Workbench>,
	pub styles: Arc<dyn DecorationStyleRegistry>,
	pub renderer: Arc<dyn EditorRenderer>,
	pub config: Arc<dyn ConfigurationStore>,
}

impl HostCapabilities {
	/// Bundles a single object implementing every capability.
	pub fn from_host<H>(host: Arc<H>) -> Self
	where
		H: EditorEventSource + Workbench + DecorationStyleRegistry + EditorRenderer + ConfigurationStore + 'static,
	{
		Self {
			events: host.clone(),
			workbench: host.clone(),
			styles: host.clone(),
			renderer: host.clone(),
			config: host,
		}
	}
}
