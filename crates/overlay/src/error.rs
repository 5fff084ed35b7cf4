use heatline_host::HostError;
use thiserror::Error;

/// Errors surfaced by overlay (re)activation.
#[derive(Debug, Error)]
pub enum OverlayError {
	/// The host failed to allocate the style of one intensity level.
	///
	/// Styles allocated before the failure have already been released.
	#[error("failed to allocate style for intensity level {level}: {source}")]
	StyleAllocation { level: usize, source: HostError },
}

/// Result type for overlay operations.
pub type Result<T> = std::result::Result<T, OverlayError>;
