//! Error types reported by host capabilities.

use thiserror::Error;

/// Errors a host can report back to the overlay.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
	/// The host could not allocate a decoration style resource.
	#[error("decoration style allocation failed: {0}")]
	StyleAllocation(String),
}

/// Result type for host operations.
pub type Result<T> = std::result::Result<T, HostError>;
