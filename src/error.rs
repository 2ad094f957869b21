use std::path::PathBuf;

/// Library-level structured errors for scriptstacker.
///
/// Every variant is a configuration mistake surfaced before any body is
/// rewritten. A missing source directory is not an error.
#[derive(Debug, thiserror::Error)]
pub enum StackerError {
	#[error("Config file not found: {path}")]
	ConfigNotFound { path: PathBuf },

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid path declaration for '{kind}': expected exactly one path, got {count}")]
	InvalidDeclaration { kind: String, count: usize },

	#[error("Invalid template '{template}': expected exactly one %s, found {count}")]
	InvalidTemplate { template: String, count: usize },

	#[error("Invalid glob pattern: {pattern}")]
	InvalidGlob {
		pattern: String,
		#[source]
		source: glob::PatternError,
	},

	#[error("Slot marker must not be blank: {slot:?}")]
	BlankSlot { slot: String },

	#[error("Invalid slot marker: {slot}")]
	InvalidSlot {
		slot: String,
		#[source]
		source: regex::Error,
	},

	#[error("Stacker '{kind}' is missing required field '{field}'")]
	IncompleteStacker { kind: String, field: &'static str },

	#[error("No stacker configured for asset kind '{kind}'")]
	UnknownAssetKind { kind: String },
}

/// Result type alias using StackerError.
pub type Result<T> = std::result::Result<T, StackerError>;
