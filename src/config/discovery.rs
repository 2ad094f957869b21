use crate::config::parser::parse_config_file;
use crate::config::types::{EffectiveConfig, LoadedConfig};
use crate::error::Result;
use std::path::Path;

/// File name looked up in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".scriptstacker.toml";

/// Find the nearest config file, walking up from `start_dir`.
///
/// The first `.scriptstacker.toml` found wins; configs further up the tree
/// are not consulted.
pub fn discover_config(start_dir: &Path) -> Result<Option<LoadedConfig>> {
	for dir in start_dir.ancestors() {
		let config_path = dir.join(CONFIG_FILE_NAME);

		if config_path.is_file() {
			tracing::debug!(path = %config_path.display(), "found config file");
			let config = parse_config_file(&config_path)?;
			return Ok(Some(LoadedConfig {
				config,
				path: config_path,
			}));
		}
	}

	Ok(None)
}

/// Load a config from an explicit path.
pub fn load_config(path: &Path) -> Result<LoadedConfig> {
	let config = parse_config_file(path)?;
	Ok(LoadedConfig {
		config,
		path: path.to_path_buf(),
	})
}

/// Resolve the effective configuration.
///
/// An explicit path is loaded as-is; otherwise the nearest config above
/// `start_dir` is used. With no config file at all the defaults apply and
/// the path spec is empty.
pub fn load_effective_config(
	start_dir: &Path,
	explicit: Option<&Path>,
) -> Result<EffectiveConfig> {
	let loaded = match explicit {
		Some(path) => Some(load_config(path)?),
		None => discover_config(start_dir)?,
	};

	match loaded {
		Some(loaded) => loaded.config.resolve(Some(loaded.path)),
		None => {
			tracing::debug!(dir = %start_dir.display(), "no config file found, using defaults");
			Ok(EffectiveConfig::default())
		}
	}
}
