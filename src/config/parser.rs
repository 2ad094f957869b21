use crate::config::types::Config;
use crate::error::{Result, StackerError};
use std::path::Path;

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<Config> {
	let content = std::fs::read_to_string(path).map_err(|source| {
		if source.kind() == std::io::ErrorKind::NotFound {
			StackerError::ConfigNotFound {
				path: path.to_path_buf(),
			}
		} else {
			StackerError::ConfigReadError {
				path: path.to_path_buf(),
				source,
			}
		}
	})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
	let config: Config =
		toml::from_str(content).map_err(|source| StackerError::ConfigParseError {
			path: path.to_path_buf(),
			source,
		})?;

	// Fail fast on bad declarations and incomplete stackers
	config.validate()?;

	Ok(config)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::spec::PathSpec;
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_config() {
		let path = PathBuf::from("test.toml");
		let config = parse_config_str("", &path).unwrap();

		assert!(config.stackers.is_empty());
		assert!(config.paths.is_empty());
	}

	#[test]
	fn test_parse_stacker_overrides() {
		let content = r#"
[stackers.css]
template = '<link rel="stylesheet" href="%s" />'

[stackers.images]
template = '<link rel="preload" as="image" href="%s" />'
glob = "*.png"
slot = "<!-- SLOT: IMAGES -->"
"#;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert_eq!(config.stackers.len(), 2);
		assert_eq!(
			config.stackers["css"].template.as_deref(),
			Some(r#"<link rel="stylesheet" href="%s" />"#)
		);
		assert!(config.stackers["css"].glob.is_none());

		let effective = config.resolve(None).unwrap();
		assert_eq!(effective.stackers.len(), 3);
		assert_eq!(effective.stackers.get("css").unwrap().glob, "*.css");
	}

	#[test]
	fn test_parse_paths_single_and_pair() {
		let content = r#"
[paths]
css = ["assets/css", { "vendor/css" = "static/css" }]
javascript = ["assets/js/"]
"#;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();
		let effective = config.resolve(Some(path)).unwrap();

		assert_eq!(
			effective.spec.get("css"),
			&[
				PathSpec::new("assets/css", "assets/css"),
				PathSpec::new("vendor/css", "static/css"),
			]
		);
		assert_eq!(effective.spec.get("javascript")[0].source_path(), "assets/js/");
		assert_eq!(effective.source, Some(PathBuf::from("test.toml")));
	}

	#[test]
	fn test_parse_rejects_multi_pair_declaration() {
		let content = r#"
[paths]
css = [{ "a" = "b", "c" = "d" }]
"#;
		let path = PathBuf::from("test.toml");
		match parse_config_str(content, &path).unwrap_err() {
			StackerError::InvalidDeclaration { kind, count } => {
				assert_eq!(kind, "css");
				assert_eq!(count, 2);
			}
			other => panic!("Expected InvalidDeclaration error, got {other:?}"),
		}
	}

	#[test]
	fn test_parse_rejects_empty_declaration() {
		let content = r#"
[paths]
javascript = [{}]
"#;
		let path = PathBuf::from("test.toml");
		let result = parse_config_str(content, &path);
		assert!(matches!(
			result,
			Err(StackerError::InvalidDeclaration { count: 0, .. })
		));
	}

	#[test]
	fn test_parse_rejects_unknown_stacker_field() {
		let content = r#"
[stackers.css]
source_glob = "css/*.css"
"#;
		let path = PathBuf::from("test.toml");
		let result = parse_config_str(content, &path);
		assert!(matches!(result, Err(StackerError::ConfigParseError { .. })));
	}

	#[test]
	fn test_parse_missing_file() {
		let result = parse_config_file(Path::new("/nonexistent/.scriptstacker.toml"));
		assert!(matches!(result, Err(StackerError::ConfigNotFound { .. })));
	}
}
