use crate::error::{Result, StackerError};
use glob::{MatchOptions, Pattern};
use std::path::Path;

/// Options used when matching file names against a stacker glob.
///
/// A leading dot must be matched literally, so `*.js` skips hidden files
/// such as `.eslintrc.js` or `._app.js`.
pub const MATCH_OPTIONS: MatchOptions = MatchOptions {
	case_sensitive: true,
	require_literal_separator: false,
	require_literal_leading_dot: true,
};

/// Compile a filename glob.
pub fn compile_glob(pattern: &str) -> Result<Pattern> {
	Pattern::new(pattern).map_err(|source| StackerError::InvalidGlob {
		pattern: pattern.to_string(),
		source,
	})
}

/// List regular files directly under `dir` whose name matches `pattern`.
///
/// Names come back sorted lexicographically so that output does not depend
/// on the platform's directory enumeration order. A directory that does not
/// exist yields no files; one that cannot be read is logged and yields none.
pub fn matching_files(dir: &Path, pattern: &Pattern) -> Vec<String> {
	let entries = match std::fs::read_dir(dir) {
		Ok(entries) => entries,
		Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
			tracing::debug!(dir = %dir.display(), "source directory does not exist");
			return Vec::new();
		}
		Err(e) => {
			tracing::warn!(dir = %dir.display(), error = %e, "failed to read source directory");
			return Vec::new();
		}
	};

	let mut names: Vec<String> = entries
		.filter_map(|entry| entry.ok())
		.filter(|entry| entry.path().is_file())
		.filter_map(|entry| entry.file_name().into_string().ok())
		.filter(|name| pattern.matches_with(name, MATCH_OPTIONS))
		.collect();
	names.sort();
	names
}
