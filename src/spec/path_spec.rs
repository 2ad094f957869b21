/// Separator used for both source directories and serve prefixes.
pub const SEPARATOR: char = '/';

/// A normalized source directory / serve URL prefix pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSpec {
	source_path: String,
	serve_path: String,
}

impl PathSpec {
	/// Build from a source directory and the URL prefix its files are served under.
	pub fn new(source: &str, serve: &str) -> Self {
		PathSpec {
			source_path: normalize_source(source),
			serve_path: normalize_serve(serve),
		}
	}

	/// Build from a single path used both on disk and in URLs.
	pub fn shared(path: &str) -> Self {
		Self::new(path, path)
	}

	/// Source directory, always ending with a separator.
	pub fn source_path(&self) -> &str {
		&self.source_path
	}

	/// Serve prefix, always starting and ending with a separator.
	pub fn serve_path(&self) -> &str {
		&self.serve_path
	}

	/// True when files are served from the same path they are read from.
	///
	/// The source path is compared in serve form, so `assets/css` served at
	/// `/assets/css/` counts as identical.
	pub fn paths_identical(&self) -> bool {
		normalize_serve(&self.source_path) == self.serve_path
	}
}

/// Append a trailing separator if absent.
pub fn normalize_source(path: &str) -> String {
	let mut normalized = path.to_string();
	if !normalized.ends_with(SEPARATOR) {
		normalized.push(SEPARATOR);
	}
	normalized
}

/// Prepend a leading and append a trailing separator where absent.
pub fn normalize_serve(path: &str) -> String {
	let mut normalized = String::with_capacity(path.len() + 2);
	if !path.starts_with(SEPARATOR) {
		normalized.push(SEPARATOR);
	}
	normalized.push_str(path);
	if !normalized.ends_with(SEPARATOR) {
		normalized.push(SEPARATOR);
	}
	normalized
}
