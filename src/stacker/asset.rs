use crate::config::StackerConfig;
use crate::error::Result;
use crate::stacker::finder::{compile_glob, matching_files};
use crate::stacker::slot::Slot;
use crate::stacker::template::Template;
use glob::Pattern;
use std::path::Path;

/// File discovery and slot replacement for one asset kind.
///
/// A stacker holds only its configuration. Discovered references are
/// returned to the caller instead of being accumulated, so one instance can
/// serve any number of runs.
#[derive(Debug)]
pub struct Stacker {
	kind: String,
	template: Template,
	glob: Pattern,
	slot: Slot,
}

impl Stacker {
	/// Compile a stacker, validating its template, glob and slot up front.
	pub fn new(kind: impl Into<String>, config: &StackerConfig) -> Result<Self> {
		Ok(Stacker {
			kind: kind.into(),
			template: Template::parse(&config.template)?,
			glob: compile_glob(&config.glob)?,
			slot: Slot::new(&config.slot)?,
		})
	}

	pub fn kind(&self) -> &str {
		&self.kind
	}

	/// Render one reference per matching file directly under `source_path`.
	///
	/// Each reference is the template filled with `serve_path` followed by
	/// the file's base name. Files are taken in name order.
	pub fn find_files(&self, source_path: &str, serve_path: &str) -> Vec<String> {
		let references: Vec<String> = matching_files(Path::new(source_path), &self.glob)
			.iter()
			.map(|name| self.template.render(&format!("{serve_path}{name}")))
			.collect();

		tracing::debug!(
			kind = %self.kind,
			source = source_path,
			serve = serve_path,
			count = references.len(),
			"discovered files"
		);
		references
	}

	/// Replace each of this stacker's marker lines in `chunk` with `references`.
	pub fn replace_slot(&self, chunk: &str, references: &[String]) -> String {
		self.slot.fill(chunk, references)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::StackerSet;
	use crate::error::StackerError;
	use std::fs;

	fn javascript() -> Stacker {
		let defaults = StackerSet::default();
		Stacker::new("javascript", defaults.get("javascript").unwrap()).unwrap()
	}

	#[test]
	fn test_find_files_renders_serve_urls() {
		let temp_dir = tempfile::tempdir().unwrap();
		fs::write(temp_dir.path().join("vendor.js"), "").unwrap();
		fs::write(temp_dir.path().join("app.js"), "").unwrap();
		let source = format!("{}/", temp_dir.path().display());

		let refs = javascript().find_files(&source, "/static/js/");
		assert_eq!(
			refs,
			vec![
				r#"<script type="text/javascript" src="/static/js/app.js"></script>"#.to_string(),
				r#"<script type="text/javascript" src="/static/js/vendor.js"></script>"#
					.to_string(),
			]
		);
	}

	#[test]
	fn test_find_files_missing_source() {
		assert!(javascript().find_files("/nonexistent/js/", "/js/").is_empty());
	}

	#[test]
	fn test_replace_slot_end_to_end() {
		let temp_dir = tempfile::tempdir().unwrap();
		fs::write(temp_dir.path().join("app.js"), "").unwrap();
		fs::write(temp_dir.path().join("vendor.js"), "").unwrap();
		let source = format!("{}/", temp_dir.path().display());

		let stacker = javascript();
		let refs = stacker.find_files(&source, "/static/js/");
		let out = stacker.replace_slot("<body>\n  <!-- SLOT: JAVASCRIPT -->\n</body>\n", &refs);

		assert_eq!(
			out,
			"<body>\n  <script type=\"text/javascript\" src=\"/static/js/app.js\"></script>\n  <script type=\"text/javascript\" src=\"/static/js/vendor.js\"></script>\n</body>\n"
		);
	}

	#[test]
	fn test_replace_slot_without_marker_is_identity() {
		let chunk = "<html>\n  <!-- SLOT: CSS -->\n</html>";
		let refs = vec!["<script></script>".to_string()];
		assert_eq!(javascript().replace_slot(chunk, &refs), chunk);
	}

	#[test]
	fn test_new_rejects_bad_template() {
		let config = StackerConfig::new("<script></script>", "*.js", "<!-- JS -->");
		assert!(matches!(
			Stacker::new("javascript", &config),
			Err(StackerError::InvalidTemplate { count: 0, .. })
		));
	}
}
