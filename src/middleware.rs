//! Response-side wrapper around the runner.
//!
//! Rewrites HTML response bodies and tells a static file server which
//! prefixes to expose. Status and headers are never touched.

use crate::config::{EffectiveConfig, StackerSet};
use crate::error::Result;
use crate::runner::Runner;
use crate::spec::ResolvedSpec;

/// Media type that enables body rewriting.
pub const HTML_CONTENT_TYPE: &str = "text/html";

/// An HTTP-response-like triple with a chunked body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
	pub status: u16,
	pub headers: Vec<(String, String)>,
	pub body: Vec<String>,
}

impl Response {
	pub fn new(status: u16, headers: Vec<(String, String)>, body: Vec<String>) -> Self {
		Response {
			status,
			headers,
			body,
		}
	}

	/// Look up a header value by case-insensitive name.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}

	/// True when the `Content-Type` header names an HTML body.
	pub fn is_html(&self) -> bool {
		self.header("content-type").is_some_and(|value| {
			value
				.split(';')
				.next()
				.is_some_and(|media| media.trim().eq_ignore_ascii_case(HTML_CONTENT_TYPE))
		})
	}
}

/// Slot injection for HTML responses.
#[derive(Debug)]
pub struct ScriptStacker {
	runner: Runner,
	spec: ResolvedSpec,
}

impl ScriptStacker {
	/// Compile stackers and check the spec against them.
	///
	/// Every configuration error surfaces here, before any response is seen.
	pub fn new(stackers: &StackerSet, spec: ResolvedSpec) -> Result<Self> {
		let runner = Runner::new(stackers)?;
		runner.check_spec(&spec)?;
		Ok(ScriptStacker { runner, spec })
	}

	pub fn from_config(config: &EffectiveConfig) -> Result<Self> {
		Self::new(&config.stackers, config.spec.clone())
	}

	/// Rewrite the body of an HTML response; pass anything else through.
	pub fn process(&self, response: Response) -> Response {
		if !response.is_html() {
			tracing::debug!(
				content_type = response.header("content-type").unwrap_or(""),
				"skipping non-HTML response"
			);
			return response;
		}

		let body = self.runner.run(&response.body, &self.spec);
		Response { body, ..response }
	}

	/// Rewrite a whole HTML document held in one string.
	pub fn render(&self, html: &str) -> String {
		self.runner.run([html], &self.spec).concat()
	}

	/// Serve prefixes the static file server should expose from disk.
	pub fn static_paths(&self) -> Vec<String> {
		self.spec.identical_serve_paths()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::spec::SpecBuilder;
	use std::fs;

	fn html_headers() -> Vec<(String, String)> {
		vec![(
			"Content-Type".to_string(),
			"text/html; charset=utf-8".to_string(),
		)]
	}

	fn stacker_with_css(root: &std::path::Path) -> ScriptStacker {
		fs::write(root.join("site.css"), "").unwrap();
		let spec = SpecBuilder::new()
			.pair("css", &root.display().to_string(), "static/css")
			.build();
		ScriptStacker::new(&StackerSet::default(), spec).unwrap()
	}

	#[test]
	fn test_process_rewrites_html() {
		let temp_dir = tempfile::tempdir().unwrap();
		let stacker = stacker_with_css(temp_dir.path());
		let response = Response::new(
			200,
			html_headers(),
			vec!["<head>\n  <!-- SLOT: CSS -->\n</head>".to_string()],
		);

		let out = stacker.process(response);
		assert_eq!(out.status, 200);
		assert_eq!(out.headers, html_headers());
		assert_eq!(
			out.body,
			vec![
				"<head>\n  <link rel=\"stylesheet\" type=\"text/css\" href=\"/static/css/site.css\" />\n</head>"
					.to_string()
			]
		);
	}

	#[test]
	fn test_process_passes_non_html_through() {
		let temp_dir = tempfile::tempdir().unwrap();
		let stacker = stacker_with_css(temp_dir.path());
		let response = Response::new(
			200,
			vec![("content-type".to_string(), "application/json".to_string())],
			vec!["<!-- SLOT: CSS -->\n".to_string()],
		);

		assert_eq!(stacker.process(response.clone()), response);
	}

	#[test]
	fn test_process_without_content_type() {
		let stacker = ScriptStacker::new(&StackerSet::default(), ResolvedSpec::default()).unwrap();
		let response = Response::new(204, vec![], vec!["<!-- SLOT: CSS -->".to_string()]);
		assert_eq!(stacker.process(response.clone()), response);
	}

	#[test]
	fn test_is_html_matches_media_type_only() {
		let with = |value: &str| {
			Response::new(200, vec![("CONTENT-TYPE".to_string(), value.to_string())], vec![])
		};
		assert!(with("text/html").is_html());
		assert!(with("Text/HTML;charset=utf-8").is_html());
		assert!(!with("text/htmlx").is_html());
		assert!(!with("text/plain").is_html());
	}

	#[test]
	fn test_static_paths_only_identical() {
		let spec = SpecBuilder::new()
			.path("css", "static/css")
			.pair("javascript", "vendor/js", "static/js")
			.path("javascript", "static/app")
			.build();
		let stacker = ScriptStacker::new(&StackerSet::default(), spec).unwrap();

		assert_eq!(
			stacker.static_paths(),
			vec!["/static/css/".to_string(), "/static/app/".to_string()]
		);
	}

	#[test]
	fn test_new_rejects_unknown_kind() {
		let spec = SpecBuilder::new().path("fonts", "fonts").build();
		assert!(ScriptStacker::new(&StackerSet::default(), spec).is_err());
	}
}
