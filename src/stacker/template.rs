use crate::error::{Result, StackerError};

/// Insertion point for the asset URL.
pub const PLACEHOLDER: &str = "%s";

/// Reference markup split around its single URL insertion point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
	prefix: String,
	suffix: String,
}

impl Template {
	/// Parse a template, requiring exactly one `%s`.
	pub fn parse(template: &str) -> Result<Self> {
		let count = template.matches(PLACEHOLDER).count();
		if count != 1 {
			return Err(StackerError::InvalidTemplate {
				template: template.to_string(),
				count,
			});
		}

		match template.split_once(PLACEHOLDER) {
			Some((prefix, suffix)) => Ok(Template {
				prefix: prefix.to_string(),
				suffix: suffix.to_string(),
			}),
			None => Err(StackerError::InvalidTemplate {
				template: template.to_string(),
				count: 0,
			}),
		}
	}

	/// Fill the insertion point with `url`.
	pub fn render(&self, url: &str) -> String {
		let mut out = String::with_capacity(self.prefix.len() + url.len() + self.suffix.len());
		out.push_str(&self.prefix);
		out.push_str(url);
		out.push_str(&self.suffix);
		out
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_render_script_tag() {
		let template = Template::parse(r#"<script src="%s"></script>"#).unwrap();
		assert_eq!(
			template.render("/static/js/app.js"),
			r#"<script src="/static/js/app.js"></script>"#
		);
	}

	#[test]
	fn test_placeholder_at_edges() {
		assert_eq!(Template::parse("%s").unwrap().render("x"), "x");
		assert_eq!(Template::parse("url(%s)").unwrap().render("a.css"), "url(a.css)");
	}

	#[test]
	fn test_missing_placeholder() {
		match Template::parse("<script></script>").unwrap_err() {
			StackerError::InvalidTemplate { count, .. } => assert_eq!(count, 0),
			other => panic!("Expected InvalidTemplate error, got {other:?}"),
		}
	}

	#[test]
	fn test_multiple_placeholders() {
		let result = Template::parse(r#"<link href="%s" data-src="%s" />"#);
		assert!(matches!(
			result,
			Err(StackerError::InvalidTemplate { count: 2, .. })
		));
	}

	#[test]
	fn test_url_is_inserted_literally() {
		let template = Template::parse("<a href=\"%s\">").unwrap();
		assert_eq!(template.render("/x/%s.js"), "<a href=\"/x/%s.js\">");
	}
}
