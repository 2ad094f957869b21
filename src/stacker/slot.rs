use crate::error::{Result, StackerError};
use regex::{Captures, Regex};

/// Whitespace other than line breaks.
const BLANK: &str = r"[^\S\r\n]*";

/// Matcher for one slot marker line.
///
/// A marker line holds the literal slot token and nothing else apart from
/// surrounding whitespace. The leading whitespace is captured so that
/// generated lines can be indented the same way.
#[derive(Debug)]
pub struct Slot {
	pattern: Regex,
}

impl Slot {
	pub fn new(token: &str) -> Result<Self> {
		if token.trim().is_empty() {
			return Err(StackerError::BlankSlot {
				slot: token.to_string(),
			});
		}

		// Either a terminated marker line, or a marker ending the text together
		// with the line break before it.
		let token_pattern = regex::escape(token.trim());
		let source = format!(
			r"(?m)^({BLANK}){token_pattern}{BLANK}(\r?\n)|(\r?\n)?^({BLANK}){token_pattern}{BLANK}\z"
		);
		let pattern = Regex::new(&source).map_err(|source| StackerError::InvalidSlot {
			slot: token.to_string(),
			source,
		})?;

		Ok(Slot { pattern })
	}

	/// Replace every marker line in `chunk` with `lines`.
	///
	/// Each generated line gets the marker's indentation. With no lines the
	/// marker line is removed along with the line break that separates it
	/// from its neighbours. A chunk without a marker comes back unchanged.
	pub fn fill(&self, chunk: &str, lines: &[String]) -> String {
		self.pattern
			.replace_all(chunk, |caps: &Captures| {
				if lines.is_empty() {
					return String::new();
				}

				let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());
				let (leading, indent, terminator) = match caps.get(1) {
					Some(indent) => ("", indent.as_str(), group(2)),
					None => (group(3), group(4), ""),
				};
				let separator = [terminator, leading]
					.into_iter()
					.find(|s| !s.is_empty())
					.unwrap_or("\n");

				let mut out = String::from(leading);
				out.push_str(
					&lines
						.iter()
						.map(|line| format!("{indent}{line}"))
						.collect::<Vec<_>>()
						.join(separator),
				);
				out.push_str(terminator);
				out
			})
			.into_owned()
	}
}
