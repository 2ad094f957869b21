use crate::error::{Result, StackerError};
use crate::spec::path_spec::PathSpec;
use serde::Deserialize;
use std::collections::BTreeMap;

/// One path declaration as written in a config file.
///
/// A string means source and serve path are the same; a table maps a
/// source directory to a serve prefix and must hold exactly one entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Declaration {
	Path(String),
	Mapping(BTreeMap<String, String>),
}

impl Declaration {
	/// Normalize into a [`PathSpec`], enforcing the one-path arity.
	pub fn to_path_spec(&self, kind: &str) -> Result<PathSpec> {
		match self {
			Declaration::Path(path) => Ok(PathSpec::shared(path)),
			Declaration::Mapping(pairs) => {
				let mut iter = pairs.iter();
				match (iter.next(), iter.next()) {
					(Some((source, serve)), None) => Ok(PathSpec::new(source, serve)),
					_ => Err(StackerError::InvalidDeclaration {
						kind: kind.to_string(),
						count: pairs.len(),
					}),
				}
			}
		}
	}
}

/// Asset kind to its ordered path specs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSpec {
	kinds: BTreeMap<String, Vec<PathSpec>>,
}

impl ResolvedSpec {
	/// Path specs declared for `kind`, in declaration order.
	pub fn get(&self, kind: &str) -> &[PathSpec] {
		self.kinds.get(kind).map(Vec::as_slice).unwrap_or(&[])
	}

	pub fn kinds(&self) -> impl Iterator<Item = &str> {
		self.kinds.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &[PathSpec])> {
		self.kinds.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
	}

	pub fn is_empty(&self) -> bool {
		self.kinds.values().all(Vec::is_empty)
	}

	/// Serve prefixes of every path spec whose source and serve paths match.
	///
	/// These are the directories a static file server has to expose verbatim.
	/// Kinds are visited in name order, specs in declaration order, and
	/// repeated prefixes are listed once.
	pub fn identical_serve_paths(&self) -> Vec<String> {
		let mut paths: Vec<String> = Vec::new();
		for spec in self.kinds.values().flatten() {
			if spec.paths_identical() && !paths.iter().any(|p| p == spec.serve_path()) {
				paths.push(spec.serve_path().to_string());
			}
		}
		paths
	}
}

/// Builder for a [`ResolvedSpec`].
///
/// Each call declares one path for one kind; kinds are created on first
/// use and their specs keep declaration order.
#[derive(Debug, Clone, Default)]
pub struct SpecBuilder {
	spec: ResolvedSpec,
}

impl SpecBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Resolve every declaration in a config `[paths]` table.
	pub fn from_declarations(paths: &BTreeMap<String, Vec<Declaration>>) -> Result<Self> {
		let mut builder = Self::new();
		for (kind, declarations) in paths {
			builder.ensure_kind(kind);
			for declaration in declarations {
				builder.declare(kind, declaration)?;
			}
		}
		Ok(builder)
	}

	/// Declare a path with the same source and serve location.
	pub fn path(mut self, kind: &str, path: &str) -> Self {
		self.push(kind, PathSpec::shared(path));
		self
	}

	/// Declare a source directory served under a different prefix.
	pub fn pair(mut self, kind: &str, source: &str, serve: &str) -> Self {
		self.push(kind, PathSpec::new(source, serve));
		self
	}

	/// Declare from a parsed declaration, rejecting anything but one path.
	pub fn declare(&mut self, kind: &str, declaration: &Declaration) -> Result<&mut Self> {
		let spec = declaration.to_path_spec(kind)?;
		self.push(kind, spec);
		Ok(self)
	}

	pub fn build(self) -> ResolvedSpec {
		self.spec
	}

	fn ensure_kind(&mut self, kind: &str) -> &mut Vec<PathSpec> {
		self.spec.kinds.entry(kind.to_string()).or_default()
	}

	fn push(&mut self, kind: &str, spec: PathSpec) {
		self.ensure_kind(kind).push(spec);
	}
}
