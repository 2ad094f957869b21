use crate::spec::{Declaration, ResolvedSpec};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Template, glob and slot marker for one asset kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackerConfig {
	/// Reference markup with exactly one `%s` where the URL goes.
	pub template: String,

	/// Filename pattern matched inside each source directory.
	pub glob: String,

	/// Literal marker line replaced by the rendered references.
	pub slot: String,
}

impl StackerConfig {
	pub fn new(
		template: impl Into<String>,
		glob: impl Into<String>,
		slot: impl Into<String>,
	) -> Self {
		StackerConfig {
			template: template.into(),
			glob: glob.into(),
			slot: slot.into(),
		}
	}
}

/// Ordered set of stacker configurations, one per asset kind.
///
/// Iteration order is registration order, which is also the order the
/// runner threads each chunk through the stackers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackerSet {
	kinds: Vec<(String, StackerConfig)>,
}

impl Default for StackerSet {
	fn default() -> Self {
		StackerSet {
			kinds: vec![
				(
					"javascript".to_string(),
					StackerConfig::new(
						r#"<script type="text/javascript" src="%s"></script>"#,
						"*.js",
						"<!-- SLOT: JAVASCRIPT -->",
					),
				),
				(
					"css".to_string(),
					StackerConfig::new(
						r#"<link rel="stylesheet" type="text/css" href="%s" />"#,
						"*.css",
						"<!-- SLOT: CSS -->",
					),
				),
			],
		}
	}
}

impl StackerSet {
	/// A set with no kinds registered.
	pub fn empty() -> Self {
		StackerSet { kinds: Vec::new() }
	}

	/// Register a kind, replacing its configuration in place if already present.
	pub fn insert(&mut self, kind: impl Into<String>, config: StackerConfig) {
		let kind = kind.into();
		match self.kinds.iter_mut().find(|(k, _)| *k == kind) {
			Some((_, existing)) => *existing = config,
			None => self.kinds.push((kind, config)),
		}
	}

	pub fn get(&self, kind: &str) -> Option<&StackerConfig> {
		self.kinds.iter().find(|(k, _)| k == kind).map(|(_, c)| c)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &StackerConfig)> {
		self.kinds.iter().map(|(k, c)| (k.as_str(), c))
	}

	pub fn len(&self) -> usize {
		self.kinds.len()
	}

	pub fn is_empty(&self) -> bool {
		self.kinds.is_empty()
	}
}

/// Partial stacker configuration as written in a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StackerOverride {
	pub template: Option<String>,
	pub glob: Option<String>,
	pub slot: Option<String>,
}

/// Top-level contents of a `.scriptstacker.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
	/// Overrides merged onto the default stackers. Unknown kinds are added.
	#[serde(default)]
	pub stackers: BTreeMap<String, StackerOverride>,

	/// Declarative path spec: asset kind to ordered path declarations.
	#[serde(default)]
	pub paths: BTreeMap<String, Vec<Declaration>>,
}

/// A parsed config with the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

/// Stackers merged with defaults plus the resolved path spec.
#[derive(Debug, Clone, Default)]
pub struct EffectiveConfig {
	pub stackers: StackerSet,
	pub spec: ResolvedSpec,

	/// Config file the values came from, `None` when running on defaults.
	pub source: Option<PathBuf>,
}

impl Config {
	/// Merge stacker overrides onto the defaults and resolve the path spec.
	pub fn resolve(
		&self,
		source: Option<PathBuf>,
	) -> Result<EffectiveConfig, crate::error::StackerError> {
		let stackers =
			crate::config::merge::merge_stackers(&StackerSet::default(), &self.stackers)?;
		let spec = crate::spec::SpecBuilder::from_declarations(&self.paths)?.build();

		Ok(EffectiveConfig {
			stackers,
			spec,
			source,
		})
	}

	/// Check that the config resolves without keeping the result.
	pub fn validate(&self) -> Result<(), crate::error::StackerError> {
		self.resolve(None).map(|_| ())
	}
}
