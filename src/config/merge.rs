use crate::config::types::{StackerConfig, StackerOverride, StackerSet};
use crate::error::{Result, StackerError};
use std::collections::BTreeMap;

impl StackerConfig {
	/// Field-by-field merge: fields set in the override win, the rest are kept.
	pub fn merged(&self, over: &StackerOverride) -> StackerConfig {
		StackerConfig {
			template: over.template.clone().unwrap_or_else(|| self.template.clone()),
			glob: over.glob.clone().unwrap_or_else(|| self.glob.clone()),
			slot: over.slot.clone().unwrap_or_else(|| self.slot.clone()),
		}
	}
}

impl StackerOverride {
	/// Turn an override for a kind with no default into a full configuration.
	pub fn complete(&self, kind: &str) -> Result<StackerConfig> {
		let field = |value: &Option<String>, name: &'static str| {
			value
				.clone()
				.filter(|v| !v.is_empty())
				.ok_or_else(|| StackerError::IncompleteStacker {
					kind: kind.to_string(),
					field: name,
				})
		};

		Ok(StackerConfig {
			template: field(&self.template, "template")?,
			glob: field(&self.glob, "glob")?,
			slot: field(&self.slot, "slot")?,
		})
	}
}

/// Merge caller overrides into a set of default stackers.
///
/// Neither input is modified. Kinds present in `defaults` keep their
/// position; kinds only present in `overrides` are appended in key order
/// and must set every field.
pub fn merge_stackers(
	defaults: &StackerSet,
	overrides: &BTreeMap<String, StackerOverride>,
) -> Result<StackerSet> {
	let mut merged = StackerSet::empty();

	for (kind, config) in defaults.iter() {
		let config = match overrides.get(kind) {
			Some(over) => config.merged(over),
			None => config.clone(),
		};
		merged.insert(kind, config);
	}

	for (kind, over) in overrides {
		if defaults.get(kind).is_none() {
			merged.insert(kind.clone(), over.complete(kind)?);
		}
	}

	Ok(merged)
}
