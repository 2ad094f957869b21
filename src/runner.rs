//! Multi-slot orchestration: discover files for every kind, then rewrite
//! each body chunk through every stacker.

use crate::config::StackerSet;
use crate::error::{Result, StackerError};
use crate::spec::ResolvedSpec;
use crate::stacker::Stacker;

/// References discovered for one run, indexed like the runner's stackers.
pub type Discovered = Vec<Vec<String>>;

/// Owns one stacker per configured asset kind, in registration order.
#[derive(Debug)]
pub struct Runner {
	stackers: Vec<Stacker>,
}

impl Runner {
	/// Build stackers for every kind in `config`, failing on the first bad one.
	pub fn new(config: &StackerSet) -> Result<Self> {
		let stackers = config
			.iter()
			.map(|(kind, stacker)| Stacker::new(kind, stacker))
			.collect::<Result<Vec<_>>>()?;
		Ok(Runner { stackers })
	}

	fn stacker_for(&self, kind: &str) -> Option<&Stacker> {
		self.stackers.iter().find(|s| s.kind() == kind)
	}

	/// Check that every kind named in `spec` has a stacker.
	pub fn check_spec(&self, spec: &ResolvedSpec) -> Result<()> {
		match spec.kinds().find(|kind| self.stacker_for(kind).is_none()) {
			Some(kind) => Err(StackerError::UnknownAssetKind {
				kind: kind.to_string(),
			}),
			None => Ok(()),
		}
	}

	/// Scan every path spec of every kind once.
	///
	/// The result is local to the call, so concurrent runs sharing a runner
	/// never see each other's files.
	pub fn discover(&self, spec: &ResolvedSpec) -> Discovered {
		for kind in spec.kinds() {
			if self.stacker_for(kind).is_none() {
				tracing::warn!(kind, "no stacker configured for asset kind, skipping");
			}
		}

		self.stackers
			.iter()
			.map(|stacker| {
				spec.get(stacker.kind())
					.iter()
					.flat_map(|path| stacker.find_files(path.source_path(), path.serve_path()))
					.collect()
			})
			.collect()
	}

	/// Thread one chunk through every stacker in registration order.
	pub fn substitute(&self, chunk: &str, discovered: &Discovered) -> String {
		self.stackers
			.iter()
			.zip(discovered)
			.fold(chunk.to_string(), |chunk, (stacker, references)| {
				stacker.replace_slot(&chunk, references)
			})
	}

	/// Discover files for `spec`, then rewrite every chunk of `body`.
	pub fn run<I, S>(&self, body: I, spec: &ResolvedSpec) -> Vec<String>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let discovered = self.discover(spec);
		body.into_iter()
			.map(|chunk| self.substitute(chunk.as_ref(), &discovered))
			.collect()
	}
}
