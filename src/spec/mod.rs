//! Declarative path spec for scriptstacker.
//!
//! This module handles:
//! - Normalizing source/serve path pairs
//! - Resolving per-kind path declarations into ordered path specs

pub mod path_spec;
pub mod resolver;

pub use path_spec::{PathSpec, normalize_serve, normalize_source};
pub use resolver::{Declaration, ResolvedSpec, SpecBuilder};
