//! Per-kind asset stacking for scriptstacker.
//!
//! This module handles:
//! - Reference templates with a single URL insertion point
//! - Filename glob matching inside source directories
//! - Indentation-preserving slot marker replacement

pub mod asset;
pub mod finder;
pub mod slot;
pub mod template;

pub use asset::Stacker;
pub use finder::{MATCH_OPTIONS, compile_glob, matching_files};
pub use slot::Slot;
pub use template::Template;
