//! Configuration loading and merging for scriptstacker.
//!
//! This module handles:
//! - TOML config file parsing
//! - Nearest-ancestor config discovery
//! - Merging stacker overrides onto the built-in defaults

pub mod discovery;
pub mod merge;
pub mod parser;
pub mod template;
pub mod types;

pub use discovery::{CONFIG_FILE_NAME, discover_config, load_config, load_effective_config};
pub use merge::merge_stackers;
pub use parser::{parse_config_file, parse_config_str};
pub use template::generate_init_template;
pub use types::{
	Config, EffectiveConfig, LoadedConfig, StackerConfig, StackerOverride, StackerSet,
};
