//! Scriptstacker - inject asset reference tags into HTML slot markers.
//!
//! This library provides the core functionality for scriptstacker, including:
//! - Declarative path specs mapping source directories to serve prefixes
//! - Stacker configuration with defaults and field-by-field overrides
//! - File discovery and indentation-preserving slot replacement
//! - A response wrapper gating on HTML content
//!
//! # Example
//!
//! ```no_run
//! use scriptstacker::config::StackerSet;
//! use scriptstacker::middleware::ScriptStacker;
//! use scriptstacker::spec::SpecBuilder;
//!
//! let spec = SpecBuilder::new()
//!     .path("css", "static/css")
//!     .pair("javascript", "vendor/js", "static/vendor")
//!     .build();
//! let stacker = ScriptStacker::new(&StackerSet::default(), spec).unwrap();
//!
//! let html = stacker.render("<head>\n  <!-- SLOT: CSS -->\n</head>\n");
//! println!("{html}");
//! println!("serve from disk: {:?}", stacker.static_paths());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod runner;
pub mod spec;
pub mod stacker;

pub use error::{Result, StackerError};
