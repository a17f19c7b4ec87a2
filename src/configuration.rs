//! Console configuration.
//!
//! Runtime settings come from an optional TOML file plus command-line
//! overrides parsed in `main`. Everything has a default: the console must
//! start with no configuration at all.

pub mod config;
pub mod types;

pub use config::Config;
pub use types::Locale;
