//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Resolve the table configurations for a locale
//! - `groups`: List the groups defined for a locale
//! - `keys`: List every known configuration option
//! - `defaults`: Print the default properties
//! - `check`: Check a bundle file for misplaced or unknown options
//! - `completions`: Generate shell completion scripts

pub mod check;
pub mod completions;
pub mod defaults;
pub mod groups;
pub mod keys;
pub mod resolve;

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use defaults::DefaultsCommand;
pub use groups::GroupsCommand;
pub use keys::KeysCommand;
pub use resolve::ResolveCommand;
