//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CheckCommand, CompletionsCommand, DefaultsCommand, GroupsCommand, KeysCommand,
    ResolveCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for inspecting resolved data-table configurations.
#[derive(Parser)]
#[command(name = "dtconf")]
#[command(version, about = "Inspect resolved data-table configurations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read loader settings from this file instead of discovering dtconf.yaml
    #[arg(long, value_name = "FILE", global = true, env = "DTCONF_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Directory searched first for user bundles
    #[arg(long, value_name = "DIR", global = true)]
    pub configuration_dir: Option<PathBuf>,

    /// Resolve as if the JSP tag library were in use
    #[arg(long, global = true)]
    pub jstl: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve the table configurations for a locale
    Resolve(ResolveCommand),

    /// List the groups defined for a locale
    Groups(GroupsCommand),

    /// List every known configuration option
    Keys(KeysCommand),

    /// Print the default properties
    Defaults(DefaultsCommand),

    /// Check a bundle file for misplaced or unknown options
    Check(CheckCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
