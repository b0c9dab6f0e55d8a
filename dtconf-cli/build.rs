//! Build script for dtconf-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("dtconf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect resolved data-table configurations")
        .long_about(
            "Command-line tool for resolving data-table configurations from default \
             properties and locale-specific user bundles",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("settings")
                .long("settings")
                .help("Read loader settings from this file instead of discovering dtconf.yaml")
                .value_name("FILE")
                .global(true)
                .env("DTCONF_SETTINGS"),
        )
        .arg(
            Arg::new("configuration-dir")
                .long("configuration-dir")
                .help("Directory searched first for user bundles")
                .value_name("DIR")
                .global(true),
        )
        .arg(
            Arg::new("jstl")
                .long("jstl")
                .help("Resolve as if the JSP tag library were in use")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve the table configurations for a locale")
                .long_about("Merge defaults and user bundles into one configuration per group"),
            Command::new("groups")
                .about("List the groups defined for a locale")
                .long_about("Print the group names found in the user bundle of a locale"),
            Command::new("keys")
                .about("List every known configuration option")
                .long_about("Print the canonical names of all configuration options"),
            Command::new("defaults")
                .about("Print the default properties")
                .long_about("Print the default properties every group starts from"),
            Command::new("check")
                .about("Check a bundle file for misplaced or unknown options")
                .long_about("Report keys without a group prefix and options that do not exist"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("dtconf.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
