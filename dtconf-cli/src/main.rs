//! Main entry point for the dtconf CLI.
//!
//! This is the command-line interface for data-table configuration
//! resolution. It provides commands for inspecting configurations:
//! - `resolve`: Resolve the table configurations for a locale
//! - `groups`: List the groups defined for a locale
//! - `keys`: List every known configuration option
//! - `defaults`: Print the default properties
//! - `check`: Check a bundle file

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library diagnostics to stderr based on verbosity
    dtconf::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        settings: cli.settings,
        configuration_dir: cli.configuration_dir,
        jstl: cli.jstl,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Groups(cmd) => cmd.execute(&global),
        cli::Command::Keys(cmd) => cmd.execute(&global),
        cli::Command::Defaults(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
