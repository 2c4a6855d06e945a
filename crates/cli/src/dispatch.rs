//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Logging and dotenv setup (see `main()`).
//!
//! Invariants:
//! - Global options (search path, output format) reach every command unchanged.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let search_path = cli.search_path.as_deref();
    let output = cli.output.as_str();

    match &cli.command {
        Commands::Show {
            sources,
            show_secrets,
        } => commands::show::run(search_path, sources, *show_secrets, output),
        Commands::Get {
            key,
            sources,
            show_secrets,
        } => commands::get::run(search_path, key, sources, *show_secrets, output),
        Commands::Check {
            sources,
            fields,
            show_secrets,
        } => commands::check::run(search_path, sources, fields, *show_secrets, output),
        Commands::Ls { directory } => commands::ls::run(search_path, directory, output),
    }
}
