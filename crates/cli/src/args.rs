//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not build loaders or contexts (see `sources` module).

use clap::{Parser, Subcommand};
use propbind_config::constants::SEARCH_PATH_VAR;

use crate::commands::check::FieldSpec;

#[derive(Parser, Debug)]
#[command(name = "propbind-cli")]
#[command(about = "Inspect merged property files and test typed bindings", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  propbind-cli show app.properties local.properties\n  propbind-cli get DB_URL app.properties local.properties\n  propbind-cli check app.properties --field PORT:int --field MODE:'enum(FAST|SAFE)'\n  propbind-cli --search-path conf:/etc/myapp ls profiles\n"
)]
pub struct Cli {
    /// Directories searched for property sources, in order (platform path list)
    #[arg(long, global = true, env = SEARCH_PATH_VAR, value_name = "PATHS")]
    pub search_path: Option<String>,

    /// Output format (table, json, properties)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Log merge and binding decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the merged settings of the given sources
    Show {
        /// Property sources, later ones override earlier ones
        #[arg(required = true)]
        sources: Vec<String>,

        /// Print values of secret-looking keys instead of masking them
        #[arg(long)]
        show_secrets: bool,
    },

    /// Print the effective value of one property (environment wins)
    Get {
        /// Property name
        key: String,

        /// Property sources, later ones override earlier ones
        sources: Vec<String>,

        /// Print the value even if the key looks secret
        #[arg(long)]
        show_secrets: bool,
    },

    /// Bind declared fields and report the converted values
    Check {
        /// Property sources, later ones override earlier ones
        sources: Vec<String>,

        /// Field declaration as NAME:TYPE (e.g. PORT:int, TAGS:list<text>)
        #[arg(long = "field", value_name = "NAME:TYPE", required = true)]
        fields: Vec<FieldSpec>,

        /// Print converted values of secret-looking fields instead of masking them
        #[arg(long)]
        show_secrets: bool,
    },

    /// List the files of a directory on the search path
    Ls {
        /// Directory name relative to the search path
        directory: String,
    },
}
