//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Compile Manila feature-area parameters into configuration directives
#[derive(Parser, Debug)]
#[command(name = "manila-compile")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the global defaults.toml layer
    #[arg(long, global = true, env = "MANILA_COMPILE_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve parameters and print the resulting directives
    ///
    /// Examples:
    ///   manila-compile compile -m site.toml
    ///   manila-compile compile -a nova --set auth_type=password --os-family RedHat
    ///   manila-compile compile -m site.toml --json
    Compile {
        /// Feature areas to compile (default: every area in the manifests)
        #[arg(short, long = "area")]
        areas: Vec<String>,

        /// Manifest files, later ones overriding earlier ones
        #[arg(short, long = "manifest")]
        manifests: Vec<PathBuf>,

        /// Parameter overrides as key=value (requires exactly one --area)
        #[arg(short = 's', long = "set")]
        overrides: Vec<String>,

        /// OS family of the target host (overrides the manifest)
        #[arg(long)]
        os_family: Option<String>,

        /// Output as JSON for the applier
        #[arg(long)]
        json: bool,

        /// Print sensitive values instead of masking them
        #[arg(long)]
        show_secrets: bool,
    },

    /// List the parameters each feature area accepts
    Params {
        /// Only show this area
        area: Option<String>,
    },
}
