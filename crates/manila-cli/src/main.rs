//! manila-compile CLI
//!
//! Compiles Manila feature-area parameters into configuration directives.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::CompileArgs;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("{} tracing subscriber already set", "warning:".yellow().bold());
        }
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.config_dir),
        None => {
            println!("{} Manila directive compiler", "manila-compile".green().bold());
            println!();
            println!("Run {} for available commands.", "manila-compile --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, config_dir: Option<std::path::PathBuf>) -> Result<()> {
    match cmd {
        Commands::Compile {
            areas,
            manifests,
            overrides,
            os_family,
            json,
            show_secrets,
        } => commands::run_compile(&CompileArgs {
            areas,
            manifests,
            overrides,
            os_family,
            json,
            show_secrets,
            config_dir,
        }),
        Commands::Params { area } => commands::run_params(area.as_deref()),
    }
}
