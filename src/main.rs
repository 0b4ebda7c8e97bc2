use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nyrenx::{ui, Config};

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Scaffold a new project from a bundled template", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding the template pairs (<short>.json + <short>.zip)
    #[arg(long, global = true, env = "NYRENX_TEMPLATES_DIR")]
    templates_dir: Option<PathBuf>,

    /// Package manager used for `install`
    #[arg(long, global = true, env = "NYRENX_PACKAGE_MANAGER")]
    package_manager: Option<String>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project (default)
    Create {
        /// Template to use instead of asking (typescript, javascript)
        #[arg(long, value_parser = ["typescript", "javascript"])]
        template: Option<String>,
    },

    /// List the bundled templates
    Templates {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(cli.templates_dir, cli.package_manager)?;

    let command = cli.command.unwrap_or(Commands::Create { template: None });
    match command {
        Commands::Create { template } => Ok(commands::create::execute(&config, template.as_deref())),
        Commands::Templates { json } => {
            commands::templates::execute(&config, json)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            ui::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
