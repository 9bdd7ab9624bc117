use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use mcp_inspect::cli::status::{self, Panels, StatusArgs};
use mcp_inspect::Result;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mcp-inspect")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect the workspace MCP configuration", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Show debug logs on stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the startup panels (overview and sequential thinking)
    Status(StatusArgs),

    /// Show the configuration overview
    Overview(StatusArgs),

    /// Show the sequential thinking status
    #[command(name = "sequential-thinking")]
    SequentialThinking(StatusArgs),

    /// Print a short summary of the detected configuration
    Check {
        #[command(flatten)]
        args: StatusArgs,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Status(args) => status::run(&args, Panels::All)?,
        Commands::Overview(args) => status::run(&args, Panels::Overview)?,
        Commands::SequentialThinking(args) => status::run(&args, Panels::SequentialThinking)?,
        Commands::Check { args, json } => status::run_check(&args, json)?,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "mcp-inspect", &mut io::stdout());
        }
    }

    Ok(())
}
