mod cmd;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "drawer", about = "Directory listing and file management from the terminal")]
struct Cli {
    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List a directory
    Ls(cmd::ls::LsArgs),
    /// Show one entry's metadata
    Stat(cmd::stat::StatArgs),
    /// Create a file or directory
    New(cmd::new::NewArgs),
    /// Rename an entry within its directory
    Mv(cmd::mv::MvArgs),
    /// Delete an entry, directories recursively
    Rm(cmd::rm::RmArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let json = cli.json;

    match cli.command {
        Commands::Ls(args) => cmd::ls::run(args, json),
        Commands::Stat(args) => cmd::stat::run(args, json),
        Commands::New(args) => cmd::new::run(args, json),
        Commands::Mv(args) => cmd::mv::run(args, json),
        Commands::Rm(args) => cmd::rm::run(args, json),
    }
}
