mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "rbxdump",
    version,
    about = "Extract a Roblox place XML document into a source tree",
    long_about = "rbxdump walks a Roblox place/model XML document (.rbxlx/.rbxmx) and\n\
        mirrors it on disk: one directory per instance, a .luau file per script\n\
        instance, and a properties sidecar per instance that has properties.\n\n\
        Quick start:\n  \
        rbxdump extract place.rbxlx\n  \
        rbxdump extract place.rbxlx --out dump\n  \
        rbxdump list place.rbxlx"
)]
struct Cli {
    /// Enable verbose logging (set log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a TOML config file (script classes, extension, output subdir)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a document into a mirrored directory tree
    ///
    /// Creates <out>/src/ and materializes every instance under it in
    /// document order. A parse failure aborts the run; per-instance
    /// failures are logged and skipped.
    ///
    /// Examples:
    ///   rbxdump extract place.rbxlx
    ///   rbxdump extract place.rbxlx --out dump
    Extract {
        /// Path to the .rbxlx/.rbxmx document
        file: String,

        /// Output root (default: current directory)
        #[arg(short, long)]
        out: Option<String>,
    },
    /// List top-level instances without writing anything
    ///
    /// Prints the same per-instance lines as `extract` as a dry run.
    ///
    /// Example: rbxdump list place.rbxlx
    List {
        /// Path to the .rbxlx/.rbxmx document
        file: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let config_file = cli.config.as_deref().map(std::path::Path::new);

    match cli.command {
        Commands::Extract { file, out } => {
            let out = resolve_out(out)?;
            commands::extract::run(std::path::Path::new(&file), &out, config_file)?;
        }
        Commands::List { file } => {
            commands::list::run(std::path::Path::new(&file))?;
        }
    }

    Ok(())
}

fn resolve_out(out: Option<String>) -> anyhow::Result<std::path::PathBuf> {
    match out {
        Some(p) => Ok(std::path::PathBuf::from(p)),
        None => Ok(std::env::current_dir()?),
    }
}
