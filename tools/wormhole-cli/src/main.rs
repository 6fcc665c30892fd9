//! Wormhole CLI - Generate procedural tunnel meshes
//!
//! # Commands
//!
//! - `wormhole init` - Create a new wormhole.toml config
//! - `wormhole generate` - Generate a tunnel and export it (OBJ, JSON or raw buffers)
//! - `wormhole info` - Print mesh statistics without writing anything
//!
//! # Usage
//!
//! ```bash
//! # Write a default config, then export a mesh from it
//! wormhole init
//! wormhole generate --output tunnel.obj
//!
//! # Override config values from the command line
//! wormhole generate --tunnel-subdivs 400 --colors "0xff00ff 0x00ffff 0x000000" -o tunnel.json
//!
//! # Reproduce an earlier mesh exactly
//! wormhole generate --seed 1234 -o tunnel.obj
//! ```
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=wormhole_mesh=debug`) for more detail.

mod args;
mod generate;
mod info;
mod init;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Wormhole CLI - Generate procedural tunnel meshes
#[derive(Parser)]
#[command(name = "wormhole")]
#[command(about = "Generate procedural wormhole tunnel meshes")]
#[command(version)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new wormhole.toml config
    Init(init::InitArgs),

    /// Generate a tunnel mesh and export it
    Generate(generate::GenerateArgs),

    /// Print vertex, triangle and buffer sizes for a tunnel
    Info(info::InfoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Init(args) => init::execute(args),
        Commands::Generate(args) => generate::execute(args),
        Commands::Info(args) => info::execute(args),
    }
}
