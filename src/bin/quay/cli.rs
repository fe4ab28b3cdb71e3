//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Quay - platform-aware native link-set resolver for plugin modules
#[derive(Parser)]
#[command(name = "quay")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a module descriptor into an ordered link plan
    Resolve(ResolveArgs),

    /// Validate a module descriptor without touching the library tree
    Check(CheckArgs),

    /// Show the per-platform archive naming conventions
    Platforms,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Target platform identifier (Win64, Mac, Linux, Android, IOS)
    #[arg(short, long)]
    pub platform: String,

    /// Build configuration (Debug, DebugGame, Development, Shipping)
    #[arg(short, long, default_value = "Development")]
    pub config: String,

    /// Path to the module descriptor
    #[arg(long, default_value = "Module.toml")]
    pub descriptor: PathBuf,

    /// Directory containing the Debug/ and Release/ library directories
    /// (defaults to ThirdParty/Lib next to the descriptor)
    #[arg(long)]
    pub lib_dir: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    pub format: String,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Path to the module descriptor
    #[arg(default_value = "Module.toml")]
    pub descriptor: PathBuf,
}
