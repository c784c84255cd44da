use clap::{Parser, Subcommand};

/// CLI arguments for seacam-cli
#[derive(Debug, Parser)]
#[command(
    name = "seacam",
    version,
    about = "CLI for inspecting the Seattle traffic-camera dataset"
)]
pub struct CliArgs {
    /// Path to an input JSON file (default: the bundled sample dataset)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Fetch the live dataset from data.seattle.gov instead of reading a file
    #[arg(long = "fetch", global = true, conflicts_with = "input")]
    pub fetch: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show camera totals by owning agency
    Stats,

    /// List all cameras with their agency
    Cameras,

    /// Filter cameras by a name substring and show the matching totals
    Filter {
        /// Substring to match (case-insensitive, unanchored, not trimmed)
        query: String,
    },
}
