//! gootool - read and write packaged World of Goo assets
//!
//! # Commands
//!
//! - `gootool decode` - Decode one `.bin` file to its inner content
//! - `gootool encode` - Encode a file into its `.bin` wrapper
//! - `gootool verify` - Check that decode then encode reproduces each input
//! - `gootool cat` - Print a logical asset of a game install to stdout
//! - `gootool batch` - Decode many logical assets concurrently into a directory
//!
//! # Usage
//!
//! ```bash
//! # Decode a single file next to the input (text.xml)
//! gootool decode text.xml.bin
//!
//! # Read through a macOS install without knowing its bundle layout
//! gootool cat --root "/Applications/World of Goo.app" --platform mac properties/text.xml.bin
//! ```
//!
//! Logging goes to stderr and honours `RUST_LOG`; `-v` raises the default to `debug`.

mod codec_cmd;
mod paths;
mod source_cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// gootool - read and write packaged World of Goo assets
#[derive(Parser)]
#[command(name = "gootool")]
#[command(about = "Decode and encode World of Goo asset files")]
#[command(version)]
struct Cli {
    /// Verbose logging (debug level unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode one file with an explicit codec
    Decode(codec_cmd::DecodeArgs),

    /// Encode one file with an explicit codec
    Encode(codec_cmd::EncodeArgs),

    /// Decode then re-encode files and compare with the input bytes
    Verify(codec_cmd::VerifyArgs),

    /// Decode a logical asset of a game install to stdout
    Cat(source_cmd::CatArgs),

    /// Decode many logical assets of a game install into a directory
    Batch(source_cmd::BatchArgs),
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Decode(args) => codec_cmd::decode(args),
        Commands::Encode(args) => codec_cmd::encode(args),
        Commands::Verify(args) => codec_cmd::verify(args),
        Commands::Cat(args) => source_cmd::cat(args),
        Commands::Batch(args) => source_cmd::batch(args),
    }
}
