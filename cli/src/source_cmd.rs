//! Commands that go through a game install: cat, batch

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use gootool_core::asset::naming::{inner_name, resolve};
use gootool_core::asset::{decode_all, write_blob, AssetSource};
use gootool_core::codec::{CodecRegistry, DEFAULT_CHUNK_SIZE};
use gootool_core::config::AccessConfig;
use gootool_core::platform::Platform;

/// Where the game lives and how it is laid out
#[derive(Args)]
pub struct SourceArgs {
    /// Game install directory (the `.app` bundle on macOS)
    #[arg(long)]
    pub root: PathBuf,

    /// Install layout: windows, linux, mac (default: GOOTOOL_PLATFORM or host)
    #[arg(long)]
    pub platform: Option<Platform>,

    /// Bytes per streamed chunk
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,
}

impl SourceArgs {
    fn config(&self) -> Result<AccessConfig> {
        let config = match self.platform {
            Some(platform) => AccessConfig::new(platform),
            None => AccessConfig::from_env().context("Failed to detect platform")?,
        };
        Ok(config.with_chunk_size(self.chunk_size))
    }

    fn open(&self, workers: usize) -> Result<AssetSource> {
        let config = self.config()?.with_workers(workers);
        let platform = config.platform;
        AssetSource::new(&self.root, config, Arc::new(CodecRegistry::with_defaults()))
            .with_context(|| format!("Cannot read {} assets from {}", platform, self.root.display()))
    }
}

/// Arguments for the cat command
#[derive(Args)]
pub struct CatArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Logical asset path (e.g. properties/text.xml.bin)
    pub asset: String,
}

/// Arguments for the batch command
#[derive(Args)]
pub struct BatchArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Directory that receives the decoded files
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,

    /// Worker threads (0 = one per CPU)
    #[arg(long, default_value_t = 0)]
    pub workers: usize,

    /// Print the telemetry snapshot as JSON when done
    #[arg(long)]
    pub stats: bool,

    /// Logical asset paths
    #[arg(required = true)]
    pub assets: Vec<String>,
}

/// Execute the cat command
pub fn cat(args: CatArgs) -> Result<()> {
    let source = args.source.open(0)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let n = source
        .stream_asset(&args.asset, &mut out)
        .with_context(|| format!("Failed to read asset '{}'", args.asset))?;
    out.flush().context("Failed to flush stdout")?;

    tracing::debug!(asset = %args.asset, bytes = n, "cat finished");
    Ok(())
}

/// Execute the batch command
pub fn batch(args: BatchArgs) -> Result<()> {
    let source = args.source.open(args.workers)?;
    let items = decode_all(&source, &args.assets, args.workers).context("Batch decode failed")?;

    let mut failures = 0usize;
    for item in items {
        let written = item.result.and_then(|payload| {
            let target = resolve(&args.out, inner_name(&item.logical))?;
            write_blob(&target, &payload)?;
            Ok(target)
        });
        match written {
            Ok(target) => tracing::info!(asset = %item.logical, output = %target.display(), "decoded"),
            Err(e) => {
                failures += 1;
                tracing::error!(asset = %item.logical, error = %e, "failed");
            }
        }
    }

    if args.stats {
        let snapshot = source.telemetry();
        println!("{}", snapshot.to_json().context("Failed to serialise telemetry")?);
    }

    if failures > 0 {
        anyhow::bail!("{} of {} assets failed", failures, args.assets.len());
    }
    Ok(())
}
