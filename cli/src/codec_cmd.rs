//! Single-file commands: decode, encode, verify
//!
//! These work on plain file system paths and an explicit codec; no game
//! install layout is involved.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use gootool_core::asset::naming::inner_format;
use gootool_core::asset::{read_input, write_output, InputSource, OutputSink};
use gootool_core::codec::{BinCodec, CodecKind, CodecRegistry};

use crate::paths::{decoded_output, encoded_output, is_stdout};

/// Arguments for the decode command
#[derive(Args)]
pub struct DecodeArgs {
    /// Encoded input file (e.g. text.xml.bin)
    pub input: PathBuf,

    /// Output file, `-` for stdout (default: input without `.bin`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Codec to apply: xor, plain
    #[arg(long, default_value = "xor")]
    pub codec: CodecKind,
}

/// Arguments for the encode command
#[derive(Args)]
pub struct EncodeArgs {
    /// Plain input file (e.g. text.xml)
    pub input: PathBuf,

    /// Output file, `-` for stdout (default: input with `.bin` appended)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Codec to apply: xor, plain
    #[arg(long, default_value = "xor")]
    pub codec: CodecKind,
}

/// Arguments for the verify command
#[derive(Args)]
pub struct VerifyArgs {
    /// Encoded files to check
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Codec the files are wrapped with
    #[arg(long, default_value = "xor")]
    pub codec: CodecKind,
}

fn codec(kind: CodecKind) -> Result<Arc<dyn BinCodec>> {
    CodecRegistry::with_defaults()
        .resolve(kind)
        .with_context(|| format!("Codec '{}' is not available", kind))
}

fn read(path: &Path) -> Result<Vec<u8>> {
    let blob = read_input(InputSource::File(path.to_path_buf()))
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(blob.to_vec())
}

fn write(path: &Path, bytes: &[u8]) -> Result<()> {
    let sink = if is_stdout(path) {
        OutputSink::Writer(Box::new(std::io::stdout()))
    } else {
        OutputSink::File(path.to_path_buf())
    };
    write_output(sink, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Execute the decode command
pub fn decode(args: DecodeArgs) -> Result<()> {
    let codec = codec(args.codec)?;
    let raw = read(&args.input)?;
    let output = args.output.unwrap_or_else(|| decoded_output(&args.input));

    let plain = codec.decode(&raw);
    write(&output, &plain)?;

    tracing::info!(
        input = %args.input.display(),
        output = %output.display(),
        codec = %args.codec,
        bytes = plain.len(),
        "decoded"
    );
    Ok(())
}

/// Execute the encode command
pub fn encode(args: EncodeArgs) -> Result<()> {
    let codec = codec(args.codec)?;
    let plain = read(&args.input)?;
    let output = args.output.unwrap_or_else(|| encoded_output(&args.input));

    let raw = codec.encode(&plain);
    write(&output, &raw)?;

    tracing::info!(
        input = %args.input.display(),
        output = %output.display(),
        codec = %args.codec,
        bytes = raw.len(),
        "encoded"
    );
    Ok(())
}

/// Execute the verify command
pub fn verify(args: VerifyArgs) -> Result<()> {
    let codec = codec(args.codec)?;
    verify_with(codec.as_ref(), &args.inputs)
}

fn verify_with(codec: &dyn BinCodec, inputs: &[PathBuf]) -> Result<()> {
    let mut mismatches = 0usize;

    for input in inputs {
        let raw = read(input)?;
        let plain = codec.decode(&raw);
        let again = codec.encode(&plain);

        let name = input.to_string_lossy();
        let format = inner_format(&name).unwrap_or("?");
        if again == raw {
            println!("ok        {} ({}, {} bytes)", input.display(), format, raw.len());
        } else {
            mismatches += 1;
            println!("MISMATCH  {}", input.display());
        }
    }

    if mismatches > 0 {
        anyhow::bail!("{} of {} files failed to round trip", mismatches, inputs.len());
    }
    Ok(())
}
