//! codec/types.rs
//! Codec identifiers, errors and the transform traits every variant implements.
use std::fmt;
use std::io;
use std::str::FromStr;
use num_enum::TryFromPrimitive;

use crate::codec::constants::codec_ids;

/// Codec category tag. Exactly one transform is registered per kind.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, TryFromPrimitive)]
pub enum CodecKind {
    /// No obfuscation wrapper; bytes pass through unchanged.
    Plain     = codec_ids::PLAIN,
    /// Rotate-feedback XOR, used by `.bin` assets of the macOS build.
    XorRotate = codec_ids::XOR_ROTATE,
    /// `.bin` wrapper of the Windows and Linux builds. Declared only; no
    /// implementation is registered by default.
    AesBin    = codec_ids::AES_BIN,
}

impl CodecKind {
    pub fn from_raw(raw: u16) -> Result<Self, CodecError> {
        CodecKind::try_from_primitive(raw).map_err(|_| CodecError::UnknownCodec { raw })
    }

    pub fn name(&self) -> &'static str {
        match self {
            CodecKind::Plain     => "plain",
            CodecKind::XorRotate => "xor",
            CodecKind::AesBin    => "aes",
        }
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CodecKind {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" | "none"                  => Ok(CodecKind::Plain),
            "xor" | "xor-rotate" | "mac"      => Ok(CodecKind::XorRotate),
            "aes" | "aes-bin"                 => Ok(CodecKind::AesBin),
            other => Err(CodecError::UnknownCodecName(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("unknown codec id: 0x{raw:04x}")]
    UnknownCodec { raw: u16 },

    #[error("unknown codec name: {0:?}")]
    UnknownCodecName(String),

    #[error("no codec registered for {kind:?}")]
    UnregisteredCodec { kind: CodecKind },

    #[error("invalid chunk size: {have} (must be 1..={max})")]
    InvalidChunkSize { have: usize, max: usize },

    #[error("input truncated: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("input longer than declared length {expected}")]
    LengthMismatch { expected: usize },

    #[error("read error: {0}")]
    Io(#[from] io::Error),
}

/// Static description of a registered codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecInfo {
    pub name: &'static str,
    pub obfuscates: bool,
}

/// One direction of a transform, fed chunk by chunk.
///
/// An instance covers exactly one logical blob; state does not outlive it.
pub trait ChunkTransform: Send {
    /// Transform `input` and append the result to `out`.
    fn transform_chunk(&mut self, input: &[u8], out: &mut Vec<u8>);
}

/// Encode/decode pair for one codec variant.
///
/// Implementations are stateless values: `encode` and `decode` depend on their
/// input bytes only, are length-preserving and never fail.
pub trait BinCodec: Send + Sync + fmt::Debug {
    fn kind(&self) -> CodecKind;

    fn info(&self) -> CodecInfo;

    fn encode(&self, input: &[u8]) -> Vec<u8>;

    fn decode(&self, input: &[u8]) -> Vec<u8>;

    /// Chunked encoder for a blob of `total_len` bytes.
    fn encoder(&self, total_len: usize) -> Box<dyn ChunkTransform>;

    /// Chunked decoder for a blob of `total_len` bytes.
    fn decoder(&self, total_len: usize) -> Box<dyn ChunkTransform>;
}
