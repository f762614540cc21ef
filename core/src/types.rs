use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::{codec::CodecError, platform::PlatformError};

/// File operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOp {
    Open,
    Read,
    Create,
    Write,
    CreateDir,
    Rename,
}

impl fmt::Display for IoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IoOp::Open      => "open",
            IoOp::Read      => "read",
            IoOp::Create    => "create",
            IoOp::Write     => "write",
            IoOp::CreateDir => "create dir",
            IoOp::Rename    => "rename",
        };
        f.write_str(name)
    }
}

/// Unified asset access error.
/// - I/O failures carry the operation and path and are never absorbed.
/// - Codec and platform errors are configuration problems, not per-file ones.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("I/O error ({op}) on {path:?}: {source}")]
    Io {
        op: IoOp,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("invalid asset path {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("worker error: {0}")]
    Worker(String),
}

impl AssetError {
    pub fn io(op: IoOp, path: &Path, source: io::Error) -> Self {
        AssetError::Io { op, path: path.to_path_buf(), source }
    }

    /// True for per-call file system failures (missing file, permissions, ...).
    pub fn is_io(&self) -> bool {
        matches!(self, AssetError::Io { .. } | AssetError::Codec(CodecError::Io(_)))
    }

    /// Kind of the underlying I/O error, if any.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            AssetError::Io { source, .. } => Some(source.kind()),
            AssetError::Codec(CodecError::Io(e)) => Some(e.kind()),
            _ => None,
        }
    }
}
