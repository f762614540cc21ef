//! asset/io.rs
//! Normalized input/output for asset bytes.
//!
//! Every function opens at most one handle and drops it before returning, on
//! success and on error.
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::asset::blob::AssetBlob;
use crate::types::{AssetError, IoOp};

/// Placeholder path reported for errors on non-file sources.
pub(crate) const STREAM_PATH: &str = "<stream>";

/// Canonical input abstraction
pub enum InputSource {
    Reader(Box<dyn Read + Send>),
    File(PathBuf),
    Memory(Vec<u8>),
}

/// Canonical output abstraction
pub enum OutputSink {
    Writer(Box<dyn Write + Send>),
    File(PathBuf),
    Memory,
}

/// Read a whole file into a blob.
pub fn read_blob(path: &Path) -> Result<AssetBlob, AssetError> {
    let mut file = File::open(path).map_err(|e| AssetError::io(IoOp::Open, path, e))?;
    let mut buf = match file.metadata() {
        Ok(m) => Vec::with_capacity(m.len() as usize),
        Err(_) => Vec::new(),
    };
    file.read_to_end(&mut buf).map_err(|e| AssetError::io(IoOp::Read, path, e))?;
    Ok(AssetBlob::from(buf))
}

/// Replace `path` with `bytes`, creating parent directories.
///
/// Bytes go to a sibling temp file that is renamed over `path` once complete,
/// so the target holds either its old content or all of `bytes`.
pub fn write_blob(path: &Path, bytes: &[u8]) -> Result<(), AssetError> {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(|e| AssetError::io(IoOp::CreateDir, parent, e))?;
            parent
        }
        None => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| AssetError::io(IoOp::Create, path, e))?;
    tmp.write_all(bytes).map_err(|e| AssetError::io(IoOp::Write, path, e))?;
    tmp.flush().map_err(|e| AssetError::io(IoOp::Write, path, e))?;
    tmp.persist(path).map_err(|e| AssetError::io(IoOp::Rename, path, e.error))?;
    Ok(())
}

/// Open a file for streaming and report its length.
pub fn open_sized(path: &Path) -> Result<(File, usize), AssetError> {
    let file = File::open(path).map_err(|e| AssetError::io(IoOp::Open, path, e))?;
    let len = file.metadata().map_err(|e| AssetError::io(IoOp::Read, path, e))?.len();
    Ok((file, len as usize))
}

/// Drain an input source into a blob.
pub fn read_input(src: InputSource) -> Result<AssetBlob, AssetError> {
    match src {
        InputSource::File(p) => read_blob(&p),
        InputSource::Memory(b) => Ok(AssetBlob::from(b)),
        InputSource::Reader(mut r) => {
            let mut buf = Vec::new();
            r.read_to_end(&mut buf)
                .map_err(|e| AssetError::io(IoOp::Read, Path::new(STREAM_PATH), e))?;
            Ok(AssetBlob::from(buf))
        }
    }
}

/// Write bytes to an output sink. `OutputSink::Memory` hands the bytes back.
pub fn write_output(sink: OutputSink, bytes: &[u8]) -> Result<Option<Vec<u8>>, AssetError> {
    match sink {
        OutputSink::File(p) => write_blob(&p, bytes).map(|_| None),
        OutputSink::Memory => Ok(Some(bytes.to_vec())),
        OutputSink::Writer(mut w) => {
            let path = Path::new(STREAM_PATH);
            w.write_all(bytes).map_err(|e| AssetError::io(IoOp::Write, path, e))?;
            w.flush().map_err(|e| AssetError::io(IoOp::Write, path, e))?;
            Ok(None)
        }
    }
}
