//! asset/source.rs
//! Asset access facade: platform root + registry-selected codec + file I/O.
//!
//! Holds no transform logic. The platform's `.bin` codec is resolved once at
//! construction so a missing registration surfaces before any file is touched.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use crate::asset::io::{open_sized, read_blob, write_blob, STREAM_PATH};
use crate::asset::naming::{is_wrapped, resolve};
use crate::codec::{decode_stream, BinCodec, CodecError, CodecKind, CodecRegistry};
use crate::config::AccessConfig;
use crate::platform::Platform;
use crate::telemetry::{Stage, StageTimes, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::{AssetError, IoOp};

#[derive(Debug, Default)]
struct TelemetryState {
    counters: TelemetryCounters,
    timer: TelemetryTimer,
}

#[derive(Debug)]
pub struct AssetSource {
    real_root: PathBuf,
    game_root: PathBuf,
    config: AccessConfig,
    registry: Arc<CodecRegistry>,
    bin_codec: Arc<dyn BinCodec>,
    telemetry: Mutex<TelemetryState>,
}

impl AssetSource {
    /// Bind a game install at `root`.
    ///
    /// Fails with `CodecError::UnregisteredCodec` when the registry has no codec
    /// for the platform's `.bin` wrapper.
    pub fn new(
        root: impl Into<PathBuf>,
        config: AccessConfig,
        registry: Arc<CodecRegistry>,
    ) -> Result<Self, AssetError> {
        let real_root = root.into();
        let platform = config.platform;
        let game_root = platform.game_root(&real_root);
        registry.require(&[CodecKind::Plain])?;
        let bin_codec = registry.resolve(platform.bin_codec())?;

        tracing::debug!(
            %platform,
            root = %real_root.display(),
            game_root = %game_root.display(),
            codec = bin_codec.info().name,
            "asset source opened"
        );

        Ok(Self {
            real_root,
            game_root,
            config,
            registry,
            bin_codec,
            telemetry: Mutex::new(TelemetryState::default()),
        })
    }

    /// Default registry and a config detected from the environment.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, AssetError> {
        let config = AccessConfig::from_env()?;
        Self::new(root, config, Arc::new(CodecRegistry::with_defaults()))
    }

    pub fn platform(&self) -> Platform {
        self.config.platform
    }

    pub fn config(&self) -> &AccessConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<CodecRegistry> {
        &self.registry
    }

    pub fn real_root(&self) -> &Path {
        &self.real_root
    }

    pub fn game_root(&self) -> &Path {
        &self.game_root
    }

    /// Concrete location of a logical game file.
    pub fn game_file(&self, logical: &str) -> Result<PathBuf, AssetError> {
        resolve(&self.game_root, logical)
    }

    /// Codec chosen from the file name: `.bin` → platform codec, else plain.
    pub fn codec_for(&self, logical: &str) -> Result<Arc<dyn BinCodec>, AssetError> {
        if is_wrapped(logical) {
            Ok(self.bin_codec.clone())
        } else {
            Ok(self.registry.resolve(CodecKind::Plain)?)
        }
    }

    /// Read and decode a logical asset, picking the codec from its name.
    pub fn read_asset(&self, logical: &str) -> Result<Vec<u8>, AssetError> {
        let codec = self.codec_for(logical)?;
        self.read_with_codec(logical, codec.as_ref())
    }

    /// Read and decode a logical asset with an explicit codec kind.
    pub fn read_with(&self, logical: &str, kind: CodecKind) -> Result<Vec<u8>, AssetError> {
        let codec = self.registry.resolve(kind)?;
        self.read_with_codec(logical, codec.as_ref())
    }

    /// Encode and write a logical asset, picking the codec from its name.
    pub fn write_asset(&self, logical: &str, payload: &[u8]) -> Result<(), AssetError> {
        let codec = self.codec_for(logical)?;
        self.write_with_codec(logical, codec.as_ref(), payload)
    }

    /// Encode and write a logical asset with an explicit codec kind.
    pub fn write_with(&self, logical: &str, kind: CodecKind, payload: &[u8]) -> Result<(), AssetError> {
        let codec = self.registry.resolve(kind)?;
        self.write_with_codec(logical, codec.as_ref(), payload)
    }

    /// Decode a logical asset straight into `out`, `config.chunk_size` bytes at
    /// a time. Returns the number of bytes written.
    pub fn stream_asset<W: Write>(&self, logical: &str, out: &mut W) -> Result<u64, AssetError> {
        let codec = self.codec_for(logical)?;
        let path = self.game_file(logical)?;
        let start = Instant::now();

        let result = self.stream_file(&path, codec.as_ref(), out);

        let mut state = self.lock_telemetry();
        match &result {
            Ok(n) => {
                state.counters.add_read(*n as usize);
                state.timer.add_stage_time(Stage::Decode, start.elapsed());
            }
            Err(_) => state.counters.add_failure(),
        }
        result
    }

    fn stream_file<W: Write>(
        &self,
        path: &Path,
        codec: &dyn BinCodec,
        out: &mut W,
    ) -> Result<u64, AssetError> {
        let (file, len) = open_sized(path)?;
        let mut written = 0u64;
        for chunk in decode_stream(file, len, self.config.chunk_size, codec)? {
            let chunk = chunk.map_err(|e| match e {
                CodecError::Io(e) => AssetError::io(IoOp::Read, path, e),
                other => AssetError::Codec(other),
            })?;
            out.write_all(&chunk)
                .map_err(|e| AssetError::io(IoOp::Write, Path::new(STREAM_PATH), e))?;
            written += chunk.len() as u64;
        }
        Ok(written)
    }

    /// Snapshot of everything this source has read and written so far.
    pub fn telemetry(&self) -> TelemetrySnapshot {
        let state = self.lock_telemetry();
        TelemetrySnapshot::from(&state.counters, &state.timer)
    }

    fn read_with_codec(&self, logical: &str, codec: &dyn BinCodec) -> Result<Vec<u8>, AssetError> {
        let mut counters = TelemetryCounters::default();
        let mut times = StageTimes::default();
        let result = self.decode_file(logical, codec, &mut counters, &mut times);
        self.merge_telemetry(&counters, &times);
        result
    }

    fn write_with_codec(
        &self,
        logical: &str,
        codec: &dyn BinCodec,
        payload: &[u8],
    ) -> Result<(), AssetError> {
        let mut counters = TelemetryCounters::default();
        let mut times = StageTimes::default();
        let result = self.encode_file(logical, codec, payload, &mut times);
        match &result {
            Ok(()) => counters.add_write(payload.len()),
            Err(_) => counters.add_failure(),
        }
        self.merge_telemetry(&counters, &times);
        result
    }

    /// Read + decode one file, recording into caller-owned counters.
    pub(crate) fn decode_file(
        &self,
        logical: &str,
        codec: &dyn BinCodec,
        counters: &mut TelemetryCounters,
        times: &mut StageTimes,
    ) -> Result<Vec<u8>, AssetError> {
        let result = self.read_decode(logical, codec, times);

        match &result {
            Ok(payload) => counters.add_read(payload.len()),
            Err(e) => {
                tracing::debug!(asset = logical, error = %e, "asset read failed");
                counters.add_failure();
            }
        }
        result
    }

    fn read_decode(
        &self,
        logical: &str,
        codec: &dyn BinCodec,
        times: &mut StageTimes,
    ) -> Result<Vec<u8>, AssetError> {
        let path = self.game_file(logical)?;

        let blob = times.time(Stage::Read, || read_blob(&path))?;
        let payload = times.time(Stage::Decode, || codec.decode(&blob));

        tracing::debug!(
            asset = logical,
            codec = codec.info().name,
            len = payload.len(),
            "decoded asset"
        );
        Ok(payload)
    }

    fn encode_file(
        &self,
        logical: &str,
        codec: &dyn BinCodec,
        payload: &[u8],
        times: &mut StageTimes,
    ) -> Result<(), AssetError> {
        let path = self.game_file(logical)?;

        let raw = times.time(Stage::Encode, || codec.encode(payload));
        times.time(Stage::Write, || write_blob(&path, &raw))?;

        tracing::debug!(
            asset = logical,
            codec = codec.info().name,
            len = raw.len(),
            "encoded asset"
        );
        Ok(())
    }

    pub(crate) fn merge_telemetry(&self, counters: &TelemetryCounters, times: &StageTimes) {
        let mut state = self.lock_telemetry();
        state.counters.merge(counters);
        state.timer.stage_times.merge(times);
    }

    fn lock_telemetry(&self) -> MutexGuard<'_, TelemetryState> {
        // Counters stay usable even if a panicking thread held the lock.
        self.telemetry.lock().unwrap_or_else(|e| e.into_inner())
    }
}
