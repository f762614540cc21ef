//! config.rs
//! Facade configuration.

use crate::codec::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
use crate::platform::{Platform, PlatformError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessConfig {
    /// Install layout and `.bin` codec selection.
    pub platform: Platform,

    /// Chunk size for streamed reads (`AssetSource::stream_asset`).
    pub chunk_size: usize,

    /// Worker threads for batch decoding. `0` → one per CPU.
    pub workers: usize,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            platform: Platform::current(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            workers: 0,
        }
    }
}

impl AccessConfig {
    pub fn new(platform: Platform) -> Self {
        Self { platform, ..Self::default() }
    }

    /// Default config with the platform taken from `GOOTOOL_PLATFORM` if set.
    pub fn from_env() -> Result<Self, PlatformError> {
        Ok(Self::new(Platform::detect()?))
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.clamp(1, MAX_CHUNK_SIZE);
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Worker count with `0` resolved to the number of CPUs.
    pub fn effective_workers(&self) -> usize {
        match self.workers {
            0 => num_cpus::get().max(1),
            n => n,
        }
    }
}
