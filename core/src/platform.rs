//! platform.rs
//! Platform detection and the per-platform install layout.
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::codec::CodecKind;

/// Game root inside a macOS application bundle.
pub const MAC_GAME_SUBDIR: &str = "Contents/Resources/game";

/// Environment variable that overrides platform detection.
pub const PLATFORM_ENV: &str = "GOOTOOL_PLATFORM";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Linux,
    MacOsx,
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("unknown platform: {0:?}")]
    Unknown(String),
}

impl Platform {
    /// Platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOsx
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    /// `GOOTOOL_PLATFORM` when set, otherwise the build platform.
    pub fn detect() -> Result<Self, PlatformError> {
        match std::env::var(PLATFORM_ENV) {
            Ok(v) if !v.trim().is_empty() => v.parse(),
            _ => Ok(Self::current()),
        }
    }

    /// Directory that holds `res/`, `properties/` and friends.
    pub fn game_root(&self, real_root: &Path) -> PathBuf {
        match self {
            Platform::Windows | Platform::Linux => real_root.to_path_buf(),
            Platform::MacOsx => real_root.join(MAC_GAME_SUBDIR),
        }
    }

    /// Codec wrapping `.bin` assets on this platform.
    pub fn bin_codec(&self) -> CodecKind {
        match self {
            Platform::MacOsx => CodecKind::XorRotate,
            Platform::Windows | Platform::Linux => CodecKind::AesBin,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Linux   => "linux",
            Platform::MacOsx  => "macosx",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" | "win"              => Ok(Platform::Windows),
            "linux"                        => Ok(Platform::Linux),
            "mac" | "macos" | "macosx"     => Ok(Platform::MacOsx),
            _ => Err(PlatformError::Unknown(s.to_string())),
        }
    }
}
