//! gootool-core
//!
//! Codec layer for World of Goo game assets.
//! Reversible byte transforms, a codec registry and an asset access facade.
//! No GUI, no XML parsing.

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod platform;
pub mod types;

pub mod codec;
pub mod asset;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::asset::{AssetBlob, AssetSource, BatchItem, decode_all};
    pub use crate::codec::{BinCodec, CodecError, CodecKind, CodecRegistry};
    pub use crate::config::AccessConfig;
    pub use crate::platform::Platform;
    pub use crate::types::AssetError;
}
