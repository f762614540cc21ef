//! codec/codecs/mod.rs
//! Concrete transforms, one per codec kind.
//!
//! Only transforms whose exact formula is known live here. The `.bin` wrapper
//! of the Windows and Linux builds has no implementation; callers that have one
//! register it through `CodecRegistry::register`.

pub mod plain;
pub mod xor_rotate;

pub use plain::*;
pub use xor_rotate::{XorRotateCodec, XorRotateDecoder, XorRotateEncoder, XorRotateState, salt_for_len};
