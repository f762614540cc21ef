//! codec/mod.rs
//! Reversible byte transforms applied to packaged game assets.
//!
//! Notes:
//! - Every transform is total and length-preserving; errors only come from I/O
//!   in the streaming helpers or from registry lookups.
//! - Registry resolves codec kinds to shared implementations.

pub mod constants;
pub mod types;
pub mod registry;
pub mod codecs;
pub mod stream;

pub use constants::*;
pub use types::*;
pub use registry::*;
pub use stream::*;
