//! asset/mod.rs
//! Locating, reading and writing packaged game assets.
//!
//! Notes:
//! - `AssetSource` maps logical paths onto the platform game root and applies
//!   the registry-selected codec; it owns no transform logic.
//! - Blobs live for exactly one read or write; nothing is cached.

pub mod blob;
pub mod naming;
pub mod io;
pub mod source;
pub mod batch;

pub use blob::*;
pub use naming::*;
pub use io::*;
pub use source::*;
pub use batch::*;
