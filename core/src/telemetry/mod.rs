//! telemetry/mod.rs
//! Counters, stage timers and immutable snapshots for asset access.
//!
//! Notes:
//! - Workers collect into their own counters and merge once, no shared atomics.
//! - Snapshots are plain data and serialise to JSON for the CLI.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
