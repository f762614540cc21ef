/// Stable codec IDs (u16) for configuration and diagnostics.
pub mod codec_ids {
    pub const PLAIN: u16      = 0x0000;
    pub const XOR_ROTATE: u16 = 0x0001;
    pub const AES_BIN: u16    = 0x0002;
}

/// Constant mixed into the length-derived seed of the rotate-feedback XOR codec.
pub const XOR_SALT_MASK: u8 = 0xAB;

/// Default chunk size for the streaming helpers (64 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Max chunk size sanity bound (32 MiB).
pub const MAX_CHUNK_SIZE: usize = 32 * 1024 * 1024;
