//! asset/blob.rs
//! Raw content of one packaged asset file.
use std::ops::Deref;
use bytes::Bytes;

/// Immutable raw bytes of one asset, alive for a single read or write.
///
/// The length is part of the keystream seed of obfuscating codecs, so a blob is
/// never sliced or appended to once created.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetBlob(Bytes);

impl AssetBlob {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

impl Deref for AssetBlob {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for AssetBlob {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for AssetBlob {
    fn from(v: Vec<u8>) -> Self {
        Self(Bytes::from(v))
    }
}
