//! codec/registry.rs
//! Codec registry: one shared transform instance per codec kind.
//!
//! Built once at startup, then shared read-only behind an `Arc`.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::codec::codecs::{PlainCodec, XorRotateCodec};
use crate::codec::types::{BinCodec, CodecError, CodecInfo, CodecKind};

#[derive(Clone, Default)]
pub struct CodecRegistry {
    codecs: BTreeMap<CodecKind, Arc<dyn BinCodec>>,
}

impl CodecRegistry {
    /// Empty registry. Every lookup fails until codecs are registered.
    pub fn new() -> Self {
        Self { codecs: BTreeMap::new() }
    }

    /// Registry holding every transform whose algorithm is known.
    pub fn with_defaults() -> Self {
        Self::new()
            .register(Arc::new(PlainCodec))
            .register(Arc::new(XorRotateCodec))
    }

    /// Add a codec under its own kind, replacing any previous one.
    pub fn register(mut self, codec: Arc<dyn BinCodec>) -> Self {
        let kind = codec.kind();
        if let Some(prev) = self.codecs.insert(kind, codec) {
            tracing::warn!(%kind, replaced = prev.info().name, "codec registration replaced");
        }
        self
    }

    pub fn resolve(&self, kind: CodecKind) -> Result<Arc<dyn BinCodec>, CodecError> {
        self.codecs
            .get(&kind)
            .cloned()
            .ok_or(CodecError::UnregisteredCodec { kind })
    }

    pub fn resolve_raw(&self, raw: u16) -> Result<Arc<dyn BinCodec>, CodecError> {
        self.resolve(CodecKind::from_raw(raw)?)
    }

    pub fn resolve_info(&self, kind: CodecKind) -> Result<CodecInfo, CodecError> {
        self.resolve(kind).map(|c| c.info())
    }

    pub fn contains(&self, kind: CodecKind) -> bool {
        self.codecs.contains_key(&kind)
    }

    /// Fail on the first required kind that has no codec.
    pub fn require(&self, kinds: &[CodecKind]) -> Result<(), CodecError> {
        match kinds.iter().find(|k| !self.contains(**k)) {
            Some(&kind) => Err(CodecError::UnregisteredCodec { kind }),
            None => Ok(()),
        }
    }

    /// Registered kinds in id order.
    pub fn kinds(&self) -> Vec<CodecKind> {
        self.codecs.keys().copied().collect()
    }
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}
