//! codecs/plain.rs
//! Pass-through codec for assets stored without an obfuscation wrapper.

use crate::codec::types::{BinCodec, ChunkTransform, CodecInfo, CodecKind};

pub struct PlainChunks;

impl ChunkTransform for PlainChunks {
    fn transform_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) {
        out.extend_from_slice(input);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainCodec;

impl BinCodec for PlainCodec {
    fn kind(&self) -> CodecKind {
        CodecKind::Plain
    }

    fn info(&self) -> CodecInfo {
        CodecInfo { name: "plain", obfuscates: false }
    }

    fn encode(&self, input: &[u8]) -> Vec<u8> {
        input.to_vec()
    }

    fn decode(&self, input: &[u8]) -> Vec<u8> {
        input.to_vec()
    }

    fn encoder(&self, _total_len: usize) -> Box<dyn ChunkTransform> {
        Box::new(PlainChunks)
    }

    fn decoder(&self, _total_len: usize) -> Box<dyn ChunkTransform> {
        Box::new(PlainChunks)
    }
}
