//! codecs/xor_rotate.rs
//! Rotate-feedback XOR transform used by `.bin` assets of the macOS build.
//!
//! Keystream:
//! - Seed byte is derived from the blob length (bits 0, 1, 2 of `len`), then
//!   mixed with `XOR_SALT_MASK`.
//! - After every byte the salt is rotated left by one bit and XORed with the
//!   ciphertext byte of that step. Decode consumes that byte, encode produces it,
//!   so both sides walk the same keystream.

use crate::codec::constants::XOR_SALT_MASK;
use crate::codec::types::{BinCodec, ChunkTransform, CodecInfo, CodecKind};

/// Seed salt for a blob of `len` bytes.
///
/// Bit 0 of `len` moves to bit 6, bit 1 to bit 4, bit 2 stays at bit 2.
/// Only `len mod 8` matters.
#[inline]
pub fn salt_for_len(len: usize) -> u8 {
    let seed = ((len & 1) << 6) | ((len & 2) << 3) | (len & 4);
    (seed as u8) ^ XOR_SALT_MASK
}

/// Evolving salt of one blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XorRotateState {
    salt: u8,
}

impl XorRotateState {
    pub fn for_len(len: usize) -> Self {
        Self { salt: salt_for_len(len) }
    }

    pub fn salt(&self) -> u8 {
        self.salt
    }

    #[inline]
    fn feed(&mut self, ciphertext: u8) {
        self.salt = self.salt.rotate_left(1) ^ ciphertext;
    }

    #[inline]
    pub fn decode_byte(&mut self, ciphertext: u8) -> u8 {
        let plain = self.salt ^ ciphertext;
        self.feed(ciphertext);
        plain
    }

    #[inline]
    pub fn encode_byte(&mut self, plain: u8) -> u8 {
        let ciphertext = self.salt ^ plain;
        self.feed(ciphertext);
        ciphertext
    }
}

/// Deobfuscate a whole blob.
pub fn decode(input: &[u8]) -> Vec<u8> {
    let mut state = XorRotateState::for_len(input.len());
    input.iter().map(|&b| state.decode_byte(b)).collect()
}

/// Obfuscate a whole blob.
pub fn encode(input: &[u8]) -> Vec<u8> {
    let mut state = XorRotateState::for_len(input.len());
    input.iter().map(|&b| state.encode_byte(b)).collect()
}

pub struct XorRotateEncoder {
    state: XorRotateState,
}

impl XorRotateEncoder {
    pub fn new(total_len: usize) -> Self {
        Self { state: XorRotateState::for_len(total_len) }
    }
}

impl ChunkTransform for XorRotateEncoder {
    fn transform_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) {
        out.reserve(input.len());
        out.extend(input.iter().map(|&b| self.state.encode_byte(b)));
    }
}

pub struct XorRotateDecoder {
    state: XorRotateState,
}

impl XorRotateDecoder {
    pub fn new(total_len: usize) -> Self {
        Self { state: XorRotateState::for_len(total_len) }
    }
}

impl ChunkTransform for XorRotateDecoder {
    fn transform_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) {
        out.reserve(input.len());
        out.extend(input.iter().map(|&b| self.state.decode_byte(b)));
    }
}

/// Registry handle for the rotate-feedback XOR transform.
#[derive(Debug, Clone, Copy, Default)]
pub struct XorRotateCodec;

impl BinCodec for XorRotateCodec {
    fn kind(&self) -> CodecKind {
        CodecKind::XorRotate
    }

    fn info(&self) -> CodecInfo {
        CodecInfo { name: "xor-rotate", obfuscates: true }
    }

    fn encode(&self, input: &[u8]) -> Vec<u8> {
        encode(input)
    }

    fn decode(&self, input: &[u8]) -> Vec<u8> {
        decode(input)
    }

    fn encoder(&self, total_len: usize) -> Box<dyn ChunkTransform> {
        Box::new(XorRotateEncoder::new(total_len))
    }

    fn decoder(&self, total_len: usize) -> Box<dyn ChunkTransform> {
        Box::new(XorRotateDecoder::new(total_len))
    }
}
