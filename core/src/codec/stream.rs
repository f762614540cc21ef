//! codec/stream.rs
//! Streaming helpers that respect chunk_size discipline.
//!
//! The keystream of the obfuscating codecs is seeded from the total blob length,
//! so the caller declares `total_len` up front. Concatenating the yielded chunks
//! gives exactly the one-shot `encode`/`decode` output.
use std::io::{ErrorKind, Read};

use crate::codec::constants::MAX_CHUNK_SIZE;
use crate::codec::types::{BinCodec, ChunkTransform, CodecError};

fn check_chunk_size(chunk_size: usize) -> Result<(), CodecError> {
    if chunk_size == 0 || chunk_size > MAX_CHUNK_SIZE {
        return Err(CodecError::InvalidChunkSize { have: chunk_size, max: MAX_CHUNK_SIZE });
    }
    Ok(())
}

/// Summary: Encode `total_len` bytes read from R in chunk_size blocks.
pub fn encode_stream<R: Read>(
    r: R,
    total_len: usize,
    chunk_size: usize,
    codec: &dyn BinCodec,
) -> Result<impl Iterator<Item = Result<Vec<u8>, CodecError>>, CodecError> {
    check_chunk_size(chunk_size)?;
    Ok(transform_stream(r, total_len, chunk_size, codec.encoder(total_len)))
}

/// Summary: Decode `total_len` bytes read from R in chunk_size blocks.
pub fn decode_stream<R: Read>(
    r: R,
    total_len: usize,
    chunk_size: usize,
    codec: &dyn BinCodec,
) -> Result<impl Iterator<Item = Result<Vec<u8>, CodecError>>, CodecError> {
    check_chunk_size(chunk_size)?;
    Ok(transform_stream(r, total_len, chunk_size, codec.decoder(total_len)))
}

fn transform_stream<R: Read>(
    mut r: R,
    total_len: usize,
    chunk_size: usize,
    mut transform: Box<dyn ChunkTransform>,
) -> impl Iterator<Item = Result<Vec<u8>, CodecError>> {
    let mut buf = vec![0u8; chunk_size];
    let mut consumed = 0usize;
    let mut done = false;

    std::iter::from_fn(move || {
        if done {
            return None;
        }

        let want = (total_len - consumed).min(chunk_size);
        if want == 0 {
            // Declared length reached; anything left in the reader is an error.
            done = true;
            let mut extra = [0u8; 1];
            return match read_some(&mut r, &mut extra) {
                Ok(0) => None,
                Ok(_) => Some(Err(CodecError::LengthMismatch { expected: total_len })),
                Err(e) => Some(Err(CodecError::Io(e))),
            };
        }

        let mut filled = 0usize;
        while filled < want {
            match read_some(&mut r, &mut buf[filled..want]) {
                Ok(0) => {
                    done = true;
                    return Some(Err(CodecError::Truncated {
                        expected: total_len,
                        actual: consumed + filled,
                    }));
                }
                Ok(n) => filled += n,
                Err(e) => {
                    done = true;
                    return Some(Err(CodecError::Io(e)));
                }
            }
        }
        consumed += filled;

        let mut out = Vec::with_capacity(filled);
        transform.transform_chunk(&buf[..filled], &mut out);
        Some(Ok(out))
    })
}

fn read_some<R: Read>(r: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    loop {
        match r.read(buf) {
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            other => return other,
        }
    }
}
