// Fri Jan 16 2026 - Alex

use crate::codec::{DecodeError, RangeError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Short read at offset {pos}: expected {expected} bytes, got {actual}")]
    ShortRead { pos: u64, expected: usize, actual: usize },
    #[error("Short write at offset {pos}: expected {expected} bytes, wrote {actual}")]
    ShortWrite { pos: u64, expected: usize, actual: usize },
    #[error("Store is read-only")]
    ReadOnly,
    #[error("Out of bounds: offset {0} overflows the store")]
    OutOfBounds(u64),
    #[error("Range error: {0}")]
    Range(#[from] RangeError),
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}
