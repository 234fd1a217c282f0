// Fri Jan 16 2026 - Alex

use crate::codec::{DecodeError, RangeError};
use crate::store::StoreError;
use crate::structs::ReadOutput;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StructError {
    #[error("IO error: {0}")]
    Io(#[from] StoreError),
    #[error("Range error: {0}")]
    Range(#[from] RangeError),
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

impl StructError {
    pub fn is_io(&self) -> bool {
        matches!(self, StructError::Io(_))
    }

    pub fn is_range(&self) -> bool {
        matches!(self, StructError::Range(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, StructError::Decode(_))
    }
}

/// A write struct stopped early. Bytes before `offset` are in the store.
#[derive(Error, Debug)]
#[error("write aborted at field {field} (offset {offset}): {error}")]
pub struct WriteFailure {
    #[source]
    pub error: StructError,
    pub offset: u64,
    pub field: usize,
}

/// A read struct stopped early. `partial` holds the fields decoded before it.
#[derive(Error, Debug)]
#[error("read aborted at field {field} (offset {}): {error}", .partial.offset)]
pub struct ReadFailure {
    #[source]
    pub error: StructError,
    pub partial: ReadOutput,
    pub field: usize,
}
