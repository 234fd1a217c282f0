// Fri Jan 16 2026 - Alex

use crate::codec::{self, Endian, TextDecoding};
use crate::store::StoreError;

/// Positional byte storage. Every call names its own offset; nothing here
/// depends on or moves a shared cursor.
pub trait ByteStore: Send + Sync {
    /// Reads up to `len` bytes at `pos`. May return fewer bytes at end of store.
    fn read_at(&self, pos: u64, len: usize) -> Result<Vec<u8>, StoreError>;
    /// Writes `data` at `pos` and returns how many bytes were committed.
    fn write_at(&self, pos: u64, data: &[u8]) -> Result<usize, StoreError>;
    fn size(&self) -> Result<u64, StoreError>;

    fn read_exact_at(&self, pos: u64, len: usize) -> Result<Vec<u8>, StoreError> {
        let bytes = self.read_at(pos, len)?;
        if bytes.len() != len {
            return Err(StoreError::ShortRead {
                pos,
                expected: len,
                actual: bytes.len(),
            });
        }
        Ok(bytes)
    }

    fn read_uint(&self, pos: u64, width: usize, endian: Endian) -> Result<u64, StoreError> {
        codec::int::check_width(width, codec::MAX_WIDTH)?;
        let bytes = self.read_exact_at(pos, width)?;
        Ok(codec::decode_uint(&bytes, endian)?)
    }

    fn read_int(&self, pos: u64, width: usize, endian: Endian) -> Result<i64, StoreError> {
        codec::int::check_width(width, codec::MAX_WIDTH)?;
        let bytes = self.read_exact_at(pos, width)?;
        Ok(codec::decode_int(&bytes, endian)?)
    }

    fn read_string(&self, pos: u64, len: usize) -> Result<String, StoreError> {
        let bytes = self.read_exact_at(pos, len)?;
        Ok(TextDecoding::Strict.decode(bytes)?)
    }

    fn read_buffer(&self, pos: u64, len: usize) -> Result<Vec<u8>, StoreError> {
        self.read_exact_at(pos, len)
    }

    fn write_uint(&self, pos: u64, value: i128, width: usize, endian: Endian) -> Result<usize, StoreError> {
        let bytes = codec::encode_uint(value, width, endian)?;
        self.write_at(pos, &bytes)
    }

    fn write_int(&self, pos: u64, value: i128, width: usize, endian: Endian) -> Result<usize, StoreError> {
        let bytes = codec::encode_int(value, width, endian)?;
        self.write_at(pos, &bytes)
    }

    fn write_string(&self, pos: u64, text: &str) -> Result<usize, StoreError> {
        self.write_at(pos, text.as_bytes())
    }

    fn write_buffer(&self, pos: u64, data: &[u8]) -> Result<usize, StoreError> {
        self.write_at(pos, data)
    }
}

pub(crate) fn to_index(pos: u64) -> Result<usize, StoreError> {
    usize::try_from(pos).map_err(|_| StoreError::OutOfBounds(pos))
}
