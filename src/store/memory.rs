// Fri Jan 16 2026 - Alex

use crate::store::traits::to_index;
use crate::store::{ByteStore, StoreError};
use parking_lot::RwLock;

/// Growable in-memory store. Writes past the end zero-fill the gap.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: Vec<u8>) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }

    pub fn snapshot(&self) -> Vec<u8> {
        self.data.read().clone()
    }

    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

}

impl ByteStore for MemoryStore {
    fn read_at(&self, pos: u64, len: usize) -> Result<Vec<u8>, StoreError> {
        let start = to_index(pos)?;
        let data = self.data.read();
        if start >= data.len() {
            return Ok(Vec::new());
        }
        let end = start.saturating_add(len).min(data.len());
        log::trace!("memory read {} bytes at {}", end - start, pos);
        Ok(data[start..end].to_vec())
    }

    fn write_at(&self, pos: u64, data: &[u8]) -> Result<usize, StoreError> {
        let start = to_index(pos)?;
        let end = start
            .checked_add(data.len())
            .ok_or(StoreError::OutOfBounds(pos))?;
        let mut storage = self.data.write();
        if end > storage.len() {
            let grow = end - storage.len();
            storage
                .try_reserve(grow)
                .map_err(|_| StoreError::OutOfBounds(pos))?;
            storage.resize(end, 0);
        }
        storage[start..end].copy_from_slice(data);
        log::trace!("memory wrote {} bytes at {}", data.len(), pos);
        Ok(data.len())
    }

    fn size(&self) -> Result<u64, StoreError> {
        Ok(self.len() as u64)
    }
}
