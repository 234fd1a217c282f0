// Fri Jan 16 2026 - Alex

use crate::store::traits::to_index;
use crate::store::{ByteStore, StoreError};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// Read-only store over a memory-mapped file.
pub struct MmapStore {
    mmap: Mmap,
}

impl MmapStore {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let file = File::open(path)?;
        // The mapping is only read; callers must not truncate the file while it is alive.
        let mmap = unsafe { Mmap::map(&file) }?;
        Ok(Self { mmap })
    }
}

impl ByteStore for MmapStore {
    fn read_at(&self, pos: u64, len: usize) -> Result<Vec<u8>, StoreError> {
        let start = to_index(pos)?;
        if start >= self.mmap.len() {
            return Ok(Vec::new());
        }
        let end = start.saturating_add(len).min(self.mmap.len());
        Ok(self.mmap[start..end].to_vec())
    }

    fn write_at(&self, _pos: u64, _data: &[u8]) -> Result<usize, StoreError> {
        Err(StoreError::ReadOnly)
    }

    fn size(&self) -> Result<u64, StoreError> {
        Ok(self.mmap.len() as u64)
    }
}
