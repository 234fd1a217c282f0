// Fri Jan 16 2026 - Alex

use crate::store::{ByteStore, MemoryStore, StoreError};
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Memory-backed store that fails (or comes up short on) a chosen call.
/// Call indices are zero-based and counted separately for reads and writes.
#[derive(Default)]
pub struct FaultyStore {
    pub inner: MemoryStore,
    fail_write: Option<usize>,
    short_write: Option<(usize, usize)>,
    fail_read: Option<usize>,
    writes: AtomicUsize,
    reads: AtomicUsize,
}

impl FaultyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: Vec<u8>) -> Self {
        Self {
            inner: MemoryStore::with_data(data),
            ..Self::default()
        }
    }

    pub fn fail_write_on(mut self, call: usize) -> Self {
        self.fail_write = Some(call);
        self
    }

    pub fn short_write_on(mut self, call: usize, keep: usize) -> Self {
        self.short_write = Some((call, keep));
        self
    }

    pub fn fail_read_on(mut self, call: usize) -> Self {
        self.fail_read = Some(call);
        self
    }

    pub fn write_calls(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn read_calls(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl ByteStore for FaultyStore {
    fn read_at(&self, pos: u64, len: usize) -> Result<Vec<u8>, StoreError> {
        let call = self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_read == Some(call) {
            return Err(StoreError::Io(io::Error::new(io::ErrorKind::Other, "injected read failure")));
        }
        self.inner.read_at(pos, len)
    }

    fn write_at(&self, pos: u64, data: &[u8]) -> Result<usize, StoreError> {
        let call = self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_write == Some(call) {
            return Err(StoreError::Io(io::Error::new(io::ErrorKind::Other, "injected write failure")));
        }
        match self.short_write {
            Some((c, keep)) if c == call => self.inner.write_at(pos, &data[..keep.min(data.len())]),
            _ => self.inner.write_at(pos, data),
        }
    }

    fn size(&self) -> Result<u64, StoreError> {
        self.inner.size()
    }
}
