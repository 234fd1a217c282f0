// Fri Jan 16 2026 - Alex

pub mod error;
pub mod file;
pub mod memory;
pub mod mmap;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use mmap::MmapStore;
pub use traits::ByteStore;
