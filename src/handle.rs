// Fri Jan 16 2026 - Alex

use crate::config::StructConfig;
use crate::store::{ByteStore, FileStore, MemoryStore, MmapStore, StoreError};
use crate::structs::{ReadStruct, WriteStruct};
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

/// A shared byte store plus the settings structs built on it inherit.
///
/// Derefs to the store, so the positional scalar helpers of [`ByteStore`]
/// are available directly on the handle.
#[derive(Clone)]
pub struct StructFile {
    store: Arc<dyn ByteStore>,
    config: StructConfig,
}

impl StructFile {
    pub fn new(store: Arc<dyn ByteStore>) -> Self {
        Self {
            store,
            config: StructConfig::default(),
        }
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        Ok(Self::new(Arc::new(FileStore::open(path)?)))
    }

    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        Ok(Self::new(Arc::new(FileStore::create(path)?)))
    }

    pub fn map_read_only<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        Ok(Self::new(Arc::new(MmapStore::from_file(path)?)))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn with_config(mut self, config: StructConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &StructConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn ByteStore> {
        &self.store
    }

    /// Starts a write struct at `offset`, or at the configured default (0) when `None`.
    pub fn create_write_struct(&self, offset: Option<u64>) -> WriteStruct<'_, dyn ByteStore> {
        let start = offset.unwrap_or(self.config.default_offset);
        WriteStruct::with_config(self.store.as_ref(), start, self.config.clone())
    }

    /// Starts a read struct at `offset`, or at the configured default (0) when `None`.
    pub fn create_read_struct(&self, offset: Option<u64>) -> ReadStruct<'_, dyn ByteStore> {
        let start = offset.unwrap_or(self.config.default_offset);
        ReadStruct::with_config(self.store.as_ref(), start, self.config.clone())
    }
}

impl Deref for StructFile {
    type Target = dyn ByteStore;

    fn deref(&self) -> &Self::Target {
        self.store.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Endian;
    use crate::structs::Value;

    #[test]
    fn test_default_offset_is_zero() {
        let file = StructFile::in_memory();
        let end = file.create_write_struct(None).uint_be(5, 1).execute().unwrap();
        assert_eq!(end, 1);
        assert_eq!(file.read_uint(0, 1, Endian::Big).unwrap(), 5);
    }

    #[test]
    fn test_configured_default_offset() {
        let file = StructFile::in_memory().with_config(StructConfig::new().with_default_offset(16));
        let end = file.create_write_struct(None).string("abc").execute().unwrap();
        assert_eq!(end, 19);

        let output = file.create_read_struct(None).string("s", 3).execute().unwrap();
        assert_eq!(output.get("s"), Some(&Value::from("abc")));

        let explicit = file.create_read_struct(Some(17)).string("s", 2).execute().unwrap();
        assert_eq!(explicit.get("s"), Some(&Value::from("bc")));
    }

    #[test]
    fn test_clones_share_the_store() {
        let file = StructFile::in_memory();
        let other = file.clone();
        file.write_string(0, "shared").unwrap();
        assert_eq!(other.read_string(0, 6).unwrap(), "shared");
        assert_eq!(other.size().unwrap(), 6);
    }

    #[test]
    fn test_max_width_from_config() {
        let file = StructFile::in_memory().with_config(StructConfig::new().with_max_int_width(6));
        let failure = file.create_write_struct(None).uint_le(1, 8).execute().unwrap_err();
        assert!(failure.error.is_range());
    }
}
