// Fri Jan 16 2026 - Alex

use crate::store::{ByteStore, StoreError};
use std::fs::{File, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// A file accessed only through positional reads and writes.
#[derive(Debug)]
pub struct FileStore {
    file: File,
    path: PathBuf,
}

impl FileStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path.as_ref())?;
        Ok(Self::from_file(file, path))
    }

    /// Opens for read/write, creating the file if missing. Existing contents are kept.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path.as_ref())?;
        Ok(Self::from_file(file, path))
    }

    pub fn open_read_only<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let file = File::open(path.as_ref())?;
        Ok(Self::from_file(file, path))
    }

    pub fn from_file<P: AsRef<Path>>(file: File, path: P) -> Self {
        Self {
            file,
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file(&self) -> &File {
        &self.file
    }
}

impl ByteStore for FileStore {
    fn read_at(&self, pos: u64, len: usize) -> Result<Vec<u8>, StoreError> {
        let mut buf = vec![0u8; len];
        let mut filled = 0;
        while filled < len {
            match positional_read(&self.file, &mut buf[filled..], pos + filled as u64) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(StoreError::Io(e)),
            }
        }
        buf.truncate(filled);
        log::trace!("{}: read {} bytes at {}", self.path.display(), filled, pos);
        Ok(buf)
    }

    fn write_at(&self, pos: u64, data: &[u8]) -> Result<usize, StoreError> {
        let mut written = 0;
        while written < data.len() {
            match positional_write(&self.file, &data[written..], pos + written as u64) {
                Ok(0) => break,
                Ok(n) => written += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(StoreError::Io(e)),
            }
        }
        log::trace!("{}: wrote {} bytes at {}", self.path.display(), written, pos);
        Ok(written)
    }

    fn size(&self) -> Result<u64, StoreError> {
        Ok(self.file.metadata()?.len())
    }
}

#[cfg(unix)]
fn positional_read(file: &File, buf: &mut [u8], pos: u64) -> io::Result<usize> {
    use std::os::unix::fs::FileExt;
    file.read_at(buf, pos)
}

#[cfg(unix)]
fn positional_write(file: &File, buf: &[u8], pos: u64) -> io::Result<usize> {
    use std::os::unix::fs::FileExt;
    file.write_at(buf, pos)
}

#[cfg(windows)]
fn positional_read(file: &File, buf: &mut [u8], pos: u64) -> io::Result<usize> {
    use std::os::windows::fs::FileExt;
    file.seek_read(buf, pos)
}

#[cfg(windows)]
fn positional_write(file: &File, buf: &[u8], pos: u64) -> io::Result<usize> {
    use std::os::windows::fs::FileExt;
    file.seek_write(buf, pos)
}
