// Fri Jan 16 2026 - Alex

//! Positional, typed binary access to a byte store, plus chainable struct
//! builders that lay fields out back to back from a starting offset.
//!
//! ```no_run
//! use struct_file::StructFile;
//!
//! let file = StructFile::create("record.bin")?;
//! let end = file
//!     .create_write_struct(None)
//!     .uint_le(123, 1)
//!     .uint_be(321, 2)
//!     .string("Hello")
//!     .string_len_be("Hello World!", 2)
//!     .execute()?;
//! assert_eq!(end, 22);
//!
//! let record = file
//!     .create_read_struct(None)
//!     .uint_le("code", 1)
//!     .uint_be("op", 2)
//!     .string("title", 5)
//!     .string_len_be("content", 2)
//!     .execute()?;
//! assert_eq!(record.offset, 22);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod codec;
pub mod config;
pub mod handle;
pub mod layout;
pub mod store;
pub mod structs;
pub mod utils;

pub use codec::{Endian, TextDecoding};
pub use config::StructConfig;
pub use handle::StructFile;
pub use layout::Layout;
pub use store::{ByteStore, FileStore, MemoryStore, MmapStore, StoreError};
pub use structs::{ReadFailure, ReadOutput, ReadStruct, StructError, Value, WriteFailure, WriteStruct};
