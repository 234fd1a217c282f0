// Fri Jan 16 2026 - Alex

pub mod error;
pub mod field;
pub mod read;
pub mod value;
pub mod write;

pub use error::{ReadFailure, StructError, WriteFailure};
pub use field::{FieldKind, ReadField, WriteField};
pub use read::{ReadOutput, ReadStruct};
pub use value::Value;
pub use write::WriteStruct;

/// Reported after each field of a struct completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldEvent<'a> {
    pub index: usize,
    pub kind: FieldKind,
    /// Result key; `None` for write structs.
    pub name: Option<&'a str>,
    pub offset: u64,
    pub width: usize,
}
