// Fri Jan 16 2026 - Alex

use crate::codec::Endian;
use crate::config::StructConfig;
use crate::store::{ByteStore, StoreError};
use crate::structs::{FieldEvent, StructError, WriteFailure, WriteField};
use bytes::Bytes;

/// Builds a sequence of fields and writes them back to back starting at
/// `offset`. Declaring a field does no I/O; `execute` replays the queue in order.
pub struct WriteStruct<'a, S: ByteStore + ?Sized> {
    store: &'a S,
    fields: Vec<WriteField>,
    cursor: u64,
    config: StructConfig,
}

impl<'a, S: ByteStore + ?Sized> WriteStruct<'a, S> {
    pub fn new(store: &'a S, offset: u64) -> Self {
        Self::with_config(store, offset, StructConfig::default())
    }

    pub fn with_config(store: &'a S, offset: u64, config: StructConfig) -> Self {
        Self {
            store,
            fields: Vec::new(),
            cursor: offset,
            config,
        }
    }

    pub fn offset(&self) -> u64 {
        self.cursor
    }

    pub fn fields(&self) -> &[WriteField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total bytes the queued fields will occupy.
    pub fn planned_len(&self) -> u64 {
        self.fields.iter().map(|f| f.width() as u64).sum()
    }

    pub fn field(mut self, field: WriteField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn buffer(self, data: impl Into<Bytes>) -> Self {
        self.field(WriteField::Buffer(data.into()))
    }

    pub fn string(self, text: impl Into<String>) -> Self {
        self.field(WriteField::String(text.into()))
    }

    pub fn uint_be(self, value: impl Into<i128>, width: usize) -> Self {
        self.uint(value, width, Endian::Big)
    }

    pub fn uint_le(self, value: impl Into<i128>, width: usize) -> Self {
        self.uint(value, width, Endian::Little)
    }

    pub fn int_be(self, value: impl Into<i128>, width: usize) -> Self {
        self.int(value, width, Endian::Big)
    }

    pub fn int_le(self, value: impl Into<i128>, width: usize) -> Self {
        self.int(value, width, Endian::Little)
    }

    pub fn string_len_be(self, text: impl Into<String>, len_width: usize) -> Self {
        self.string_len(text, len_width, Endian::Big)
    }

    pub fn string_len_le(self, text: impl Into<String>, len_width: usize) -> Self {
        self.string_len(text, len_width, Endian::Little)
    }

    pub fn buffer_len_be(self, data: impl Into<Bytes>, len_width: usize) -> Self {
        self.buffer_len(data, len_width, Endian::Big)
    }

    pub fn buffer_len_le(self, data: impl Into<Bytes>, len_width: usize) -> Self {
        self.buffer_len(data, len_width, Endian::Little)
    }

    pub fn uint(self, value: impl Into<i128>, width: usize, endian: Endian) -> Self {
        self.field(WriteField::UInt { value: value.into(), width, endian })
    }

    pub fn int(self, value: impl Into<i128>, width: usize, endian: Endian) -> Self {
        self.field(WriteField::Int { value: value.into(), width, endian })
    }

    pub fn string_len(self, text: impl Into<String>, len_width: usize, endian: Endian) -> Self {
        self.field(WriteField::StringLen { text: text.into(), len_width, endian })
    }

    pub fn buffer_len(self, data: impl Into<Bytes>, len_width: usize, endian: Endian) -> Self {
        self.field(WriteField::BufferLen { data: data.into(), len_width, endian })
    }

    /// Writes every field in order and returns the final cursor.
    pub fn execute(self) -> Result<u64, WriteFailure> {
        self.execute_with(|_| {})
    }

    /// Like [`execute`](Self::execute), calling `observer` after each field lands.
    pub fn execute_with<F>(self, mut observer: F) -> Result<u64, WriteFailure>
    where
        F: FnMut(&FieldEvent<'_>),
    {
        let Self { store, fields, mut cursor, config } = self;
        let start = cursor;
        let total = fields.len();

        for (index, field) in fields.into_iter().enumerate() {
            let kind = field.kind();
            let fail = |error: StructError, offset: u64| {
                log::warn!("write struct aborted at field {}/{} ({}): {}", index + 1, total, kind, error);
                WriteFailure { error, offset, field: index }
            };

            let payload = field.encode(config.max_int_width).map_err(|e| fail(e.into(), cursor))?;
            let written = store
                .write_at(cursor, &payload)
                .map_err(|e| fail(e.into(), cursor))?;

            let field_offset = cursor;
            cursor += written as u64;
            if written != payload.len() {
                let short = StoreError::ShortWrite {
                    pos: field_offset,
                    expected: payload.len(),
                    actual: written,
                };
                return Err(fail(short.into(), cursor));
            }

            log::debug!("wrote {} at {} ({} bytes)", kind, field_offset, written);
            observer(&FieldEvent {
                index,
                kind,
                name: None,
                offset: field_offset,
                width: written,
            });
        }

        log::debug!("write struct done: {} fields, {} bytes from {}", total, cursor - start, start);
        Ok(cursor)
    }
}
