// Fri Jan 16 2026 - Alex

use crate::codec::{self, Endian};
use crate::config::StructConfig;
use crate::store::{ByteStore, StoreError};
use crate::structs::{FieldEvent, ReadFailure, ReadField, StructError, Value};
use indexmap::IndexMap;
use serde::Serialize;

/// Decoded values keyed by field name, in declaration order, plus the cursor
/// after the last decoded field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReadOutput {
    pub values: IndexMap<String, Value>,
    pub offset: u64,
}

impl ReadOutput {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Mirror of [`WriteStruct`](crate::structs::WriteStruct): declares named
/// fields, then decodes them back to back starting at `offset`.
pub struct ReadStruct<'a, S: ByteStore + ?Sized> {
    store: &'a S,
    fields: Vec<ReadField>,
    cursor: u64,
    config: StructConfig,
}

impl<'a, S: ByteStore + ?Sized> ReadStruct<'a, S> {
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

    pub fn fields(&self) -> &[ReadField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(mut self, field: ReadField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn buffer(self, name: impl Into<String>, len: usize) -> Self {
        self.field(ReadField::Buffer { name: name.into(), len })
    }

    pub fn string(self, name: impl Into<String>, len: usize) -> Self {
        self.field(ReadField::String { name: name.into(), len })
    }

    pub fn uint_be(self, name: impl Into<String>, width: usize) -> Self {
        self.uint(name, width, Endian::Big)
    }

    pub fn uint_le(self, name: impl Into<String>, width: usize) -> Self {
        self.uint(name, width, Endian::Little)
    }

    pub fn int_be(self, name: impl Into<String>, width: usize) -> Self {
        self.int(name, width, Endian::Big)
    }

    pub fn int_le(self, name: impl Into<String>, width: usize) -> Self {
        self.int(name, width, Endian::Little)
    }

    pub fn string_len_be(self, name: impl Into<String>, len_width: usize) -> Self {
        self.string_len(name, len_width, Endian::Big)
    }

    pub fn string_len_le(self, name: impl Into<String>, len_width: usize) -> Self {
        self.string_len(name, len_width, Endian::Little)
    }

    pub fn buffer_len_be(self, name: impl Into<String>, len_width: usize) -> Self {
        self.buffer_len(name, len_width, Endian::Big)
    }

    pub fn buffer_len_le(self, name: impl Into<String>, len_width: usize) -> Self {
        self.buffer_len(name, len_width, Endian::Little)
    }

    pub fn uint(self, name: impl Into<String>, width: usize, endian: Endian) -> Self {
        self.field(ReadField::UInt { name: name.into(), width, endian })
    }

    pub fn int(self, name: impl Into<String>, width: usize, endian: Endian) -> Self {
        self.field(ReadField::Int { name: name.into(), width, endian })
    }

    pub fn string_len(self, name: impl Into<String>, len_width: usize, endian: Endian) -> Self {
        self.field(ReadField::StringLen { name: name.into(), len_width, endian })
    }

    pub fn buffer_len(self, name: impl Into<String>, len_width: usize, endian: Endian) -> Self {
        self.field(ReadField::BufferLen { name: name.into(), len_width, endian })
    }

    pub fn execute(self) -> Result<ReadOutput, ReadFailure> {
        self.execute_with(|_| {})
    }

    pub fn execute_with<F>(self, mut observer: F) -> Result<ReadOutput, ReadFailure>
    where
        F: FnMut(&FieldEvent<'_>),
    {
        let Self { store, fields, mut cursor, config } = self;
        let total = fields.len();
        let mut output = ReadOutput {
            values: IndexMap::with_capacity(total),
            offset: cursor,
        };

        for (index, field) in fields.into_iter().enumerate() {
            let (value, consumed) = match read_field(store, &field, cursor, &config) {
                Ok(decoded) => decoded,
                Err(error) => {
                    log::warn!(
                        "read struct aborted at field {}/{} ({} `{}`): {}",
                        index + 1,
                        total,
                        field.kind(),
                        field.name(),
                        error
                    );
                    return Err(ReadFailure { error, partial: output, field: index });
                }
            };

            let field_offset = cursor;
            cursor += consumed as u64;
            log::debug!("read {} `{}` at {} ({} bytes)", field.kind(), field.name(), field_offset, consumed);
            observer(&FieldEvent {
                index,
                kind: field.kind(),
                name: Some(field.name()),
                offset: field_offset,
                width: consumed,
            });

            // duplicate names keep the latest value
            output.values.insert(field.name().to_string(), value);
            output.offset = cursor;
        }

        Ok(output)
    }
}

fn read_field<S: ByteStore + ?Sized>(
    store: &S,
    field: &ReadField,
    pos: u64,
    config: &StructConfig,
) -> Result<(Value, usize), StructError> {
    match field {
        ReadField::Buffer { len, .. } => {
            let bytes = store.read_exact_at(pos, *len)?;
            Ok((Value::from(bytes), *len))
        }
        ReadField::String { len, .. } => {
            let bytes = store.read_exact_at(pos, *len)?;
            Ok((Value::Str(config.text_decoding.decode(bytes)?), *len))
        }
        ReadField::UInt { width, endian, .. } => {
            let bytes = read_scalar(store, pos, *width, config)?;
            Ok((Value::UInt(codec::decode_uint(&bytes, *endian)?), *width))
        }
        ReadField::Int { width, endian, .. } => {
            let bytes = read_scalar(store, pos, *width, config)?;
            Ok((Value::Int(codec::decode_int(&bytes, *endian)?), *width))
        }
        ReadField::StringLen { len_width, endian, .. } => {
            let (payload, consumed) = read_prefixed(store, pos, *len_width, *endian, config)?;
            Ok((Value::Str(config.text_decoding.decode(payload)?), consumed))
        }
        ReadField::BufferLen { len_width, endian, .. } => {
            let (payload, consumed) = read_prefixed(store, pos, *len_width, *endian, config)?;
            Ok((Value::from(payload), consumed))
        }
    }
}

fn read_scalar<S: ByteStore + ?Sized>(
    store: &S,
    pos: u64,
    width: usize,
    config: &StructConfig,
) -> Result<Vec<u8>, StructError> {
    codec::int::check_width(width, config.max_int_width)?;
    Ok(store.read_exact_at(pos, width)?)
}

/// Reads the length prefix at `pos`, then exactly that many bytes right after it.
fn read_prefixed<S: ByteStore + ?Sized>(
    store: &S,
    pos: u64,
    len_width: usize,
    endian: Endian,
    config: &StructConfig,
) -> Result<(Vec<u8>, usize), StructError> {
    let prefix = read_scalar(store, pos, len_width, config)?;
    let declared = codec::decode_uint(&prefix, endian)?;
    let payload_pos = pos + len_width as u64;

    // A corrupt prefix must not turn into a huge allocation.
    let available = store.size()?.saturating_sub(payload_pos);
    if declared > available {
        return Err(StoreError::ShortRead {
            pos: payload_pos,
            expected: usize::try_from(declared).unwrap_or(usize::MAX),
            actual: available as usize,
        }
        .into());
    }

    let len = declared as usize;
    let payload = store.read_exact_at(payload_pos, len)?;
    Ok((payload, len_width + len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::TextDecoding;
    use crate::store::testing::FaultyStore;
    use crate::store::MemoryStore;
    use crate::structs::WriteStruct;

    fn sample_store() -> MemoryStore {
        let store = MemoryStore::new();
        WriteStruct::new(&store, 0)
            .uint_le(123, 1)
            .uint_be(321, 2)
            .string("Hello")
            .string_len_be("Hello World!", 2)
            .execute()
            .unwrap();
        store
    }

    #[test]
    fn test_end_to_end_read() {
        let store = sample_store();
        let output = ReadStruct::new(&store, 0)
            .uint_le("code", 1)
            .uint_be("op", 2)
            .string("title", 5)
            .string_len_be("content", 2)
            .execute()
            .unwrap();

        assert_eq!(output.offset, 22);
        assert_eq!(output.get("code"), Some(&Value::UInt(123)));
        assert_eq!(output.get("op"), Some(&Value::UInt(321)));
        assert_eq!(output.get("title"), Some(&Value::from("Hello")));
        assert_eq!(output.get("content"), Some(&Value::from("Hello World!")));
        let names: Vec<&str> = output.values.keys().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["code", "op", "title", "content"]);
    }

    #[test]
    fn test_length_prefixed_consumes_prefix_and_payload() {
        let store = sample_store();
        let output = ReadStruct::new(&store, 8).string_len_be("name", 2).execute().unwrap();
        assert_eq!(output.get("name").and_then(Value::as_str), Some("Hello World!"));
        assert_eq!(output.offset, 22);
    }

    #[test]
    fn test_buffer_len_returns_raw_payload() {
        let store = MemoryStore::new();
        WriteStruct::new(&store, 3)
            .buffer_len_le(vec![0xDE, 0xAD, 0xBE, 0xEF], 2)
            .buffer_len_be(Vec::<u8>::new(), 1)
            .buffer(vec![1u8, 2])
            .execute()
            .unwrap();

        let output = ReadStruct::new(&store, 3)
            .buffer_len_le("blob", 2)
            .buffer_len_be("empty", 1)
            .buffer("tail", 2)
            .execute()
            .unwrap();
        assert_eq!(output.get("blob").and_then(Value::as_bytes), Some(&[0xDE, 0xAD, 0xBE, 0xEF][..]));
        assert_eq!(output.get("empty").and_then(Value::as_bytes), Some(&[][..]));
        assert_eq!(output.get("tail").and_then(Value::as_bytes), Some(&[1, 2][..]));
        assert_eq!(output.offset, 3 + 6 + 1 + 2);
    }

    #[test]
    fn test_signed_round_trip() {
        let store = MemoryStore::new();
        WriteStruct::new(&store, 0)
            .int_be(-1234, 2)
            .int_le(i64::MIN, 8)
            .uint_le(u64::MAX, 8)
            .int_be(-1, 6)
            .execute()
            .unwrap();
        let output = ReadStruct::new(&store, 0)
            .int_be("a", 2)
            .int_le("b", 8)
            .uint_le("c", 8)
            .int_be("d", 6)
            .execute()
            .unwrap();
        assert_eq!(output.get("a"), Some(&Value::Int(-1234)));
        assert_eq!(output.get("b"), Some(&Value::Int(i64::MIN)));
        assert_eq!(output.get("c"), Some(&Value::UInt(u64::MAX)));
        assert_eq!(output.get("d"), Some(&Value::Int(-1)));
        assert_eq!(output.offset, 24);
    }

    #[test]
    fn test_duplicate_names_overwrite() {
        let store = MemoryStore::with_data(vec![1, 2]);
        let output = ReadStruct::new(&store, 0).uint_be("x", 1).uint_be("x", 1).execute().unwrap();
        assert_eq!(output.len(), 1);
        assert_eq!(output.get("x"), Some(&Value::UInt(2)));
        assert_eq!(output.offset, 2);
    }

    #[test]
    fn test_read_failure_keeps_partial_mapping() {
        let mut data = vec![7u8, 0, 9];
        data.extend_from_slice(b"abc");
        let store = FaultyStore::with_data(data).fail_read_on(2);
        let failure = ReadStruct::new(&store, 0)
            .uint_be("first", 1)
            .uint_le("second", 2)
            .string("third", 3)
            .execute()
            .unwrap_err();
        assert!(failure.error.is_io());
        assert_eq!(failure.field, 2);
        assert_eq!(failure.partial.offset, 3);
        assert_eq!(failure.partial.get("first"), Some(&Value::UInt(7)));
        assert_eq!(failure.partial.get("second"), Some(&Value::UInt(0x0900)));
        assert!(failure.partial.get("third").is_none());
    }

    #[test]
    fn test_short_read_past_end() {
        let store = MemoryStore::with_data(vec![1, 2, 3]);
        let failure = ReadStruct::new(&store, 0).buffer("a", 2).buffer("b", 2).execute().unwrap_err();
        assert!(matches!(
            failure.error,
            StructError::Io(StoreError::ShortRead { pos: 2, expected: 2, actual: 1 })
        ));
        assert_eq!(failure.partial.offset, 2);
    }

    #[test]
    fn test_corrupt_prefix_does_not_read_payload() {
        let store = FaultyStore::with_data(vec![0xFF, 0xFF, b'a']);
        let failure = ReadStruct::new(&store, 0).string_len_be("s", 2).execute().unwrap_err();
        assert!(matches!(failure.error, StructError::Io(StoreError::ShortRead { .. })));
        assert_eq!(store.read_calls(), 1);
        assert_eq!(failure.partial.offset, 0);
    }

    #[test]
    fn test_payload_read_failure_keeps_cursor_at_field_start() {
        let store = FaultyStore::with_data(vec![0, 2, b'o', b'k']).fail_read_on(1);
        let failure = ReadStruct::new(&store, 0).string_len_be("s", 2).execute().unwrap_err();
        assert!(failure.error.is_io());
        assert_eq!(failure.field, 0);
        assert_eq!(store.read_calls(), 2);
        assert_eq!(failure.partial.offset, 0);
        assert!(failure.partial.get("s").is_none());
    }

    #[test]
    fn test_invalid_utf8_strict_and_lossy() {
        let store = MemoryStore::with_data(vec![2, b'o', 0xFF]);

        let failure = ReadStruct::new(&store, 0).string_len_le("s", 1).execute().unwrap_err();
        assert!(failure.error.is_decode());
        assert_eq!(failure.partial.offset, 0);

        let config = StructConfig::new().with_text_decoding(TextDecoding::Lossy);
        let output = ReadStruct::with_config(&store, 0, config)
            .string_len_le("s", 1)
            .execute()
            .unwrap();
        assert_eq!(output.get("s").and_then(Value::as_str), Some("o\u{FFFD}"));
        assert_eq!(output.offset, 3);
    }

    #[test]
    fn test_zero_width_is_range_error_without_io() {
        let store = FaultyStore::with_data(vec![1, 2, 3]);
        let failure = ReadStruct::new(&store, 0).uint_be("z", 0).execute().unwrap_err();
        assert!(failure.error.is_range());
        assert_eq!(store.read_calls(), 0);
    }

    #[test]
    fn test_observer_reports_names() {
        let store = sample_store();
        let mut seen = Vec::new();
        ReadStruct::new(&store, 0)
            .uint_le("code", 1)
            .uint_be("op", 2)
            .execute_with(|e| seen.push((e.name.map(str::to_string), e.offset, e.width)))
            .unwrap();
        assert_eq!(
            seen,
            vec![(Some("code".to_string()), 0, 1), (Some("op".to_string()), 1, 2)]
        );
    }
}
