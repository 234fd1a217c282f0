// Fri Jan 16 2026 - Alex

use crate::codec::Endian;
use crate::config::StructConfig;
use crate::store::ByteStore;
use crate::structs::{FieldKind, ReadField, ReadStruct, WriteField, WriteStruct};
use crate::utils::parse_hex;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Field {index} ({kind}): missing `{param}`")]
    Missing { index: usize, kind: FieldKind, param: &'static str },
    #[error("Field {index} ({kind}): {reason}")]
    InvalidValue { index: usize, kind: FieldKind, reason: String },
}

/// One field as written in a layout file.
///
/// `width` is the integer width for int kinds and the prefix width for
/// length-prefixed kinds. `len` is the fixed byte length of a read
/// `buffer`/`string`. `value` is only consulted when writing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub len: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    pub fields: Vec<FieldSpec>,
}

impl Layout {
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LayoutError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn read_fields(&self) -> Result<Vec<ReadField>, LayoutError> {
        self.fields
            .iter()
            .enumerate()
            .map(|(index, spec)| spec.to_read_field(index))
            .collect()
    }

    pub fn write_fields(&self) -> Result<Vec<WriteField>, LayoutError> {
        self.fields
            .iter()
            .enumerate()
            .map(|(index, spec)| spec.to_write_field(index))
            .collect()
    }

    /// Builds a read struct; `offset` overrides the layout's own offset, which
    /// overrides the config default.
    pub fn read_struct<'a, S: ByteStore + ?Sized>(
        &self,
        store: &'a S,
        offset: Option<u64>,
        config: &StructConfig,
    ) -> Result<ReadStruct<'a, S>, LayoutError> {
        let start = offset.or(self.offset).unwrap_or(config.default_offset);
        let fields = self.read_fields()?;
        Ok(fields
            .into_iter()
            .fold(ReadStruct::with_config(store, start, config.clone()), ReadStruct::field))
    }

    pub fn write_struct<'a, S: ByteStore + ?Sized>(
        &self,
        store: &'a S,
        offset: Option<u64>,
        config: &StructConfig,
    ) -> Result<WriteStruct<'a, S>, LayoutError> {
        let start = offset.or(self.offset).unwrap_or(config.default_offset);
        let fields = self.write_fields()?;
        Ok(fields
            .into_iter()
            .fold(WriteStruct::with_config(store, start, config.clone()), WriteStruct::field))
    }
}

impl FieldSpec {
    fn missing(&self, index: usize, param: &'static str) -> LayoutError {
        LayoutError::Missing { index, kind: self.kind, param }
    }

    fn invalid(&self, index: usize, reason: impl Into<String>) -> LayoutError {
        LayoutError::InvalidValue { index, kind: self.kind, reason: reason.into() }
    }

    fn endian(&self) -> Endian {
        self.kind.endian().unwrap_or(Endian::Big)
    }

    pub fn to_read_field(&self, index: usize) -> Result<ReadField, LayoutError> {
        let name = self.name.clone().ok_or_else(|| self.missing(index, "name"))?;
        let endian = self.endian();
        let field = match self.kind {
            FieldKind::Buffer => ReadField::Buffer {
                name,
                len: self.len.ok_or_else(|| self.missing(index, "len"))?,
            },
            FieldKind::String => ReadField::String {
                name,
                len: self.len.ok_or_else(|| self.missing(index, "len"))?,
            },
            FieldKind::UIntBE | FieldKind::UIntLE => ReadField::UInt {
                name,
                width: self.width.ok_or_else(|| self.missing(index, "width"))?,
                endian,
            },
            FieldKind::IntBE | FieldKind::IntLE => ReadField::Int {
                name,
                width: self.width.ok_or_else(|| self.missing(index, "width"))?,
                endian,
            },
            FieldKind::StringLenBE | FieldKind::StringLenLE => ReadField::StringLen {
                name,
                len_width: self.width.ok_or_else(|| self.missing(index, "width"))?,
                endian,
            },
            FieldKind::BufferLenBE | FieldKind::BufferLenLE => ReadField::BufferLen {
                name,
                len_width: self.width.ok_or_else(|| self.missing(index, "width"))?,
                endian,
            },
        };
        Ok(field)
    }

    pub fn to_write_field(&self, index: usize) -> Result<WriteField, LayoutError> {
        let value = self.value.as_ref().ok_or_else(|| self.missing(index, "value"))?;
        let endian = self.endian();
        let field = match self.kind {
            FieldKind::Buffer => WriteField::Buffer(self.bytes_value(index, value)?),
            FieldKind::String => WriteField::String(self.text_value(index, value)?),
            FieldKind::UIntBE | FieldKind::UIntLE => WriteField::UInt {
                value: self.int_value(index, value)?,
                width: self.width.ok_or_else(|| self.missing(index, "width"))?,
                endian,
            },
            FieldKind::IntBE | FieldKind::IntLE => WriteField::Int {
                value: self.int_value(index, value)?,
                width: self.width.ok_or_else(|| self.missing(index, "width"))?,
                endian,
            },
            FieldKind::StringLenBE | FieldKind::StringLenLE => WriteField::StringLen {
                text: self.text_value(index, value)?,
                len_width: self.width.ok_or_else(|| self.missing(index, "width"))?,
                endian,
            },
            FieldKind::BufferLenBE | FieldKind::BufferLenLE => WriteField::BufferLen {
                data: self.bytes_value(index, value)?,
                len_width: self.width.ok_or_else(|| self.missing(index, "width"))?,
                endian,
            },
        };
        Ok(field)
    }

    fn text_value(&self, index: usize, value: &serde_json::Value) -> Result<String, LayoutError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.invalid(index, "expected a string value"))
    }

    fn int_value(&self, index: usize, value: &serde_json::Value) -> Result<i128, LayoutError> {
        if let Some(v) = value.as_i64() {
            return Ok(v as i128);
        }
        if let Some(v) = value.as_u64() {
            return Ok(v as i128);
        }
        Err(self.invalid(index, "expected an integer value"))
    }

    /// Accepts an array of byte values or a hex string such as `"0xdeadbeef"`.
    fn bytes_value(&self, index: usize, value: &serde_json::Value) -> Result<Bytes, LayoutError> {
        match value {
            serde_json::Value::String(hex) => parse_hex(hex)
                .map(Bytes::from)
                .ok_or_else(|| self.invalid(index, format!("invalid hex string {:?}", hex))),
            serde_json::Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_u64()
                        .and_then(|b| u8::try_from(b).ok())
                        .ok_or_else(|| self.invalid(index, format!("{} is not a byte", item)))
                })
                .collect::<Result<Vec<u8>, _>>()
                .map(Bytes::from),
            _ => Err(self.invalid(index, "expected a byte array or hex string")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::structs::Value;

    const WRITE_LAYOUT: &str = r#"{
        "fields": [
            {"kind": "uint_le", "width": 1, "value": 123},
            {"kind": "uint_be", "width": 2, "value": 321},
            {"kind": "string", "value": "Hello"},
            {"kind": "string_len_be", "width": 2, "value": "Hello World!"},
            {"kind": "buffer_len_le", "width": 1, "value": "0xdead"},
            {"kind": "int_be", "width": 2, "value": -2}
        ]
    }"#;

    const READ_LAYOUT: &str = r#"{
        "fields": [
            {"kind": "uint_le", "name": "code", "width": 1},
            {"kind": "uint_be", "name": "op", "width": 2},
            {"kind": "string", "name": "title", "len": 5},
            {"kind": "string_len_be", "name": "content", "width": 2},
            {"kind": "buffer_len_le", "name": "blob", "width": 1},
            {"kind": "int_be", "name": "delta", "width": 2}
        ]
    }"#;

    #[test]
    fn test_layout_round_trip() {
        let store = MemoryStore::new();
        let config = StructConfig::default();

        let end = Layout::from_json(WRITE_LAYOUT)
            .unwrap()
            .write_struct(&store, None, &config)
            .unwrap()
            .execute()
            .unwrap();
        assert_eq!(end, 22 + 3 + 2);

        let output = Layout::from_json(READ_LAYOUT)
            .unwrap()
            .read_struct(&store, None, &config)
            .unwrap()
            .execute()
            .unwrap();
        assert_eq!(output.get("code"), Some(&Value::UInt(123)));
        assert_eq!(output.get("content"), Some(&Value::from("Hello World!")));
        assert_eq!(output.get("blob"), Some(&Value::from(vec![0xDEu8, 0xAD])));
        assert_eq!(output.get("delta"), Some(&Value::Int(-2)));
        assert_eq!(output.offset, end);
    }

    #[test]
    fn test_offset_precedence() {
        let store = MemoryStore::new();
        let layout = Layout::from_json(r#"{"offset": 4, "fields": []}"#).unwrap();
        let config = StructConfig::new().with_default_offset(9);
        assert_eq!(layout.write_struct(&store, None, &config).unwrap().offset(), 4);
        assert_eq!(layout.write_struct(&store, Some(1), &config).unwrap().offset(), 1);
        let bare = Layout::default();
        assert_eq!(bare.read_struct(&store, None, &config).unwrap().offset(), 9);
    }

    #[test]
    fn test_missing_parameters() {
        let layout = Layout::from_json(r#"{"fields": [{"kind": "string", "name": "s"}]}"#).unwrap();
        assert!(matches!(
            layout.read_fields(),
            Err(LayoutError::Missing { index: 0, param: "len", .. })
        ));
        assert!(matches!(
            layout.write_fields(),
            Err(LayoutError::Missing { index: 0, param: "value", .. })
        ));
    }

    #[test]
    fn test_bad_values() {
        let layout = Layout::from_json(
            r#"{"fields": [{"kind": "buffer", "value": [1, 300]}, {"kind": "uint_be", "width": 1, "value": "x"}]}"#,
        )
        .unwrap();
        assert!(matches!(layout.fields[0].to_write_field(0), Err(LayoutError::InvalidValue { .. })));
        assert!(matches!(layout.fields[1].to_write_field(1), Err(LayoutError::InvalidValue { .. })));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(matches!(
            Layout::from_json(r#"{"fields": [{"kind": "float"}]}"#),
            Err(LayoutError::Parse(_))
        ));
    }
}
