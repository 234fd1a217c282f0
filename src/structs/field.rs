// Fri Jan 16 2026 - Alex

use crate::codec::{self, Endian, RangeError};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    #[serde(rename = "buffer")]
    Buffer,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "uint_be")]
    UIntBE,
    #[serde(rename = "uint_le")]
    UIntLE,
    #[serde(rename = "int_be")]
    IntBE,
    #[serde(rename = "int_le")]
    IntLE,
    #[serde(rename = "string_len_be")]
    StringLenBE,
    #[serde(rename = "string_len_le")]
    StringLenLE,
    #[serde(rename = "buffer_len_be")]
    BufferLenBE,
    #[serde(rename = "buffer_len_le")]
    BufferLenLE,
}

impl FieldKind {
    pub fn uint(endian: Endian) -> Self {
        match endian {
            Endian::Big => FieldKind::UIntBE,
            Endian::Little => FieldKind::UIntLE,
        }
    }

    pub fn int(endian: Endian) -> Self {
        match endian {
            Endian::Big => FieldKind::IntBE,
            Endian::Little => FieldKind::IntLE,
        }
    }

    pub fn string_len(endian: Endian) -> Self {
        match endian {
            Endian::Big => FieldKind::StringLenBE,
            Endian::Little => FieldKind::StringLenLE,
        }
    }

    pub fn buffer_len(endian: Endian) -> Self {
        match endian {
            Endian::Big => FieldKind::BufferLenBE,
            Endian::Little => FieldKind::BufferLenLE,
        }
    }

    pub fn endian(&self) -> Option<Endian> {
        match self {
            FieldKind::Buffer | FieldKind::String => None,
            FieldKind::UIntBE | FieldKind::IntBE | FieldKind::StringLenBE | FieldKind::BufferLenBE => {
                Some(Endian::Big)
            }
            FieldKind::UIntLE | FieldKind::IntLE | FieldKind::StringLenLE | FieldKind::BufferLenLE => {
                Some(Endian::Little)
            }
        }
    }

    pub fn is_length_prefixed(&self) -> bool {
        matches!(
            self,
            FieldKind::StringLenBE | FieldKind::StringLenLE | FieldKind::BufferLenBE | FieldKind::BufferLenLE
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Buffer => "buffer",
            FieldKind::String => "string",
            FieldKind::UIntBE => "uint_be",
            FieldKind::UIntLE => "uint_le",
            FieldKind::IntBE => "int_be",
            FieldKind::IntLE => "int_le",
            FieldKind::StringLenBE => "string_len_be",
            FieldKind::StringLenLE => "string_len_le",
            FieldKind::BufferLenBE => "buffer_len_be",
            FieldKind::BufferLenLE => "buffer_len_le",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One member of a write struct, carrying the payload it will emit.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteField {
    Buffer(Bytes),
    String(String),
    UInt { value: i128, width: usize, endian: Endian },
    Int { value: i128, width: usize, endian: Endian },
    StringLen { text: String, len_width: usize, endian: Endian },
    BufferLen { data: Bytes, len_width: usize, endian: Endian },
}

impl WriteField {
    pub fn kind(&self) -> FieldKind {
        match self {
            WriteField::Buffer(_) => FieldKind::Buffer,
            WriteField::String(_) => FieldKind::String,
            WriteField::UInt { endian, .. } => FieldKind::uint(*endian),
            WriteField::Int { endian, .. } => FieldKind::int(*endian),
            WriteField::StringLen { endian, .. } => FieldKind::string_len(*endian),
            WriteField::BufferLen { endian, .. } => FieldKind::buffer_len(*endian),
        }
    }

    /// Bytes this field occupies once written.
    pub fn width(&self) -> usize {
        match self {
            WriteField::Buffer(data) => data.len(),
            WriteField::String(text) => codec::text::encoded_len(text),
            WriteField::UInt { width, .. } | WriteField::Int { width, .. } => *width,
            WriteField::StringLen { text, len_width, .. } => len_width + codec::text::encoded_len(text),
            WriteField::BufferLen { data, len_width, .. } => len_width + data.len(),
        }
    }

    /// Produces the exact on-disk bytes, prefix included. No I/O.
    pub fn encode(&self, max_width: usize) -> Result<Vec<u8>, RangeError> {
        match self {
            WriteField::Buffer(data) => Ok(data.to_vec()),
            WriteField::String(text) => Ok(text.as_bytes().to_vec()),
            WriteField::UInt { value, width, endian } => {
                codec::int::check_width(*width, max_width)?;
                codec::encode_uint(*value, *width, *endian)
            }
            WriteField::Int { value, width, endian } => {
                codec::int::check_width(*width, max_width)?;
                codec::encode_int(*value, *width, *endian)
            }
            WriteField::StringLen { text, len_width, endian } => {
                prefixed(text.as_bytes(), *len_width, *endian, max_width)
            }
            WriteField::BufferLen { data, len_width, endian } => {
                prefixed(data, *len_width, *endian, max_width)
            }
        }
    }
}

fn prefixed(payload: &[u8], len_width: usize, endian: Endian, max_width: usize) -> Result<Vec<u8>, RangeError> {
    codec::int::check_width(len_width, max_width)?;
    let mut out = codec::encode_len(payload.len(), len_width, endian)?;
    out.extend_from_slice(payload);
    Ok(out)
}

/// One member of a read struct: the shape to decode and the key to store it under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadField {
    Buffer { name: String, len: usize },
    String { name: String, len: usize },
    UInt { name: String, width: usize, endian: Endian },
    Int { name: String, width: usize, endian: Endian },
    StringLen { name: String, len_width: usize, endian: Endian },
    BufferLen { name: String, len_width: usize, endian: Endian },
}

impl ReadField {
    pub fn kind(&self) -> FieldKind {
        match self {
            ReadField::Buffer { .. } => FieldKind::Buffer,
            ReadField::String { .. } => FieldKind::String,
            ReadField::UInt { endian, .. } => FieldKind::uint(*endian),
            ReadField::Int { endian, .. } => FieldKind::int(*endian),
            ReadField::StringLen { endian, .. } => FieldKind::string_len(*endian),
            ReadField::BufferLen { endian, .. } => FieldKind::buffer_len(*endian),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ReadField::Buffer { name, .. }
            | ReadField::String { name, .. }
            | ReadField::UInt { name, .. }
            | ReadField::Int { name, .. }
            | ReadField::StringLen { name, .. }
            | ReadField::BufferLen { name, .. } => name,
        }
    }
}
