// Fri Jan 16 2026 - Alex

use crate::codec::DecodeError;
use serde::{Deserialize, Serialize};

/// What to do with bytes that are not valid UTF-8 when decoding text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextDecoding {
    #[default]
    Strict,
    /// Substitute U+FFFD for each invalid sequence.
    Lossy,
}

impl TextDecoding {
    pub fn decode(&self, bytes: Vec<u8>) -> Result<String, DecodeError> {
        match self {
            TextDecoding::Strict => String::from_utf8(bytes).map_err(|e| DecodeError {
                valid_up_to: e.utf8_error().valid_up_to(),
                len: e.as_bytes().len(),
            }),
            TextDecoding::Lossy => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        }
    }
}

pub fn encoded_len(text: &str) -> usize {
    text.len()
}
