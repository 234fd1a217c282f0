// Fri Jan 16 2026 - Alex

use crate::codec::RangeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Widest integer the codec handles. Decoded values are `u64` / `i64`.
pub const MAX_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endian {
    Big,
    Little,
}

impl Endian {
    pub fn suffix(&self) -> &'static str {
        match self {
            Endian::Big => "BE",
            Endian::Little => "LE",
        }
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

pub fn check_width(width: usize, max: usize) -> Result<(), RangeError> {
    let max = max.min(MAX_WIDTH);
    if width == 0 || width > max {
        return Err(RangeError::InvalidWidth { width, max });
    }
    Ok(())
}

pub fn uint_bounds(width: usize) -> (i128, i128) {
    (0, (1i128 << (8 * width)) - 1)
}

pub fn int_bounds(width: usize) -> (i128, i128) {
    let half = 1i128 << (8 * width - 1);
    (-half, half - 1)
}

pub fn encode_uint(value: i128, width: usize, endian: Endian) -> Result<Vec<u8>, RangeError> {
    check_width(width, MAX_WIDTH)?;
    let (min, max) = uint_bounds(width);
    if value < min || value > max {
        return Err(RangeError::UIntOutOfRange { value, width });
    }
    Ok(lay_out(value as u64, width, endian))
}

pub fn encode_int(value: i128, width: usize, endian: Endian) -> Result<Vec<u8>, RangeError> {
    check_width(width, MAX_WIDTH)?;
    let (min, max) = int_bounds(width);
    if value < min || value > max {
        return Err(RangeError::IntOutOfRange { value, width });
    }
    // low `width` bytes of the two's complement form
    Ok(lay_out(value as i64 as u64, width, endian))
}

/// Encodes a payload length as an unsigned prefix of `width` bytes.
pub fn encode_len(len: usize, width: usize, endian: Endian) -> Result<Vec<u8>, RangeError> {
    check_width(width, MAX_WIDTH)?;
    let (_, max) = uint_bounds(width);
    if len as i128 > max {
        return Err(RangeError::LengthOverflow { len, width });
    }
    Ok(lay_out(len as u64, width, endian))
}

pub fn decode_uint(bytes: &[u8], endian: Endian) -> Result<u64, RangeError> {
    check_width(bytes.len(), MAX_WIDTH)?;
    let fold = |acc: u64, b: &u8| (acc << 8) | *b as u64;
    let value = match endian {
        Endian::Big => bytes.iter().fold(0, fold),
        Endian::Little => bytes.iter().rev().fold(0, fold),
    };
    Ok(value)
}

pub fn decode_int(bytes: &[u8], endian: Endian) -> Result<i64, RangeError> {
    let raw = decode_uint(bytes, endian)?;
    let shift = 64 - 8 * bytes.len() as u32;
    Ok(((raw << shift) as i64) >> shift)
}

fn lay_out(bits: u64, width: usize, endian: Endian) -> Vec<u8> {
    let be = bits.to_be_bytes();
    let mut out = be[MAX_WIDTH - width..].to_vec();
    if endian == Endian::Little {
        out.reverse();
    }
    out
}
