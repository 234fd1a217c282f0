// Fri Jan 16 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Invalid width: {width} bytes (supported 1..={max})")]
    InvalidWidth { width: usize, max: usize },
    #[error("Value {value} does not fit in {width} unsigned byte(s)")]
    UIntOutOfRange { value: i128, width: usize },
    #[error("Value {value} does not fit in {width} signed byte(s)")]
    IntOutOfRange { value: i128, width: usize },
    #[error("Payload length {len} does not fit in a {width}-byte length prefix")]
    LengthOverflow { len: usize, width: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid UTF-8 after {valid_up_to} of {len} bytes")]
pub struct DecodeError {
    pub valid_up_to: usize,
    pub len: usize,
}
