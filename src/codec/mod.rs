// Fri Jan 16 2026 - Alex

pub mod error;
pub mod int;
pub mod text;

pub use error::{DecodeError, RangeError};
pub use int::{decode_int, decode_uint, encode_int, encode_len, encode_uint, Endian, MAX_WIDTH};
pub use text::TextDecoding;
