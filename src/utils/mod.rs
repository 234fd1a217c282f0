// Fri Jan 16 2026 - Alex

pub mod binary;
pub mod logging;

pub use binary::hex_dump;
pub use logging::LoggingUtils;

use itertools::Itertools;

/// Human-readable size for CLI summaries; exact below 1 KiB.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];

    if bytes < 1024 {
        return format!("{} bytes", bytes);
    }
    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit + 1 < UNITS.len() {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", size, UNITS[unit])
}

pub fn hex_string_spaced(data: &[u8]) -> String {
    data.iter().map(|b| format!("{:02x}", b)).join(" ")
}

/// Parses `"0xdead beef"`-style hex. Returns `None` on odd length or bad digits.
pub fn parse_hex(s: &str) -> Option<Vec<u8>> {
    let s = s.replace(' ', "").replace("0x", "").replace("0X", "");

    if s.len() % 2 != 0 || !s.is_ascii() {
        return None;
    }

    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).ok())
        .collect()
}
