// Fri Jan 16 2026 - Alex

/// Classic 16-bytes-per-row hex dump. `base` is the offset printed for the
/// first byte of `data`.
pub fn hex_dump(data: &[u8], base: u64) -> String {
    let mut result = String::new();

    for (i, chunk) in data.chunks(16).enumerate() {
        let addr = base + (i * 16) as u64;
        result.push_str(&format!("{:08x}  ", addr));

        for (j, &byte) in chunk.iter().enumerate() {
            if j == 8 {
                result.push(' ');
            }
            result.push_str(&format!("{:02x} ", byte));
        }

        for _ in chunk.len()..16 {
            result.push_str("   ");
        }
        if chunk.len() <= 8 {
            result.push(' ');
        }

        result.push_str(" |");
        for &byte in chunk {
            let c = if (0x20..0x7f).contains(&byte) { byte as char } else { '.' };
            result.push(c);
        }
        result.push_str("|\n");
    }

    result
}
