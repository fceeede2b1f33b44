//! RFC3986 percent-encoding.

const UPPER_HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-encode a string per RFC3986.
///
/// Every byte outside the unreserved set `[A-Za-z0-9\-_.~]` is emitted as
/// `%XX` with uppercase hex digits. Multi-byte UTF-8 sequences are encoded
/// byte by byte. Total over any input; unreserved input passes through
/// unchanged, so the function is idempotent on its own output's unreserved
/// portion.
pub fn percent_encode(s: &str) -> String {
    let bytes = s.as_bytes();
    let reserved = bytes.iter().filter(|&&b| should_escape(b)).count();
    if reserved == 0 {
        return s.to_string();
    }

    let mut out = String::with_capacity(bytes.len() + 2 * reserved);
    for &b in bytes {
        if should_escape(b) {
            out.push('%');
            out.push(UPPER_HEX[(b >> 4) as usize] as char);
            out.push(UPPER_HEX[(b & 0x0f) as usize] as char);
        } else {
            out.push(b as char);
        }
    }
    out
}

/// True for every byte outside the RFC3986 unreserved set.
fn should_escape(b: u8) -> bool {
    !matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~')
}
