/// JS/editor boundary uses UTF-16 code units (CodeMirror positions).
/// Offsets past the end clamp to the text length.
pub fn utf16_offset_to_byte(text: &str, utf16: usize) -> usize {
    let mut u16_count = 0usize;
    for (byte_idx, ch) in text.char_indices() {
        if u16_count >= utf16 {
            return byte_idx;
        }
        u16_count += ch.len_utf16();
    }
    text.len()
}

/// Inverse of [`utf16_offset_to_byte`]; byte offsets inside a char round down to its start.
pub fn byte_offset_to_utf16(text: &str, byte: usize) -> usize {
    let mut u16_count = 0usize;
    for (byte_idx, ch) in text.char_indices() {
        if byte_idx + ch.len_utf8() > byte {
            break;
        }
        u16_count += ch.len_utf16();
    }
    u16_count
}
