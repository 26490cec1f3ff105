pub(crate) fn now_ms() -> i64 {
    js_sys::Date::now().round() as i64
}

/// Convert a DOM selection offset (UTF-16 code units) into a byte index of `s`.
///
/// Offsets that land inside a surrogate pair snap back to the start of that char.
pub(crate) fn utf16_to_byte_idx(s: &str, pos_utf16: u32) -> usize {
    if pos_utf16 == 0 {
        return 0;
    }
    let mut acc: u32 = 0;
    for (i, ch) in s.char_indices() {
        let w = ch.len_utf16() as u32;
        if acc + w > pos_utf16 {
            return i;
        }
        acc += w;
        if acc == pos_utf16 {
            return i + ch.len_utf8();
        }
    }
    s.len()
}

pub(crate) fn byte_idx_to_utf16(s: &str, byte_idx: usize) -> u32 {
    s[..byte_idx.min(s.len())].encode_utf16().count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf16_ascii_is_identity() {
        let s = "notes go";
        for i in 0..=s.len() {
            assert_eq!(utf16_to_byte_idx(s, i as u32), i);
            assert_eq!(byte_idx_to_utf16(s, i), i as u32);
        }
    }

    #[test]
    fn test_utf16_multibyte() {
        // 'ü' is 2 bytes / 1 unit, '😀' is 4 bytes / 2 units.
        let s = "ü😀x";
        assert_eq!(utf16_to_byte_idx(s, 1), 2);
        assert_eq!(utf16_to_byte_idx(s, 3), 6);
        assert_eq!(utf16_to_byte_idx(s, 4), 7);
        // Inside the surrogate pair.
        assert_eq!(utf16_to_byte_idx(s, 2), 2);
        // Past the end.
        assert_eq!(utf16_to_byte_idx(s, 99), s.len());

        assert_eq!(byte_idx_to_utf16(s, 6), 3);
        assert_eq!(byte_idx_to_utf16(s, 100), 4);
    }
}
