// Codepoint classification used by every hot path.
// All checks are range matches on the scalar value: no tables, no allocation.

/// Tashkeel (U+064B..=U+065F) plus the superscript alef (U+0670).
#[inline(always)]
pub const fn is_tashkeel(c: char) -> bool {
    let cp = c as u32;

    // Early exit: everything outside the Arabic block
    if cp < 0x064B || cp > 0x0670 {
        return false;
    }

    matches!(cp, 0x064B..=0x065F | 0x0670)
}

#[inline]
pub fn contains_tashkeel(text: &str) -> bool {
    text.chars().any(is_tashkeel)
}

/// Main Arabic block, U+0600..=U+06FF.
///
/// Supplement and presentation-form blocks are deliberately not included:
/// script detection only looks at the block registry input is keyed in.
#[inline(always)]
pub const fn is_arabic_block(c: char) -> bool {
    matches!(c as u32, 0x0600..=0x06FF)
}

#[inline]
pub fn contains_arabic(text: &str) -> bool {
    // ASCII bytes can never start an Arabic-block scalar
    !text.is_ascii() && text.chars().any(is_arabic_block)
}

// Fast ASCII whitespace check using lookup table.
static ASCII_WS_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b' ' as usize] = true;
    table[b'\t' as usize] = true;
    table[b'\n' as usize] = true;
    table[b'\r' as usize] = true;
    table[b'\x0B' as usize] = true; // Vertical tab
    table[b'\x0C' as usize] = true; // Form feed
    table
};

#[inline(always)]
pub fn is_ascii_whitespace_fast(b: u8) -> bool {
    ASCII_WS_TABLE[b as usize]
}

/// Any `White_Space=Yes` scalar, with an ASCII fast path.
#[inline(always)]
pub fn is_any_whitespace(c: char) -> bool {
    if c.is_ascii() {
        is_ascii_whitespace_fast(c as u8)
    } else {
        c.is_whitespace()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tashkeel_range_bounds() {
        assert!(!is_tashkeel('\u{064A}')); // yaa
        assert!(is_tashkeel('\u{064B}')); // fathatan
        assert!(is_tashkeel('\u{0651}')); // shadda
        assert!(is_tashkeel('\u{065F}')); // wavy hamza below
        assert!(!is_tashkeel('\u{0660}')); // arabic-indic zero
        assert!(is_tashkeel('\u{0670}')); // superscript alef
        assert!(!is_tashkeel('\u{0671}')); // alef wasla is a letter
        assert!(!is_tashkeel('a'));
    }

    #[test]
    fn arabic_block_bounds() {
        assert!(is_arabic_block('\u{0600}'));
        assert!(is_arabic_block('\u{06FF}'));
        assert!(!is_arabic_block('\u{0750}'));
        assert!(!is_arabic_block('\u{FEFB}'));
        assert!(contains_arabic("Mohamed محمد"));
        assert!(!contains_arabic("Mohamed"));
        assert!(!contains_arabic("Müller"));
    }

    #[test]
    fn whitespace_classification() {
        for c in [' ', '\t', '\n', '\r', '\u{000B}', '\u{000C}', '\u{00A0}', '\u{3000}'] {
            assert!(is_any_whitespace(c), "{c:?}");
        }
        assert!(!is_any_whitespace('a'));
        assert!(!is_any_whitespace('\u{200B}')); // zero-width space is not White_Space
    }
}
