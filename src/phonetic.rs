//! Arabic Soundex: a fixed-length phonetic code for Arabic names.
//!
//! The code is the name's first letter followed by up to five articulation
//! group digits, right-padded with `'0'`:
//!
//! | digit | letters            | class                |
//! |-------|--------------------|----------------------|
//! | 1     | ب ف و              | labial / labio-dental |
//! | 2     | ج ز س ش ص ض ظ      | sibilant / emphatic  |
//! | 3     | د ذ ت ط ث          | dental               |
//! | 4     | ل                  | lateral              |
//! | 5     | م ن                | nasal                |
//! | 6     | ر                  | trill                |
//! | 7     | ق ك غ خ            | velar / uvular       |
//! | 8     | ه ح ع ء            | guttural / glottal   |
//! | 9     | ي                  | semivowel            |
//!
//! Letters without a group (alef, non-Arabic characters) are skipped, as
//! is a letter whose digit repeats the last emitted one.

use crate::{
    script::data::PHONETIC_GROUPS,
    stage::{CharMapper, canonicalize_letters::CanonicalizeLetters, strip_tashkeel::StripTashkeel},
};

/// Code length in characters: one literal letter plus five digits.
pub const CODE_LEN: usize = 6;

/// Padding digit for codes with fewer than five group digits.
pub const PAD: char = '0';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArabicSoundex;

impl ArabicSoundex {
    #[inline]
    pub fn group(c: char) -> Option<char> {
        PHONETIC_GROUPS.get(&c).copied()
    }

    /// Encode one word, or a whole name with its spaces already removed.
    ///
    /// Tashkeel and letter variants are folded on the fly, so raw and
    /// normalized spellings of the same name share a code. Returns an empty
    /// string for input with no letters left after folding.
    pub fn encode(&self, text: &str) -> String {
        let mut letters = text
            .chars()
            .filter_map(|c| StripTashkeel.map(c))
            .filter_map(|c| CanonicalizeLetters.map(c));

        let Some(first) = letters.next() else {
            return String::new();
        };

        let mut code = String::with_capacity(first.len_utf8() + CODE_LEN - 1);
        code.push(first);
        let mut len = 1;
        let mut last = Self::group(first);

        for c in letters {
            if len == CODE_LEN {
                break;
            }
            let Some(digit) = Self::group(c) else {
                continue;
            };
            if Some(digit) != last {
                code.push(digit);
                len += 1;
                last = Some(digit);
            }
        }

        for _ in len..CODE_LEN {
            code.push(PAD);
        }
        code
    }
}

/// Phonetic code of `text` (6 characters, or empty for empty input).
#[inline]
pub fn phonetic_code(text: &str) -> String {
    ArabicSoundex.encode(text)
}
