//! src/stage/strip_tashkeel.rs
//!
//! Removes Arabic short-vowel and gemination marks (tashkeel) and the
//! superscript alef.

use crate::{
    context::Context,
    stage::{CharMapper, Stage, apply_char_mapper},
    unicode::{contains_tashkeel, is_tashkeel},
};
use std::borrow::Cow;

/// Removes every codepoint in U+064B..=U+065F and U+0670.
///
/// Unlike an NFD-based accent stripper this stage never decomposes: it only
/// drops standalone combining marks, so Latin letters with precomposed
/// accents (`é`, `ü`) pass through untouched.
pub struct StripTashkeel;

impl Stage for StripTashkeel {
    fn name(&self) -> &'static str {
        "strip_tashkeel"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Context) -> bool {
        // Tashkeel is never ASCII
        !text.is_ascii() && contains_tashkeel(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        apply_char_mapper(self, text, ctx)
    }
}

impl CharMapper for StripTashkeel {
    #[inline(always)]
    fn map(&self, c: char) -> Option<char> {
        if is_tashkeel(c) { None } else { Some(c) }
    }
}
