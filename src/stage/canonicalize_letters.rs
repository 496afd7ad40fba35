//! src/stage/canonicalize_letters.rs
//!
//! Collapses Arabic letter variants onto one canonical letter each:
//! hamza-bearing alef forms → bare alef, taa marbuta → haa,
//! alef maksura → yaa, hamza-bearing waw → waw, hamza-bearing yaa → yaa.

use crate::{
    context::Context,
    script::data::LETTER_MAP,
    stage::{CharMapper, Stage, apply_char_mapper},
};
use std::borrow::Cow;

/// Context-free one-to-one letter substitution.
///
/// Every target letter is itself unmapped, so the stage is idempotent.
pub struct CanonicalizeLetters;

impl Stage for CanonicalizeLetters {
    fn name(&self) -> &'static str {
        "canonicalize_letters"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Context) -> bool {
        !text.is_ascii() && text.chars().any(|c| LETTER_MAP.contains_key(&c))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        apply_char_mapper(self, text, ctx)
    }
}

impl CharMapper for CanonicalizeLetters {
    #[inline(always)]
    fn map(&self, c: char) -> Option<char> {
        Some(LETTER_MAP.get(&c).copied().unwrap_or(c))
    }
}
