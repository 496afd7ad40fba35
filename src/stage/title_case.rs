use crate::{context::Context, stage::Stage};
use std::borrow::Cow;

/// Title-cases every space-separated token: first character upper, the
/// remainder lower.
///
/// Expects whitespace to be collapsed already: tokens are split on U+0020
/// only. Case mapping is per character, so a first letter with a multi-char
/// upper form (`ß` → `SS`) expands in place.
pub struct TitleCase;

impl TitleCase {
    fn token_is_titled(token: &str) -> bool {
        let mut chars = token.chars();
        let Some(first) = chars.next() else {
            return true;
        };
        first.to_uppercase().eq(std::iter::once(first))
            && chars.all(|c| c.to_lowercase().eq(std::iter::once(c)))
    }

    fn push_titled(out: &mut String, token: &str) {
        let mut chars = token.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            for c in chars {
                out.extend(c.to_lowercase());
            }
        }
    }
}

impl Stage for TitleCase {
    fn name(&self) -> &'static str {
        "title_case"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _: &Context) -> bool {
        !text.split(' ').all(Self::token_is_titled)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        for (i, token) in text.split(' ').enumerate() {
            if i > 0 {
                out.push(' ');
            }
            Self::push_titled(&mut out, token);
        }
        Cow::Owned(out)
    }
}
