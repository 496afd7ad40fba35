use crate::{context::Context, stage::Stage};
use std::borrow::Cow;

/// Unicode lower-casing, zero-copy when the text has nothing to lower.
///
/// Runs ahead of Latin prefix matching so that `Al-`, `AL-` and `al-` hit
/// the same table entry.
pub struct LowerCase;

#[inline(always)]
fn lowers(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_uppercase()
    } else {
        c.to_lowercase().ne(std::iter::once(c))
    }
}

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _: &Context) -> bool {
        if text.is_ascii() {
            return text.bytes().any(|b| b.is_ascii_uppercase());
        }
        text.chars().any(lowers)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        Cow::Owned(text.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_stage_contract, script::Script, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for LowerCase {
        fn scripts() -> &'static [Script] {
            &[Script::Latin]
        }

        fn samples(_: Script) -> &'static [&'static str] {
            &["Al-Sayed", "MOHAMED ALI", "mohamed", "Émile", "محمد", ""]
        }

        fn should_pass_through(_: Script) -> &'static [&'static str] {
            &["mohamed ali", "émile", "محمد", ""]
        }

        fn should_transform(_: Script) -> &'static [(&'static str, &'static str)] {
            &[("Al-Sayed", "al-sayed"), ("ABU BAKR", "abu bakr"), ("ÉMILE", "émile")]
        }
    }

    #[test]
    fn universal_contract() {
        assert_stage_contract!(LowerCase);
    }
}
