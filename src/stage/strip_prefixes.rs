//! src/stage/strip_prefixes.rs
//!
//! Rewrites honorific and clan prefixes at the start of a name using the
//! current script's prefix table (`ctx.entry.prefixes`).
//!
//! * Arabic: the definite article is dropped, `عبد ال` / `ابو` / `ابن` /
//!   `بن` / `ام` are glued to the following word.
//! * Latin: `al-` / `el-` are dropped, `abd`, `abdel`, `abdul`, `abu`,
//!   `ibn`, `bin`, `um` are glued. Matching is byte-exact, so Latin input
//!   must already be lower-cased.
//!
//! The table is walked once, in declaration order. What happens after a
//! rule fires is decided by [`PrefixMode`].

use crate::{context::Context, stage::Stage};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How the prefix table is walked after a rule fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefixMode {
    /// Keep walking the remaining rules against the rewritten string, so
    /// `al-abdel rahman` → `abdel rahman` → `abdelrahman`.
    ///
    /// Each rule is tried once. A rule that already fired does not fire
    /// again, so the output can still start with a prefix:
    /// `al-al-sayed` → `al-sayed`.
    #[default]
    Chained,
    /// Stop at the first rule that fires: `al-abdel rahman` → `abdel rahman`.
    FirstMatch,
}

pub struct StripPrefixes;

impl Stage for StripPrefixes {
    fn name(&self) -> &'static str {
        "strip_prefixes"
    }

    #[inline]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        // A later rule can only fire after an earlier one rewrote the
        // string, so the first pass decides. No rule maps onto itself.
        ctx.entry
            .prefixes
            .iter()
            .any(|rule| text.starts_with(rule.from))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let mut current = text;
        for rule in ctx.entry.prefixes {
            if !current.starts_with(rule.from) {
                continue;
            }
            current = rewrite_prefix(current, rule.from.len(), rule.to);
            if ctx.prefix_mode == PrefixMode::FirstMatch {
                break;
            }
        }
        current
    }
}

/// Replace the first `cut` bytes of `text` with `to`.
///
/// Pure strips of a borrowed string re-slice instead of allocating.
#[inline]
fn rewrite_prefix<'a>(text: Cow<'a, str>, cut: usize, to: &str) -> Cow<'a, str> {
    match text {
        Cow::Borrowed(s) if to.is_empty() => Cow::Borrowed(&s[cut..]),
        Cow::Borrowed(s) => {
            let mut out = String::with_capacity(to.len() + s.len() - cut);
            out.push_str(to);
            out.push_str(&s[cut..]);
            Cow::Owned(out)
        }
        Cow::Owned(mut s) => {
            s.replace_range(..cut, to);
            Cow::Owned(s)
        }
    }
}
