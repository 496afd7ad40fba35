use crate::{context::Context, stage::Stage, unicode::is_any_whitespace};
use std::borrow::Cow;

/// Trim the edges and collapse every internal whitespace run to one ASCII space.
///
/// Recognizes ASCII whitespace plus every Unicode `White_Space=Yes` scalar
/// (NBSP, ideographic space, …). A lone U+0020 between two words is already
/// canonical and never triggers an allocation.
pub struct CollapseWhitespace;

impl Stage for CollapseWhitespace {
    fn name(&self) -> &'static str {
        "collapse_whitespace"
    }

    fn needs_apply(&self, text: &str, _: &Context) -> bool {
        let mut prev_ws = true; // a leading space counts as a run at the edge
        for c in text.chars() {
            let ws = is_any_whitespace(c);
            if ws && (prev_ws || c != ' ') {
                return true;
            }
            prev_ws = ws;
        }
        // trailing whitespace
        prev_ws && !text.is_empty()
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        for word in text.split(is_any_whitespace).filter(|w| !w.is_empty()) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(word);
        }
        Cow::Owned(out)
    }
}
