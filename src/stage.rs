//! Core normalization stage abstraction.
//!
//! A name is normalized by running it through a short, fixed chain of
//! stages (see [`crate::profile::preset`]). Every stage follows the same
//! contract:
//!
//! * `needs_apply` is a cheap scan that predicts whether `apply` would
//!   change the text. Returning `false` skips the stage entirely.
//! * `apply` takes and returns a `Cow<str>`: a stage that has nothing to do
//!   hands back the borrowed input untouched, so clean names flow through
//!   the whole pipeline without a single allocation.
//!
//! Stages never fail. Every string, including the empty string and text in
//! scripts the engine knows nothing about, has a well-defined output.
//!
//! Stages that are pure per-character maps additionally implement
//! [`CharMapper`], which lets the phonetic encoder run them inline over a
//! `chars()` iterator without materializing an intermediate string.

pub mod canonicalize_letters;
pub mod collapse_whitespace;
pub mod lower_case;
pub mod strip_prefixes;
pub mod strip_tashkeel;
pub mod title_case;

use crate::context::Context;
use std::borrow::Cow;

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used in trace events and test failures.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool;

    /// Allocation-aware transformation. Must always be correct, even when
    /// called without a prior `needs_apply`.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;
}

/// One-to-one (or one-to-none) character mapping.
pub trait CharMapper: Send + Sync {
    /// Map a single Unicode scalar value.
    /// Return `None` if the character should be **removed**.
    fn map(&self, c: char) -> Option<char>;
}

/// Shared `apply` body for char-mapping stages: zero-copy unless
/// `needs_apply` says otherwise.
#[inline]
pub(crate) fn apply_char_mapper<'a, S>(stage: &S, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>
where
    S: Stage + CharMapper,
{
    if !stage.needs_apply(&text, ctx) {
        return text;
    }
    Cow::Owned(text.chars().filter_map(|c| stage.map(c)).collect())
}
