use crate::{
    context::Context,
    phonetic::ArabicSoundex,
    profile::preset,
    script::Script,
    stage::strip_prefixes::PrefixMode,
};
use serde::Serialize;
use smallvec::SmallVec;
use std::borrow::Cow;
use tracing::trace;

/// Most registry names are four parts: given, father, grandfather, family.
pub type Parts = SmallVec<[NamePart; 4]>;

/// One whitespace-separated token of a normalized name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamePart {
    pub text: String,
    /// The token's own code. Empty for Latin names.
    pub phonetic_code: String,
}

/// Result of normalizing one name. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedName {
    original: String,
    normalized: String,
    phonetic_code: String,
    script: Script,
    parts: Parts,
}

impl NormalizedName {
    /// Run `name` through its script's profile and derive the codes.
    pub fn new(name: &str, ctx: &Context) -> Self {
        let normalized = match ctx.script {
            Script::Arabic => preset::arabic_name().run(Cow::Borrowed(name), ctx),
            Script::Latin => preset::latin_name().run(Cow::Borrowed(name), ctx),
        };

        let coded = ctx.entry.phonetic_coding;
        let code_of = |text: &str| {
            if coded {
                ArabicSoundex.encode(text)
            } else {
                String::new()
            }
        };

        let parts: Parts = normalized
            .split(' ')
            .filter(|part| !part.is_empty())
            .map(|part| NamePart {
                text: part.to_owned(),
                phonetic_code: code_of(part),
            })
            .collect();

        // Spaces carry no group digit and `normalized` never starts with one,
        // so this is the code of the name with its spaces removed.
        let phonetic_code = code_of(normalized.as_ref());

        trace!(
            script = ctx.script.name(),
            parts = parts.len(),
            code = %phonetic_code,
            "name normalized"
        );

        Self {
            original: name.to_owned(),
            normalized: normalized.into_owned(),
            phonetic_code,
            script: ctx.script,
            parts,
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Whole-name code; empty for Latin names and for names that normalize
    /// to nothing.
    pub fn phonetic_code(&self) -> &str {
        &self.phonetic_code
    }

    pub fn script(&self) -> Script {
        self.script
    }

    pub fn parts(&self) -> &[NamePart] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// Normalize `name` under its detected script with the default prefix mode.
///
/// Prefixes are matched before whitespace is collapsed, so trim the input
/// first: `"  الحسن"` keeps its article.
#[inline]
pub fn normalize(name: &str) -> NormalizedName {
    normalize_with(name, PrefixMode::default())
}

pub fn normalize_with(name: &str, prefix_mode: PrefixMode) -> NormalizedName {
    let ctx = Context::with_prefix_mode(Script::detect(name), prefix_mode);
    NormalizedName::new(name, &ctx)
}
