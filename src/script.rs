pub mod data;

use crate::unicode::contains_arabic;
use data::{ARABIC_PREFIXES, LATIN_PREFIXES, PrefixRule};
use serde::{Deserialize, Serialize};

/// Writing system a name is normalized under.
///
/// Detection is binary: a name is Arabic as soon as one codepoint falls in
/// the main Arabic block, everything else takes the Latin branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Arabic,
    Latin,
}

impl Script {
    #[inline]
    pub fn detect(text: &str) -> Self {
        if contains_arabic(text) {
            Script::Arabic
        } else {
            Script::Latin
        }
    }

    #[inline(always)]
    pub fn entry(self) -> &'static ScriptEntry {
        match self {
            Script::Arabic => &ARABIC,
            Script::Latin => &LATIN,
        }
    }

    #[inline(always)]
    pub const fn is_arabic(self) -> bool {
        matches!(self, Script::Arabic)
    }

    #[inline(always)]
    pub fn name(self) -> &'static str {
        self.entry().name
    }
}

/// Script combination of a compared pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptPair {
    Arabic,
    Latin,
    Mixed,
}

impl ScriptPair {
    #[inline]
    pub const fn of(left: Script, right: Script) -> Self {
        match (left, right) {
            (Script::Arabic, Script::Arabic) => ScriptPair::Arabic,
            (Script::Latin, Script::Latin) => ScriptPair::Latin,
            _ => ScriptPair::Mixed,
        }
    }
}

/// Per-script rules consulted by the stages through [`crate::context::Context`].
#[derive(Debug)]
pub struct ScriptEntry {
    pub name: &'static str,
    pub prefixes: &'static [PrefixRule],
    /// Whether names in this script carry phonetic codes.
    pub phonetic_coding: bool,
}

static ARABIC: ScriptEntry = ScriptEntry {
    name: "arabic",
    prefixes: ARABIC_PREFIXES,
    phonetic_coding: true,
};

static LATIN: ScriptEntry = ScriptEntry {
    name: "latin",
    prefixes: LATIN_PREFIXES,
    phonetic_coding: false,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_arabic_anywhere_in_the_string() {
        assert_eq!(Script::detect("محمد"), Script::Arabic);
        assert_eq!(Script::detect("Mohamed محمد"), Script::Arabic);
        assert_eq!(Script::detect("Mohamed"), Script::Latin);
        assert_eq!(Script::detect(""), Script::Latin);
        // A lone diacritic still lives in the Arabic block
        assert_eq!(Script::detect("\u{064E}"), Script::Arabic);
    }

    #[test]
    fn pair_combinator() {
        use Script::*;
        assert_eq!(ScriptPair::of(Arabic, Arabic), ScriptPair::Arabic);
        assert_eq!(ScriptPair::of(Latin, Latin), ScriptPair::Latin);
        assert_eq!(ScriptPair::of(Arabic, Latin), ScriptPair::Mixed);
        assert_eq!(ScriptPair::of(Latin, Arabic), ScriptPair::Mixed);
    }

    #[test]
    fn entries_point_at_their_tables() {
        assert!(Script::Arabic.entry().phonetic_coding);
        assert!(!Script::Latin.entry().phonetic_coding);
        assert_eq!(Script::Arabic.entry().prefixes, ARABIC_PREFIXES);
        assert_eq!(Script::Latin.name(), "latin");
    }
}
