//! Arabic and Latin personal-name matching for patient-identity records.
//!
//! A name is normalized under its detected script, Arabic names also get an
//! Arabic Soundex code, and two names are scored with Jaro-Winkler. A shared
//! phonetic code lifts an Arabic pair to a configurable floor.
//!
//! ```
//! use asma::{MatchLevel, compare_names};
//!
//! let cmp = compare_names("الحسن", "حَسَن");
//! assert!(cmp.phonetic_match);
//! assert_eq!(cmp.level, MatchLevel::Match);
//! ```

pub mod context;
pub mod matcher;
pub mod name;
pub mod phonetic;
pub mod process;
pub mod profile;
pub mod script;
pub mod similarity;
pub mod stage;
pub mod unicode;

#[cfg(test)]
mod testing;

pub use context::Context;
pub use matcher::{
    ConfigError, MatchError, MatchLevel, Matcher, MatcherBuilder, MatcherConfig, NameComparison,
    Side, compare_names,
};
pub use name::{NamePart, NormalizedName, normalize, normalize_with};
pub use phonetic::{ArabicSoundex, phonetic_code};
pub use script::{Script, ScriptPair};
pub use similarity::{JaroWinkler, jaro, similarity};
pub use stage::canonicalize_letters::CanonicalizeLetters;
pub use stage::collapse_whitespace::CollapseWhitespace;
pub use stage::lower_case::LowerCase;
pub use stage::strip_prefixes::{PrefixMode, StripPrefixes};
pub use stage::strip_tashkeel::StripTashkeel;
pub use stage::title_case::TitleCase;

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
