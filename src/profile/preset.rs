use crate::{
    process::Process,
    profile::Profile,
    stage::{
        canonicalize_letters::CanonicalizeLetters, collapse_whitespace::CollapseWhitespace,
        lower_case::LowerCase, strip_prefixes::StripPrefixes, strip_tashkeel::StripTashkeel,
        title_case::TitleCase,
    },
};

/// Arabic-script names: tashkeel, letter variants, prefixes, then spacing.
pub fn arabic_name() -> Profile<impl Process> {
    Profile::builder("arabic_name")
        .add_stage(StripTashkeel)
        .add_stage(CanonicalizeLetters)
        .add_stage(StripPrefixes)
        .add_stage(CollapseWhitespace)
        .build()
}

/// Latin transliterations: case-insensitive prefixes, spacing, title case.
pub fn latin_name() -> Profile<impl Process> {
    Profile::builder("latin_name")
        .add_stage(LowerCase)
        .add_stage(StripPrefixes)
        .add_stage(CollapseWhitespace)
        .add_stage(TitleCase)
        .build()
}
