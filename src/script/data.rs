use phf::{Map, phf_map};

/// A leading-substring rewrite. `to` replaces `from` when the name starts with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrefixRule {
    pub from: &'static str,
    pub to: &'static str,
}

/// ---------------------------------------------------------------------------
///    Macro – expands each Latin stem into its hyphen and space variants
/// ---------------------------------------------------------------------------
macro_rules! define_latin_prefixes {
    ($( $stem:literal => $to:literal ),* $(,)?) => {
        &[
            $(
                PrefixRule { from: concat!($stem, "-"), to: $to },
                PrefixRule { from: concat!($stem, " "), to: $to },
            )*
        ]
    };
}

// ---------------------------------------------------------------------------
//    Letter canonicalization (one-to-one, context free)
// ---------------------------------------------------------------------------
pub static LETTER_MAP: Map<char, char> = phf_map! {
    '\u{0622}' => '\u{0627}', // آ → ا
    '\u{0623}' => '\u{0627}', // أ → ا
    '\u{0625}' => '\u{0627}', // إ → ا
    '\u{0671}' => '\u{0627}', // ٱ → ا
    '\u{0629}' => '\u{0647}', // ة → ه
    '\u{0649}' => '\u{064A}', // ى → ي
    '\u{0624}' => '\u{0648}', // ؤ → و
    '\u{0626}' => '\u{064A}', // ئ → ي
};

// ---------------------------------------------------------------------------
//    Phonetic groups (Egyptian Arabic articulation classes)
//    Keys are canonical letters only: hamza-bearing alef never reaches the
//    encoder because canonicalization runs first.
// ---------------------------------------------------------------------------
pub static PHONETIC_GROUPS: Map<char, char> = phf_map! {
    // 1 – labial / labio-dental
    '\u{0628}' => '1', // ب
    '\u{0641}' => '1', // ف
    '\u{0648}' => '1', // و
    // 2 – sibilant / emphatic
    '\u{062C}' => '2', // ج
    '\u{0632}' => '2', // ز
    '\u{0633}' => '2', // س
    '\u{0634}' => '2', // ش
    '\u{0635}' => '2', // ص
    '\u{0636}' => '2', // ض
    '\u{0638}' => '2', // ظ
    // 3 – dental
    '\u{062F}' => '3', // د
    '\u{0630}' => '3', // ذ
    '\u{062A}' => '3', // ت
    '\u{0637}' => '3', // ط
    '\u{062B}' => '3', // ث
    // 4 – lateral
    '\u{0644}' => '4', // ل
    // 5 – nasal
    '\u{0645}' => '5', // م
    '\u{0646}' => '5', // ن
    // 6 – trill
    '\u{0631}' => '6', // ر
    // 7 – velar / uvular
    '\u{0642}' => '7', // ق
    '\u{0643}' => '7', // ك
    '\u{063A}' => '7', // غ
    '\u{062E}' => '7', // خ
    // 8 – guttural / glottal
    '\u{0647}' => '8', // ه
    '\u{062D}' => '8', // ح
    '\u{0639}' => '8', // ع
    '\u{0621}' => '8', // ء
    // 9 – semivowel
    '\u{064A}' => '9', // ي
};

// ---------------------------------------------------------------------------
//    Prefix tables – declaration order is significant
// ---------------------------------------------------------------------------

/// Arabic-script prefixes, written in canonical letters (post canonicalization).
pub static ARABIC_PREFIXES: &[PrefixRule] = &[
    PrefixRule { from: "\u{0627}\u{0644}", to: "" }, // ال
    PrefixRule { from: "\u{0639}\u{0628}\u{062F} \u{0627}\u{0644}", to: "\u{0639}\u{0628}\u{062F}\u{0627}\u{0644}" }, // عبد ال → عبدال
    PrefixRule { from: "\u{0627}\u{0628}\u{0648} ", to: "\u{0627}\u{0628}\u{0648}" }, // ابو
    PrefixRule { from: "\u{0627}\u{0628}\u{0646} ", to: "\u{0627}\u{0628}\u{0646}" }, // ابن
    PrefixRule { from: "\u{0628}\u{0646} ", to: "\u{0628}\u{0646}" }, // بن
    PrefixRule { from: "\u{0627}\u{0645} ", to: "\u{0627}\u{0645}" }, // ام
];

/// Latin transliterated prefixes, matched against the lower-cased name.
pub static LATIN_PREFIXES: &[PrefixRule] = define_latin_prefixes! {
    "al" => "",
    "el" => "",
    "abd" => "abd",
    "abdel" => "abdel",
    "abdul" => "abdul",
    "abu" => "abu",
    "ibn" => "ibn",
    "bin" => "bin",
    "um" => "um",
};
