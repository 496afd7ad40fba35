//! Jaro and Jaro-Winkler similarity over Unicode scalar values.
//!
//! Script-agnostic: the scorer compares `char`s, never bytes, so an Arabic
//! letter counts as one position just like an ASCII one.

use smallvec::SmallVec;

/// Names rarely exceed this many characters; longer input spills to the heap.
type CharBuf = SmallVec<[char; 32]>;
type FlagBuf = SmallVec<[bool; 32]>;

pub const DEFAULT_PREFIX_WEIGHT: f64 = 0.1;
pub const DEFAULT_MAX_PREFIX_LEN: usize = 4;

/// Upper bound on the prefix weight. Together with the prefix length cap of
/// [`DEFAULT_MAX_PREFIX_LEN`] this keeps scores within `[0, 1]`.
pub const MAX_PREFIX_WEIGHT: f64 = 0.25;

/// Jaro-Winkler scorer with a configurable prefix bonus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JaroWinkler {
    prefix_weight: f64,
    max_prefix_len: usize,
}

impl Default for JaroWinkler {
    fn default() -> Self {
        Self {
            prefix_weight: DEFAULT_PREFIX_WEIGHT,
            max_prefix_len: DEFAULT_MAX_PREFIX_LEN,
        }
    }
}

impl JaroWinkler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight is clamped to `[0, MAX_PREFIX_WEIGHT]`.
    #[must_use]
    pub fn with_prefix_weight(mut self, weight: f64) -> Self {
        self.prefix_weight = weight.clamp(0.0, MAX_PREFIX_WEIGHT);
        self
    }

    /// Length is clamped to `[0, DEFAULT_MAX_PREFIX_LEN]`.
    #[must_use]
    pub fn with_max_prefix_len(mut self, len: usize) -> Self {
        self.max_prefix_len = len.min(DEFAULT_MAX_PREFIX_LEN);
        self
    }

    pub fn prefix_weight(&self) -> f64 {
        self.prefix_weight
    }

    pub fn max_prefix_len(&self) -> usize {
        self.max_prefix_len
    }

    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        let a: CharBuf = a.chars().collect();
        let b: CharBuf = b.chars().collect();

        let jaro = jaro_chars(&a, &b);
        if jaro == 0.0 {
            return 0.0;
        }

        let prefix = a
            .iter()
            .zip(b.iter())
            .take(self.max_prefix_len)
            .take_while(|(x, y)| x == y)
            .count();

        jaro + prefix as f64 * self.prefix_weight * (1.0 - jaro)
    }
}

/// Plain Jaro similarity.
pub fn jaro(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let a: CharBuf = a.chars().collect();
    let b: CharBuf = b.chars().collect();
    jaro_chars(&a, &b)
}

fn jaro_chars(a: &[char], b: &[char]) -> f64 {
    let (len_a, len_b) = (a.len(), b.len());
    let window = (len_a.max(len_b) / 2).saturating_sub(1);

    let mut a_matched: FlagBuf = SmallVec::from_elem(false, len_a);
    let mut b_matched: FlagBuf = SmallVec::from_elem(false, len_b);
    let mut matches = 0usize;

    for (i, &ca) in a.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(len_b);
        for j in start..end {
            if !b_matched[j] && b[j] == ca {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Walk both matched sequences in order, counting positional disagreements
    let a_seq = a.iter().zip(&a_matched).filter(|(_, m)| **m).map(|(c, _)| c);
    let b_seq = b.iter().zip(&b_matched).filter(|(_, m)| **m).map(|(c, _)| c);
    let transpositions = a_seq.zip(b_seq).filter(|(x, y)| x != y).count();

    let m = matches as f64;
    let t = transpositions as f64 / 2.0;
    (m / len_a as f64 + m / len_b as f64 + (m - t) / m) / 3.0
}

/// Jaro-Winkler with the standard 0.1 weight and 4-character prefix cap.
#[inline]
pub fn similarity(a: &str, b: &str) -> f64 {
    JaroWinkler::default().similarity(a, b)
}
