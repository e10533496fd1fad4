// trustguard-text/src/repetition/mod.rs
//! Word-level repetition statistics.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// Words shorter than or equal to this many characters are ignored by
/// [`dominant_word`].
pub const SIGNIFICANT_WORD_LEN: usize = 3;

/// Splits on runs of whitespace, lowercasing every word.
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// The most frequent significant word of a word list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WordDominance {
    /// How often the word occurs.
    pub occurrences: usize,
    /// `occurrences` over the length of the whole word list.
    pub share: f64,
}

/// Finds the significant word taking the largest share of the word list.
///
/// An empty list, or one without significant words, yields zero for both fields.
pub fn dominant_word<S: AsRef<str>>(words: &[S]) -> WordDominance {
    if words.is_empty() {
        return WordDominance::default();
    }

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for word in words {
        let word = word.as_ref();
        if word.chars().count() > SIGNIFICANT_WORD_LEN {
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    let occurrences = counts.values().copied().max().unwrap_or(0);
    WordDominance {
        occurrences,
        share: occurrences as f64 / words.len() as f64,
    }
}

/// How often the most frequent 3-word window occurs.
///
/// Windows slide one word at a time, so overlapping occurrences count.
/// Fewer than three words yields 0.
pub fn max_trigram_repeats<S: AsRef<str>>(words: &[S]) -> usize {
    let mut counts: BTreeMap<[&str; 3], usize> = BTreeMap::new();
    for window in words.windows(3) {
        let key = [window[0].as_ref(), window[1].as_ref(), window[2].as_ref()];
        *counts.entry(key).or_insert(0) += 1;
    }
    counts.values().copied().max().unwrap_or(0)
}
