// trustguard-text/src/keywords/mod.rs
use daachorse::DoubleArrayAhoCorasick;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// Failure to build the keyword automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordError {
    /// The automaton builder rejected the vocabulary.
    Build(String),
}

impl fmt::Display for KeywordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeywordError::Build(msg) => write!(f, "failed to build keyword automaton: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KeywordError {}

/// Case-insensitive substring search for a fixed vocabulary.
///
/// Keywords are lowercased, trimmed and de-duplicated on construction; the
/// first spelling wins. Matches are reported in vocabulary order, each keyword
/// at most once, regardless of where or how often it occurs in the text.
pub struct KeywordScanner {
    automaton: Option<DoubleArrayAhoCorasick<usize>>,
    keywords: Vec<String>,
}

impl fmt::Debug for KeywordScanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeywordScanner")
         .field("automaton", &"<DoubleArrayAhoCorasick>")
         .field("keywords", &self.keywords.len())
         .finish()
    }
}

impl KeywordScanner {
    /// Builds a scanner over `keywords`. Blank entries are skipped.
    pub fn new<I, S>(keywords: I) -> Result<Self, KeywordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for keyword in keywords {
            let k = keyword.as_ref().trim().to_lowercase();
            if k.is_empty() || normalized.contains(&k) {
                continue;
            }
            normalized.push(k);
        }

        // daachorse refuses an empty pattern set.
        let automaton = if normalized.is_empty() {
            None
        } else {
            Some(
                DoubleArrayAhoCorasick::new(normalized.iter().map(String::as_str))
                    .map_err(|e| KeywordError::Build(e.to_string()))?,
            )
        };

        Ok(Self { automaton, keywords: normalized })
    }

    /// The normalized vocabulary, in construction order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Returns every distinct keyword found in `text`.
    pub fn find_all(&self, text: &str) -> Vec<&str> {
        let Some(automaton) = &self.automaton else {
            return Vec::new();
        };

        let haystack = text.to_lowercase();
        let mut hit = vec![false; self.keywords.len()];
        for m in automaton.find_overlapping_iter(haystack.as_bytes()) {
            if let Some(slot) = hit.get_mut(m.value()) {
                *slot = true;
            }
        }

        self.keywords
            .iter()
            .zip(hit)
            .filter_map(|(k, found)| found.then_some(k.as_str()))
            .collect()
    }

    pub fn contains_any(&self, text: &str) -> bool {
        !self.find_all(text).is_empty()
    }
}
