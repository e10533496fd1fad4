//! tables.rs - The built-in spam vocabulary and suspicious patterns.
//!
//! The keyword and phrase lists are disjoint: a keyword scores once per
//! distinct term in a single combined reason, a phrase scores and reports
//! individually.

use once_cell::sync::Lazy;
use regex::Regex;
use trustguard_text::count_char_runs;

/// Pharmaceutical, gambling, get-rich and MLM vocabulary.
pub const SPAM_KEYWORDS: &[&str] = &[
    "viagra",
    "cialis",
    "pharmacy",
    "casino",
    "lottery",
    "poker",
    "jackpot",
    "betting",
    "bitcoin",
    "forex",
    "get rich",
    "make money fast",
    "earn money",
    "work from home",
    "passive income",
    "mlm",
    "pyramid scheme",
    "downline",
    "weight loss",
    "diet pills",
    "payday loan",
    "buy now",
    "click here",
    "limited time",
    "act now",
];

/// Phrases typical of scam and prize messages.
pub const SPAM_PHRASES: &[&str] = &[
    "claim your prize",
    "100% free",
    "risk free",
    "no credit check",
    "you have been selected",
    "congratulations you won",
    "double your money",
    "guaranteed income",
    "once in a lifetime",
    "exclusive deal",
];

/// Minimum run length for the repeated-character pattern.
const REPEATED_CHAR_RUN: usize = 6;

#[derive(Debug)]
enum Matcher {
    Regex(Regex),
    CharRun(usize),
}

/// One suspicious-content pattern.
///
/// `source` is what a reason string reports; it never echoes the matched text.
#[derive(Debug)]
pub struct SuspiciousPattern {
    pub name: &'static str,
    pub source: &'static str,
    matcher: Matcher,
}

impl SuspiciousPattern {
    fn regex(name: &'static str, source: &'static str) -> Self {
        // Table entries are literals covered by tests; a failure here is a programming error.
        let regex = Regex::new(source).expect("built-in suspicious pattern must compile");
        Self { name, source, matcher: Matcher::Regex(regex) }
    }

    /// Counts non-overlapping matches in `content`.
    pub fn count_matches(&self, content: &str) -> usize {
        match &self.matcher {
            Matcher::Regex(regex) => regex.find_iter(content).count(),
            Matcher::CharRun(min_len) => count_char_runs(content, *min_len),
        }
    }
}

/// The six suspicious patterns, in evaluation order.
pub static SUSPICIOUS_PATTERNS: Lazy<Vec<SuspiciousPattern>> = Lazy::new(|| {
    vec![
        SuspiciousPattern::regex(
            "low_trust_tld",
            r"(?i)https?://[^\s/]+\.(?:tk|ml|ga|cf|gq|xyz|top|click)\b",
        ),
        SuspiciousPattern::regex("long_digit_run", r"\d{10,}"),
        SuspiciousPattern::regex("long_uppercase_run", r"[A-Z]{10,}"),
        SuspiciousPattern {
            name: "repeated_character",
            source: r"(.)\1{5,}",
            matcher: Matcher::CharRun(REPEATED_CHAR_RUN),
        },
        SuspiciousPattern::regex("dollar_amount", r"\$\d+(?:,\d{3})*(?:\.\d{2})?"),
        SuspiciousPattern::regex("repeated_exclamation", r"!(?:\s*!)+"),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(name: &str) -> &'static SuspiciousPattern {
        SUSPICIOUS_PATTERNS.iter().find(|p| p.name == name).unwrap()
    }

    #[test]
    fn all_patterns_compile() {
        assert_eq!(SUSPICIOUS_PATTERNS.len(), 6);
    }

    #[test]
    fn keyword_and_phrase_tables_are_disjoint() {
        for phrase in SPAM_PHRASES {
            assert!(!SPAM_KEYWORDS.contains(phrase), "{} is in both tables", phrase);
        }
    }

    #[test]
    fn low_trust_tld_ignores_case() {
        let p = pattern("low_trust_tld");
        assert_eq!(p.count_matches("visit HTTP://free-stuff.TK/now"), 1);
        assert_eq!(p.count_matches("visit https://example.com/tk"), 0);
    }

    #[test]
    fn digit_and_uppercase_runs() {
        assert_eq!(pattern("long_digit_run").count_matches("call 5551234567 or 123"), 1);
        assert_eq!(pattern("long_uppercase_run").count_matches("AMAZINGDEAL and OK"), 1);
    }

    #[test]
    fn repeated_character_run() {
        let p = pattern("repeated_character");
        assert_eq!(p.count_matches("sooooooo good"), 1);
        assert_eq!(p.count_matches("sooooo good"), 0);
    }

    #[test]
    fn dollar_amounts_and_exclamations() {
        assert_eq!(pattern("dollar_amount").count_matches("earn $500 or $1,000.00 daily"), 2);
        assert_eq!(pattern("repeated_exclamation").count_matches("wow!! yes! ! and!"), 2);
    }
}
