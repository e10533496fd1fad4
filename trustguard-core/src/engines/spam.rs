// trustguard-core/src/engines/spam.rs
//! The heuristic spam classifier.
//!
//! Every heuristic runs on every call and adds its weight to a running score;
//! there is no short-circuiting. Reasons are recorded in evaluation order:
//! keywords, suspicious patterns, URL count, capitalization, length,
//! repetition, account history, spam phrases.
//! License: MIT OR APACHE 2.0

use std::fmt;
use std::sync::Arc;
use anyhow::{Context, Result};
use log::debug;
use trustguard_text::{
    char_len, count_url_schemes, dominant_word, max_trigram_repeats, split_words,
    uppercase_ratio,
};

use crate::config::{ScoringConfig, SpamWeights};
use crate::engine::ContentClassifier;
use crate::events::{LogSink, SpamEvent, SpamEventSink};
use crate::model::{AccountMetadata, SpamCheckResult};
use crate::patterns::{get_or_compile_vocabulary, CompiledVocabulary, SUSPICIOUS_PATTERNS};

/// Accumulates points and reasons while the heuristics run.
struct Tally {
    score: u32,
    reasons: Vec<String>,
}

impl Tally {
    fn new() -> Self {
        Self { score: 0, reasons: Vec::new() }
    }

    fn add(&mut self, points: u32, reason: impl Into<String>) {
        self.score = self.score.saturating_add(points);
        self.reasons.push(reason.into());
    }
}

fn times(weight: u32, count: usize) -> u32 {
    weight.saturating_mul(u32::try_from(count).unwrap_or(u32::MAX))
}

pub struct SpamClassifier {
    config: ScoringConfig,
    vocabulary: Arc<CompiledVocabulary>,
    sink: Arc<dyn SpamEventSink>,
}

impl fmt::Debug for SpamClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpamClassifier")
         .field("config", &self.config)
         .field("vocabulary", &self.vocabulary)
         .field("sink", &"<dyn SpamEventSink>")
         .finish()
    }
}

impl SpamClassifier {
    /// Builds a classifier, validating `config` and compiling its vocabulary.
    pub fn new(config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        let vocabulary = get_or_compile_vocabulary(&config.vocabulary)
            .context("Failed to compile vocabulary for SpamClassifier")?;
        debug!(
            "SpamClassifier ready: {} keywords, {} phrases, threshold {}.",
            vocabulary.keywords.len(),
            vocabulary.phrases.len(),
            config.spam.spam_threshold
        );

        Ok(Self {
            config,
            vocabulary,
            sink: Arc::new(LogSink),
        })
    }

    /// A classifier with the built-in weights and vocabulary.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ScoringConfig::default())
    }

    fn weights(&self) -> &SpamWeights {
        &self.config.spam
    }

    fn score_keywords(&self, content: &str, tally: &mut Tally) {
        let found = self.vocabulary.keywords.find_all(content);
        if !found.is_empty() {
            tally.add(
                times(self.weights().keyword, found.len()),
                format!("Contains spam keywords: {}", found.join(", ")),
            );
        }
    }

    fn score_patterns(&self, content: &str, tally: &mut Tally) {
        for pattern in SUSPICIOUS_PATTERNS.iter() {
            let matches = pattern.count_matches(content);
            if matches > 0 {
                tally.add(
                    times(self.weights().pattern_match, matches),
                    format!("Suspicious pattern detected: {}", pattern.source),
                );
            }
        }
    }

    fn score_shape(&self, content: &str, tally: &mut Tally) {
        let w = self.weights();

        let urls = count_url_schemes(content);
        if urls > 1 {
            tally.add(times(w.extra_url, urls - 1), format!("Contains {} URLs", urls));
        }

        let len = char_len(content);
        if len > w.caps_min_length && uppercase_ratio(content) > w.caps_ratio {
            tally.add(w.excessive_caps, "Excessive capitalization");
        }

        if len < w.min_length {
            tally.add(w.too_short, "Content too short");
        } else if len > w.max_length {
            tally.add(w.too_long, "Content unusually long");
        }

        let words = split_words(content);
        let dominance = dominant_word(&words);
        let dominated = dominance.occurrences >= w.word_min_occurrences && dominance.share > w.word_share;
        let repeated_phrase = max_trigram_repeats(&words) > w.phrase_repeats;
        if dominated || repeated_phrase {
            tally.add(w.repetition, "Repetitive content detected");
        }
    }

    /// Returns the discount to apply once all other heuristics have run.
    fn score_account(&self, metadata: &AccountMetadata, tally: &mut Tally) -> u32 {
        let w = self.weights();

        if metadata.account_age_days.is_some_and(|age| age < w.new_account_days) {
            tally.add(w.new_account, "New account");
        }
        if metadata.previous_posts == Some(0) {
            tally.add(w.no_posts, "No previous posts");
        }
        if let Some(reports) = metadata.previous_reports.filter(|&r| r > 0) {
            tally.add(
                times(w.per_report, reports as usize),
                format!("{} previous reports", reports),
            );
        }
        if metadata.is_verified() {
            tally.reasons.push("Verified account".to_string());
            w.verified_discount
        } else {
            0
        }
    }

    fn score_phrases(&self, content: &str, tally: &mut Tally) {
        for phrase in self.vocabulary.phrases.find_all(content) {
            tally.add(self.weights().spam_phrase, format!("Contains spam phrase: {}", phrase));
        }
    }

    /// Runs every heuristic without emitting events.
    pub fn evaluate(&self, content: &str, metadata: Option<&AccountMetadata>) -> SpamCheckResult {
        let mut tally = Tally::new();

        self.score_keywords(content, &mut tally);
        self.score_patterns(content, &mut tally);
        self.score_shape(content, &mut tally);
        let discount = match metadata {
            Some(meta) => self.score_account(meta, &mut tally),
            None => 0,
        };
        self.score_phrases(content, &mut tally);

        let score = tally.score.saturating_sub(discount);
        SpamCheckResult::from_score(score, tally.reasons, self.weights().spam_threshold)
    }

    fn report(&self, content: &str, author_id: &str, result: &SpamCheckResult) {
        let event = SpamEvent::new(author_id, content, result);
        if let Err(e) = self.sink.record(&event) {
            debug!("Spam event for author '{}' was not recorded: {:#}", author_id, e);
        }
    }
}

impl ContentClassifier for SpamClassifier {
    fn classify(
        &self,
        content: &str,
        author_id: &str,
        metadata: Option<&AccountMetadata>,
    ) -> SpamCheckResult {
        let result = self.evaluate(content, metadata);
        if result.is_spam {
            self.report(content, author_id, &result);
        }
        result
    }

    fn config(&self) -> &ScoringConfig { &self.config }
    fn set_event_sink(&mut self, sink: Arc<dyn SpamEventSink>) { self.sink = sink; }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> SpamClassifier {
        SpamClassifier::with_defaults().unwrap()
    }

    #[test]
    fn empty_content_is_only_too_short() {
        let result = classifier().evaluate("", None);
        assert_eq!(result.score, 20);
        assert_eq!(result.reasons, vec!["Content too short"]);
    }

    #[test]
    fn keywords_score_per_distinct_term_in_one_reason() {
        let result = classifier().evaluate("Visit our casino for lottery and casino bonuses", None);
        assert_eq!(result.score, 40);
        assert_eq!(result.reasons, vec!["Contains spam keywords: casino, lottery"]);
    }

    #[test]
    fn pattern_points_scale_with_matches() {
        let result = classifier().evaluate("Prices today are $10 and $20 and also $30 only", None);
        assert_eq!(result.score, 45);
        assert_eq!(result.reasons, vec![r"Suspicious pattern detected: \$\d+(?:,\d{3})*(?:\.\d{2})?"]);
    }

    #[test]
    fn first_url_is_free() {
        let c = classifier();
        assert_eq!(c.evaluate("see https://example.com for details", None).score, 0);
        let result = c.evaluate("see https://a.example and http://b.example and https://c.example", None);
        assert_eq!(result.score, 20);
        assert_eq!(result.reasons, vec!["Contains 3 URLs"]);
    }

    #[test]
    fn shouting_needs_length_over_twenty() {
        let c = classifier();
        // 20 characters exactly: no capitalization penalty.
        assert_eq!(c.evaluate("WHY IS THIS SO LOUD?", None).score, 0);
        let result = c.evaluate("WHY IS THIS SO VERY LOUD", None);
        assert_eq!(result.reasons, vec!["Excessive capitalization"]);
        assert_eq!(result.score, 30);
    }

    #[test]
    fn long_content_is_flagged_once() {
        let text = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do ".repeat(100);
        let result = classifier().evaluate(&text, None);
        assert!(result.reasons.contains(&"Content unusually long".to_string()));
        assert!(!result.reasons.contains(&"Content too short".to_string()));
    }

    #[test]
    fn repeated_trigram_is_repetitive() {
        let result = classifier().evaluate("join us today join us today join us today", None);
        assert_eq!(result.reasons, vec!["Repetitive content detected"]);
        assert_eq!(result.score, 25);
    }

    #[test]
    fn dominant_word_is_repetitive() {
        let result = classifier().evaluate(
            "great great great great product and a very fine experience overall",
            None,
        );
        assert_eq!(result.reasons, vec!["Repetitive content detected"]);
    }

    #[test]
    fn short_text_dominated_by_one_word_is_repetitive() {
        let result = classifier().evaluate("amazing amazing deal amazing amazing offer amazing today", None);
        assert_eq!(result.reasons, vec!["Repetitive content detected"]);
        assert_eq!(result.score, 25);
    }

    #[test]
    fn single_occurrence_never_dominates() {
        let result = classifier().evaluate("hello", None);
        assert_eq!(result.reasons, vec!["Content too short"]);
        let result = classifier().evaluate("gardening tips", None);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn account_history_heuristics() {
        let meta = AccountMetadata::new(0.5, 0, 2, false);
        let result = classifier().evaluate("A thoughtful post about gardening in spring.", Some(&meta));
        assert_eq!(result.score, 15 + 10 + 60);
        assert_eq!(result.reasons, vec!["New account", "No previous posts", "2 previous reports"]);
        assert!(result.is_spam);
    }

    #[test]
    fn missing_metadata_fields_do_not_trigger() {
        let meta = AccountMetadata::default();
        let result = classifier().evaluate("A thoughtful post about gardening in spring.", Some(&meta));
        assert_eq!(result.score, 0);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn verified_discount_applies_after_phrases() {
        let c = classifier();
        let text = "This offer is risk free for everyone who reads it.";
        let plain = c.evaluate(text, Some(&AccountMetadata::new(30.0, 5, 0, false)));
        let verified = c.evaluate(text, Some(&AccountMetadata::new(30.0, 5, 0, true)));
        assert_eq!(plain.score, 25);
        assert_eq!(verified.score, 5);
        assert_eq!(verified.reasons, vec!["Verified account", "Contains spam phrase: risk free"]);
    }

    #[test]
    fn custom_threshold_changes_verdict_only() {
        let mut config = ScoringConfig::default();
        config.spam.spam_threshold = 20;
        let strict = SpamClassifier::new(config).unwrap();
        let result = strict.evaluate("hello", None);
        assert_eq!(result.score, 20);
        assert!(result.is_spam);
    }

    #[test]
    fn extra_vocabulary_is_scored() {
        let mut config = ScoringConfig::default();
        config.vocabulary.extra_keywords = vec!["airdrop".into()];
        config.vocabulary.extra_phrases = vec!["dm me for details".into()];
        let c = SpamClassifier::new(config).unwrap();
        let result = c.evaluate("Free AIRDROP happening now, DM me for details", None);
        assert_eq!(result.score, 45);
        assert_eq!(
            result.reasons,
            vec!["Contains spam keywords: airdrop", "Contains spam phrase: dm me for details"]
        );
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = ScoringConfig::default();
        config.spam.word_share = -0.1;
        assert!(SpamClassifier::new(config).is_err());
    }
}
