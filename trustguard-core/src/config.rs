//! Configuration management for `trustguard-core`.
//!
//! This module defines the weights, thresholds and extra vocabulary that drive
//! the spam classifier and the trust scorer. Configurations are YAML documents
//! deserialized with `serde_yml`; every section is optional and falls back to
//! the built-in defaults, which reproduce the production heuristics exactly.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use log::{debug, info};

use crate::errors::TrustGuardError;

/// Point weights and limits for the spam classifier.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SpamWeights {
    /// Points per distinct spam keyword found.
    pub keyword: u32,
    /// Points per match of a suspicious pattern.
    pub pattern_match: u32,
    /// Points per URL beyond the first.
    pub extra_url: u32,
    pub excessive_caps: u32,
    pub too_short: u32,
    pub too_long: u32,
    pub repetition: u32,
    pub new_account: u32,
    pub no_posts: u32,
    /// Points per moderation report previously filed against the author.
    pub per_report: u32,
    /// Subtracted from the final score of verified authors, floored at zero.
    pub verified_discount: u32,
    /// Points per spam phrase found.
    pub spam_phrase: u32,
    /// Scores at or above this value are spam.
    pub spam_threshold: u32,
    /// Content shorter than this many characters is "too short".
    pub min_length: usize,
    /// Content longer than this many characters is "unusually long".
    pub max_length: usize,
    /// Uppercase share above which content counts as shouting.
    pub caps_ratio: f64,
    /// The capitalization check only applies above this length.
    pub caps_min_length: usize,
    /// Share of all words a single word may take before content is repetitive.
    pub word_share: f64,
    /// The dominant word must occur at least this often for the word-share check.
    pub word_min_occurrences: usize,
    /// A 3-word phrase occurring more often than this is repetitive.
    pub phrase_repeats: usize,
    /// Accounts younger than this many days are new.
    pub new_account_days: f64,
}

impl Default for SpamWeights {
    fn default() -> Self {
        Self {
            keyword: 20,
            pattern_match: 15,
            extra_url: 10,
            excessive_caps: 30,
            too_short: 20,
            too_long: 10,
            repetition: 25,
            new_account: 15,
            no_posts: 10,
            per_report: 30,
            verified_discount: 20,
            spam_phrase: 25,
            spam_threshold: 60,
            min_length: 10,
            max_length: 5000,
            caps_ratio: 0.5,
            caps_min_length: 20,
            word_share: 0.3,
            word_min_occurrences: 2,
            phrase_repeats: 2,
            new_account_days: 1.0,
        }
    }
}

/// Caps and multipliers for the trust scorer.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TrustWeights {
    pub age_cap: f64,
    pub post_multiplier: f64,
    pub post_cap: f64,
    pub comment_cap: f64,
    pub reputation_divisor: f64,
    pub reputation_cap: f64,
    pub verified_bonus: f64,
    /// Subtracted per report, uncapped before the final clamp.
    pub report_penalty: f64,
}

impl Default for TrustWeights {
    fn default() -> Self {
        Self {
            age_cap: 30.0,
            post_multiplier: 2.0,
            post_cap: 20.0,
            comment_cap: 20.0,
            reputation_divisor: 10.0,
            reputation_cap: 30.0,
            verified_bonus: 20.0,
            report_penalty: 10.0,
        }
    }
}

/// Site-specific vocabulary appended to the built-in keyword and phrase tables.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct VocabularyConfig {
    pub extra_keywords: Vec<String>,
    pub extra_phrases: Vec<String>,
}

/// The top-level configuration for the scoring engine.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub spam: SpamWeights,
    pub trust: TrustWeights,
    pub vocabulary: VocabularyConfig,
}

impl ScoringConfig {
    /// Loads a scoring configuration from a YAML file and validates it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading scoring configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ScoringConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()
            .with_context(|| format!("Invalid scoring configuration in {}", path.display()))?;
        info!(
            "Loaded scoring configuration from {} ({} extra keywords, {} extra phrases).",
            path.display(),
            config.vocabulary.extra_keywords.len(),
            config.vocabulary.extra_phrases.len()
        );

        Ok(config)
    }

    /// Loads the defaults from the embedded configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default scoring configuration from embedded string...");
        let default_yaml = include_str!("../config/default_scoring.yaml");
        let config: ScoringConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default scoring configuration")?;
        Ok(config)
    }

    /// Renders the configuration as YAML.
    pub fn to_yaml(&self) -> Result<String, TrustGuardError> {
        serde_yml::to_string(self).map_err(|e| TrustGuardError::SerializationError(e.to_string()))
    }

    /// Checks that every weight and limit is usable.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        let spam = &self.spam;

        if spam.spam_threshold == 0 {
            errors.push(TrustGuardError::InvalidWeight("spam.spam_threshold".into(), "0".into()));
        }
        for (name, value) in [
            ("spam.caps_ratio", spam.caps_ratio),
            ("spam.word_share", spam.word_share),
        ] {
            if !(0.0..=1.0).contains(&value) {
                errors.push(TrustGuardError::InvalidWeight(name.into(), value.to_string()));
            }
        }
        if !spam.new_account_days.is_finite() || spam.new_account_days < 0.0 {
            errors.push(TrustGuardError::InvalidWeight(
                "spam.new_account_days".into(),
                spam.new_account_days.to_string(),
            ));
        }
        if spam.max_length < spam.min_length {
            errors.push(TrustGuardError::InvalidWeight(
                "spam.max_length".into(),
                format!("{} (below min_length {})", spam.max_length, spam.min_length),
            ));
        }

        let trust = &self.trust;
        for (name, value) in [
            ("trust.age_cap", trust.age_cap),
            ("trust.post_multiplier", trust.post_multiplier),
            ("trust.post_cap", trust.post_cap),
            ("trust.comment_cap", trust.comment_cap),
            ("trust.reputation_cap", trust.reputation_cap),
            ("trust.verified_bonus", trust.verified_bonus),
            ("trust.report_penalty", trust.report_penalty),
        ] {
            if !value.is_finite() || value < 0.0 {
                errors.push(TrustGuardError::InvalidWeight(name.into(), value.to_string()));
            }
        }
        if !trust.reputation_divisor.is_finite() || trust.reputation_divisor <= 0.0 {
            errors.push(TrustGuardError::InvalidWeight(
                "trust.reputation_divisor".into(),
                trust.reputation_divisor.to_string(),
            ));
        }

        let vocab = &self.vocabulary;
        if vocab.extra_keywords.iter().any(|k| k.trim().is_empty()) {
            errors.push(TrustGuardError::InvalidVocabularyEntry("extra_keywords".into()));
        }
        if vocab.extra_phrases.iter().any(|p| p.trim().is_empty()) {
            errors.push(TrustGuardError::InvalidVocabularyEntry("extra_phrases".into()));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            let message = errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("\n");
            Err(anyhow!("Scoring configuration validation failed:\n{}", message))
        }
    }
}

/// Merges a user configuration over a base one.
///
/// User weights replace the base weights wholesale. Vocabulary lists are
/// concatenated, base first, with case-insensitive duplicates dropped.
pub fn merge_config(base: ScoringConfig, user: Option<ScoringConfig>) -> ScoringConfig {
    let Some(user) = user else {
        debug!("merge_config called without user config; using base configuration.");
        return base;
    };

    debug!(
        "Merging user scoring configuration ({} extra keywords, {} extra phrases).",
        user.vocabulary.extra_keywords.len(),
        user.vocabulary.extra_phrases.len()
    );

    ScoringConfig {
        spam: user.spam,
        trust: user.trust,
        vocabulary: VocabularyConfig {
            extra_keywords: merge_lists(base.vocabulary.extra_keywords, user.vocabulary.extra_keywords),
            extra_phrases: merge_lists(base.vocabulary.extra_phrases, user.vocabulary.extra_phrases),
        },
    }
}

fn merge_lists(base: Vec<String>, user: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    base.into_iter()
        .chain(user)
        .filter(|entry| seen.insert(entry.trim().to_lowercase()))
        .collect()
}
