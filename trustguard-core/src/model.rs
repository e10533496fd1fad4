// trustguard-core/src/model.rs
//! Call parameters and results of the spam classifier.
//!
//! Field names serialize in camelCase so the JSON shapes match what the web
//! layer already sends and expects.

use serde::{Deserialize, Serialize};

/// Account history supplied by the caller alongside the content.
///
/// Every field is optional. A missing field never triggers its heuristic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountMetadata {
    pub account_age_days: Option<f64>,
    pub previous_posts: Option<u32>,
    pub previous_reports: Option<u32>,
    pub verified: Option<bool>,
}

impl AccountMetadata {
    /// Metadata with every field present.
    pub fn new(account_age_days: f64, previous_posts: u32, previous_reports: u32, verified: bool) -> Self {
        Self {
            account_age_days: Some(account_age_days),
            previous_posts: Some(previous_posts),
            previous_reports: Some(previous_reports),
            verified: Some(verified),
        }
    }

    pub fn is_verified(&self) -> bool {
        self.verified.unwrap_or(false)
    }
}

/// The outcome of classifying one piece of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpamCheckResult {
    /// `score >= spam_threshold`.
    pub is_spam: bool,
    /// `min(100, score) / 100`.
    pub confidence: f64,
    /// Contributing factors in evaluation order.
    pub reasons: Vec<String>,
    /// Accumulated risk, unbounded above.
    pub score: u32,
}

impl SpamCheckResult {
    /// Builds a result from a final score, deriving `confidence` and `is_spam`.
    pub fn from_score(score: u32, reasons: Vec<String>, spam_threshold: u32) -> Self {
        Self {
            is_spam: score >= spam_threshold,
            confidence: f64::from(score.min(100)) / 100.0,
            reasons,
            score,
        }
    }
}
