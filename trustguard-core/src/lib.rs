// trustguard-core/src/lib.rs
//! # trustguard Core Library
//!
//! `trustguard-core` is the content trust scoring engine that runs before
//! user-generated content is persisted. It estimates how risky a post or
//! comment is, and how much standing its author has, from plain data the caller
//! has already fetched. It performs no I/O of its own apart from optional
//! spam-event sinks.
//!
//! ## Modules
//!
//! * `config`: Weights, thresholds and extra vocabulary, loaded from YAML.
//! * `patterns`: The built-in keyword/phrase tables, suspicious patterns and the vocabulary compiler.
//! * `engine`: The `ContentClassifier` trait.
//! * `engines`: Concrete classifiers, currently the heuristic `SpamClassifier`.
//! * `model`: `AccountMetadata` and `SpamCheckResult`.
//! * `events`: Spam-detected events and the sinks that record them.
//! * `trust`: The account trust scorer.
//! * `verdict`: Maps a classification to allow / review / reject.
//! * `headless`: One-shot classification with the default configuration.
//!
//! ## Usage Example
//!
//! ```rust
//! use trustguard_core::{classify_spam, calculate_trust_score, AccountMetadata, TrustScoreInput};
//!
//! let meta = AccountMetadata::new(0.2, 0, 0, false);
//! let result = classify_spam("Cheap viagra, click here!!", "user-42", Some(&meta));
//! assert!(result.score > 0);
//!
//! let trust = calculate_trust_score(&TrustScoreInput {
//!     account_age_days: 400.0,
//!     post_count: 12.0,
//!     comment_count: 40.0,
//!     reputation_points: 150.0,
//!     report_count: 0.0,
//!     verified: true,
//! });
//! assert_eq!(trust, 100.0);
//! ```
//!
//! ## Design Principles
//!
//! * **Total:** classification and trust scoring never fail and never panic on input.
//! * **Pure results:** identical inputs always produce identical results; event
//!   sinks are a side channel whose failures are swallowed.
//! * **Tunable:** every weight and threshold lives in `ScoringConfig`, defaulting
//!   to the production values.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod events;
pub mod headless;
pub mod model;
pub mod patterns;
pub mod trust;
pub mod verdict;

/// Re-exports the configuration types and helpers.
pub use config::{merge_config, ScoringConfig, SpamWeights, TrustWeights, VocabularyConfig};

/// Re-exports the custom error type for clear error reporting.
pub use errors::TrustGuardError;

/// Re-exports the classifier trait and its heuristic implementation.
pub use engine::ContentClassifier;
pub use engines::spam::SpamClassifier;

pub use model::{AccountMetadata, SpamCheckResult};

/// Re-exports event types for callers that want their own sinks.
pub use events::{content_fingerprint, FanoutSink, JsonLinesSink, LogSink, SpamEvent, SpamEventSink};

pub use trust::{calculate_trust_score, TrustLevel, TrustScoreInput, TrustScorer};

pub use verdict::{ModerationAction, DEFAULT_REVIEW_THRESHOLD};

pub use headless::classify_spam;

pub use patterns::{SPAM_KEYWORDS, SPAM_PHRASES};
