// trustguard-core/src/engine.rs
//! Defines the core `ContentClassifier` trait.
//!
//! The trait decouples callers (server actions, the CLI) from the concrete
//! heuristic engine so alternative classifiers can be swapped in.
//!
//! License: MIT OR APACHE 2.0

use std::sync::Arc;

use crate::config::ScoringConfig;
use crate::events::SpamEventSink;
use crate::model::{AccountMetadata, SpamCheckResult};

/// A synchronous, side-effect-light content classifier.
pub trait ContentClassifier: Send + Sync {
    /// Scores `content` written by `author_id`.
    ///
    /// Must be total: any string, including the empty string, yields a
    /// well-formed result. `metadata` is `None` when the caller has no account
    /// history, which skips the account heuristics entirely.
    fn classify(
        &self,
        content: &str,
        author_id: &str,
        metadata: Option<&AccountMetadata>,
    ) -> SpamCheckResult;

    /// Returns the configuration the classifier was built with.
    fn config(&self) -> &ScoringConfig;

    /// Replaces the destination of spam-detected events.
    fn set_event_sink(&mut self, sink: Arc<dyn SpamEventSink>);
}
