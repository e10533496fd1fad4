// trustguard-core/src/headless.rs
//! Convenience wrappers for one-shot classification with the built-in
//! configuration, for callers that do not manage a classifier themselves.

use lazy_static::lazy_static;

use crate::engine::ContentClassifier;
use crate::engines::spam::SpamClassifier;
use crate::model::{AccountMetadata, SpamCheckResult};

lazy_static! {
    static ref DEFAULT_CLASSIFIER: SpamClassifier =
        SpamClassifier::with_defaults().expect("built-in scoring configuration must be valid");
}

/// Classifies `content` with the default weights, logging detected spam.
pub fn classify_spam(
    content: &str,
    author_id: &str,
    metadata: Option<&AccountMetadata>,
) -> SpamCheckResult {
    DEFAULT_CLASSIFIER.classify(content, author_id, metadata)
}
