//! errors.rs - Custom error types for the trustguard-core library.
//!
//! Only configuration loading and engine construction can fail. Classifying
//! content and scoring accounts are total operations and never return these.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types produced by `trustguard-core`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TrustGuardError {
    #[error("Weight '{0}' has invalid value {1}")]
    InvalidWeight(String, String),

    #[error("Vocabulary list '{0}' contains an empty entry")]
    InvalidVocabularyEntry(String),

    #[error("Failed to build keyword automaton: {0}")]
    KeywordAutomaton(String),

    #[error("Failed to serialize configuration: {0}")]
    SerializationError(String),
}

impl From<trustguard_text::KeywordError> for TrustGuardError {
    fn from(e: trustguard_text::KeywordError) -> Self {
        TrustGuardError::KeywordAutomaton(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trustguard_text::KeywordError;

    #[test]
    fn keyword_errors_convert_to_automaton_errors() {
        let err: TrustGuardError = KeywordError::Build("too many states".into()).into();
        assert!(matches!(err, TrustGuardError::KeywordAutomaton(_)));
        assert!(err.to_string().starts_with("Failed to build keyword automaton"));
    }

    #[test]
    fn invalid_weight_names_the_field() {
        let err = TrustGuardError::InvalidWeight("trust.age_cap".into(), "-1".into());
        assert_eq!(err.to_string(), "Weight 'trust.age_cap' has invalid value -1");
    }
}
