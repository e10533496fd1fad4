//! compiler.rs - Builds and caches keyword automata for a vocabulary.
//!
//! The built-in tables are always present; configured extras are appended.
//! Compiled vocabularies are shared through a global cache keyed by a hash of
//! the `VocabularyConfig`, so constructing many classifiers with the same
//! configuration builds the automata once.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use lazy_static::lazy_static;
use log::debug;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, PoisonError, RwLock};
use trustguard_text::KeywordScanner;

use crate::config::VocabularyConfig;
use crate::errors::TrustGuardError;
use crate::patterns::tables::{SPAM_KEYWORDS, SPAM_PHRASES};

/// Keyword and phrase scanners ready for classification.
#[derive(Debug)]
pub struct CompiledVocabulary {
    pub keywords: KeywordScanner,
    pub phrases: KeywordScanner,
}

lazy_static! {
    static ref COMPILED_VOCABULARY_CACHE: RwLock<HashMap<u64, Arc<CompiledVocabulary>>> =
        RwLock::new(HashMap::new());
}

fn hash_vocabulary(vocabulary: &VocabularyConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    vocabulary.hash(&mut hasher);
    hasher.finish()
}

/// Compiles the built-in tables plus `vocabulary` extras.
pub fn compile_vocabulary(vocabulary: &VocabularyConfig) -> Result<CompiledVocabulary, TrustGuardError> {
    debug!(
        "Compiling vocabulary: {} built-in + {} extra keywords, {} built-in + {} extra phrases.",
        SPAM_KEYWORDS.len(),
        vocabulary.extra_keywords.len(),
        SPAM_PHRASES.len(),
        vocabulary.extra_phrases.len()
    );

    let keywords = KeywordScanner::new(
        SPAM_KEYWORDS.iter().copied().chain(vocabulary.extra_keywords.iter().map(String::as_str)),
    )?;
    let phrases = KeywordScanner::new(
        SPAM_PHRASES.iter().copied().chain(vocabulary.extra_phrases.iter().map(String::as_str)),
    )?;

    Ok(CompiledVocabulary { keywords, phrases })
}

/// Returns a cached `CompiledVocabulary`, compiling it on first use.
pub fn get_or_compile_vocabulary(vocabulary: &VocabularyConfig) -> Result<Arc<CompiledVocabulary>> {
    let cache_key = hash_vocabulary(vocabulary);

    {
        let cache = COMPILED_VOCABULARY_CACHE.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(compiled) = cache.get(&cache_key) {
            debug!("Serving compiled vocabulary from cache for key: {}", cache_key);
            return Ok(Arc::clone(compiled));
        }
    }

    let compiled = Arc::new(compile_vocabulary(vocabulary)?);
    COMPILED_VOCABULARY_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(cache_key, Arc::clone(&compiled));

    debug!("Compiled and cached vocabulary for key: {}", cache_key);
    Ok(compiled)
}
