//! Fixed spam vocabulary and suspicious-content patterns, plus the compiler
//! that turns them into reusable keyword automata.
//!
//! License: MIT OR APACHE 2.0

pub mod compiler;
pub mod tables;

pub use compiler::{compile_vocabulary, get_or_compile_vocabulary, CompiledVocabulary};
pub use tables::{SuspiciousPattern, SPAM_KEYWORDS, SPAM_PHRASES, SUSPICIOUS_PATTERNS};
