// trustguard-text/src/lib.rs
//! Low-level text measurements shared by the trustguard scoring engine.
//!
//! Everything in this crate is allocation-aware but I/O free, so it builds
//! under `no_std` with `alloc`.
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod keywords;
pub mod measure;
pub mod runs;
pub mod repetition;

pub use keywords::{KeywordError, KeywordScanner};
pub use measure::{char_len, count_url_schemes, uppercase_count, uppercase_ratio};
pub use repetition::{dominant_word, max_trigram_repeats, split_words, WordDominance};
pub use runs::{count_char_runs, longest_char_run};
