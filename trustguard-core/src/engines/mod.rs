// trustguard-core/src/engines/mod.rs
//! Concrete `ContentClassifier` implementations.

pub mod spam;
