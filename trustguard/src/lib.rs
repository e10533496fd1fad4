// trustguard/src/lib.rs
//! # trustguard CLI
//!
//! Command-line front end for `trustguard-core`: classify content, score
//! accounts and inspect the effective scoring configuration.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;
