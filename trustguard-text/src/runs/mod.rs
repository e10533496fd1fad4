// trustguard-text/src/runs/mod.rs
//! Repeated-character runs.
//!
//! A run is a maximal sequence of one repeated character. Line breaks never
//! take part in a run, mirroring how `.` behaves in a regular expression.

fn runs(text: &str) -> impl Iterator<Item = usize> + '_ {
    let mut chars = text.chars().peekable();
    core::iter::from_fn(move || {
        let c = chars.next()?;
        if c == '\n' || c == '\r' {
            return Some(0);
        }
        let mut len = 1;
        while chars.next_if_eq(&c).is_some() {
            len += 1;
        }
        Some(len)
    })
}

/// Counts runs of at least `min_len` identical characters.
pub fn count_char_runs(text: &str, min_len: usize) -> usize {
    runs(text).filter(|&len| len > 0 && len >= min_len).count()
}

/// Length of the longest run, 0 for empty text.
pub fn longest_char_run(text: &str) -> usize {
    runs(text).max().unwrap_or(0)
}
