// trustguard-text/src/measure/mod.rs

/// Length in Unicode scalar values.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Number of ASCII `A-Z` letters.
pub fn uppercase_count(text: &str) -> usize {
    text.bytes().filter(u8::is_ascii_uppercase).count()
}

/// Fraction of the text made of ASCII uppercase letters. Empty text yields 0.
pub fn uppercase_ratio(text: &str) -> f64 {
    let len = char_len(text);
    if len == 0 {
        return 0.0;
    }
    uppercase_count(text) as f64 / len as f64
}

/// Counts `http://` and `https://` occurrences, ignoring case.
pub fn count_url_schemes(text: &str) -> usize {
    // The two needles cannot overlap each other, so their counts simply add.
    let lower = text.to_ascii_lowercase();
    lower.matches("http://").count() + lower.matches("https://").count()
}
