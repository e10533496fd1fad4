//! Output theming for the trustguard CLI.
//!
//! Each logical part of the output (headers, verdicts, scores) maps to a
//! 16-color ANSI foreground. Themes load from YAML files; entries a file omits
//! keep their default color.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use anyhow::{Context, Result};
use owo_colors::{AnsiColors, OwoColorize};

pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// Parts of the CLI output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Section titles.
    Header,
    /// Verdict for content that passed or a healthy trust score.
    Success,
    /// Verdict for content queued for review.
    Warn,
    /// Verdict for spam and error messages.
    Error,
    /// Numeric scores.
    Score,
}

const ALL_ENTRIES: [ThemeEntry; 5] = [
    ThemeEntry::Header,
    ThemeEntry::Success,
    ThemeEntry::Warn,
    ThemeEntry::Error,
    ThemeEntry::Score,
];

/// Color names accepted in theme files, with their ANSI equivalents.
const NAMED_COLORS: [(&str, AnsiColors); 16] = [
    ("black", AnsiColors::Black),
    ("red", AnsiColors::Red),
    ("green", AnsiColors::Green),
    ("yellow", AnsiColors::Yellow),
    ("blue", AnsiColors::Blue),
    ("magenta", AnsiColors::Magenta),
    ("cyan", AnsiColors::Cyan),
    ("white", AnsiColors::White),
    ("brightblack", AnsiColors::BrightBlack),
    ("brightred", AnsiColors::BrightRed),
    ("brightgreen", AnsiColors::BrightGreen),
    ("brightyellow", AnsiColors::BrightYellow),
    ("brightblue", AnsiColors::BrightBlue),
    ("brightmagenta", AnsiColors::BrightMagenta),
    ("brightcyan", AnsiColors::BrightCyan),
    ("brightwhite", AnsiColors::BrightWhite),
];

fn lookup_color(name: &str) -> Option<AnsiColors> {
    let name = name.to_lowercase();
    NAMED_COLORS.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
}

/// A named 16-color ANSI foreground, stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct ThemeColor(String);

#[derive(Debug, Clone)]
pub struct ParseThemeColorError(String);

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: Vec<&str> = NAMED_COLORS.iter().map(|(n, _)| *n).collect();
        write!(f, "unknown theme color '{}'; expected one of: {}", self.0, names.join(", "))
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match lookup_color(s) {
            Some(_) => Ok(ThemeColor(s.to_lowercase())),
            None => Err(ParseThemeColorError(s.to_string())),
        }
    }
}

impl TryFrom<String> for ThemeColor {
    type Error = ParseThemeColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ThemeColor> for String {
    fn from(color: ThemeColor) -> Self {
        color.0
    }
}

impl ThemeColor {
    fn named(name: &str) -> Self {
        ThemeColor(name.to_string())
    }

    pub fn to_ansi_color(&self) -> AnsiColors {
        lookup_color(&self.0).unwrap_or(AnsiColors::White)
    }
}

/// Style for one `ThemeEntry`. A missing `fg` leaves the text unstyled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    pub fg: Option<ThemeColor>,
}

/// The theme at `theme_path`, or the built-in theme.
pub fn build_theme_map(theme_path: Option<&PathBuf>) -> Result<ThemeMap> {
    match theme_path {
        Some(path) => ThemeStyle::load_from_file(path),
        None => Ok(ThemeStyle::default_theme_map()),
    }
}

impl ThemeStyle {
    /// Loads a theme file and fills omitted entries from the default theme.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let mut custom: ThemeMap = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        for (entry, style) in Self::default_theme_map() {
            custom.entry(entry).or_insert(style);
        }
        Ok(custom)
    }

    /// Returns the default theme.
    pub fn default_theme_map() -> ThemeMap {
        let mut theme = HashMap::new();
        theme.insert(ThemeEntry::Header, ThemeStyle { fg: Some(ThemeColor::named("cyan")) });
        theme.insert(ThemeEntry::Success, ThemeStyle { fg: Some(ThemeColor::named("green")) });
        theme.insert(ThemeEntry::Warn, ThemeStyle { fg: Some(ThemeColor::named("yellow")) });
        theme.insert(ThemeEntry::Error, ThemeStyle { fg: Some(ThemeColor::named("brightred")) });
        for entry in ALL_ENTRIES {
            theme.entry(entry).or_insert_with(|| ThemeStyle { fg: Some(ThemeColor::named("white")) });
        }
        theme
    }
}

/// Applies the entry's color to `text` when `enable_colors` is set.
pub fn paint(text: &str, entry: ThemeEntry, theme_map: &ThemeMap, enable_colors: bool) -> String {
    let color = theme_map.get(&entry).and_then(|style| style.fg.as_ref());
    match color {
        Some(color) if enable_colors => text.color(color.to_ansi_color()).to_string(),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_named_colors() {
        assert!("red".parse::<ThemeColor>().is_ok());
        assert!("BrightGreen".parse::<ThemeColor>().is_ok());
        assert!("unknown".parse::<ThemeColor>().is_err());
    }

    #[test]
    fn default_theme_covers_every_entry() {
        let theme = ThemeStyle::default_theme_map();
        for entry in ALL_ENTRIES {
            assert!(theme.contains_key(&entry), "{:?} missing", entry);
        }
    }

    #[test]
    fn paint_without_colors_is_plain() {
        let theme = ThemeStyle::default_theme_map();
        assert_eq!(paint("SPAM", ThemeEntry::Error, &theme, false), "SPAM");
        assert_ne!(paint("SPAM", ThemeEntry::Error, &theme, true), "SPAM");
    }

    #[test]
    fn theme_file_overrides_and_keeps_defaults() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"error:\n  fg: magenta\n")?;
        let theme = ThemeStyle::load_from_file(file.path())?;
        assert_eq!(theme[&ThemeEntry::Error].fg, Some(ThemeColor::named("magenta")));
        assert_eq!(theme[&ThemeEntry::Success].fg, Some(ThemeColor::named("green")));
        Ok(())
    }

    #[test]
    fn unknown_color_in_theme_file_is_rejected() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"header:\n  fg: chartreuse\n")?;
        assert!(ThemeStyle::load_from_file(file.path()).is_err());
        Ok(())
    }
}
