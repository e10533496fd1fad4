//! Output formatting for the trustguard CLI.
//!
//! Status messages go to stderr with a themed prefix. Classification and
//! trust reports go to stdout, either as themed text or as JSON.

use std::io::Write;
use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde_json::json;

use trustguard_core::{ModerationAction, SpamCheckResult, TrustLevel};

use crate::ui::theme::{paint, ThemeEntry, ThemeMap};

fn print_message<W: Write>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> Result<()> {
    writeln!(writer, "{} {}", paint(prefix, entry, theme_map, enable_colors), msg)?;
    Ok(())
}

/// Prints an informational message.
pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, enable_colors: bool) -> Result<()> {
    print_message(writer, "[INFO]", msg, ThemeEntry::Header, theme_map, enable_colors)
}

/// Prints a warning message.
pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, enable_colors: bool) -> Result<()> {
    print_message(writer, "[WARN]", msg, ThemeEntry::Warn, theme_map, enable_colors)
}

/// Prints an error message.
pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, enable_colors: bool) -> Result<()> {
    print_message(writer, "[ERROR]", msg, ThemeEntry::Error, theme_map, enable_colors)
}

fn action_entry(action: ModerationAction) -> ThemeEntry {
    match action {
        ModerationAction::Allow => ThemeEntry::Success,
        ModerationAction::Review => ThemeEntry::Warn,
        ModerationAction::Reject => ThemeEntry::Error,
    }
}

fn action_label(action: ModerationAction) -> &'static str {
    match action {
        ModerationAction::Allow => "allow",
        ModerationAction::Review => "review",
        ModerationAction::Reject => "reject",
    }
}

/// Renders the contributing reasons as a numbered table.
pub fn reasons_table(reasons: &[String]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Reason"]);
    for (i, reason) in reasons.iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), reason.clone()]);
    }
    table
}

/// Prints a human-readable classification report.
pub fn print_classification<W: Write>(
    writer: &mut W,
    result: &SpamCheckResult,
    action: ModerationAction,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> Result<()> {
    let (verdict, verdict_entry) = if result.is_spam {
        ("SPAM", ThemeEntry::Error)
    } else {
        ("OK", ThemeEntry::Success)
    };
    writeln!(
        writer,
        "{} {}",
        paint("Verdict:", ThemeEntry::Header, theme_map, enable_colors),
        paint(verdict, verdict_entry, theme_map, enable_colors)
    )?;
    writeln!(
        writer,
        "Score: {}  Confidence: {:.2}  Action: {}",
        paint(&result.score.to_string(), ThemeEntry::Score, theme_map, enable_colors),
        result.confidence,
        paint(action_label(action), action_entry(action), theme_map, enable_colors)
    )?;

    if result.reasons.is_empty() {
        writeln!(writer, "No spam signals found.")?;
    } else {
        writeln!(writer, "{}", paint("Reasons:", ThemeEntry::Header, theme_map, enable_colors))?;
        writeln!(writer, "{}", reasons_table(&result.reasons))?;
    }
    Ok(())
}

/// Prints a classification as pretty JSON, with the moderation action alongside.
pub fn print_classification_json<W: Write>(
    writer: &mut W,
    result: &SpamCheckResult,
    action: ModerationAction,
) -> Result<()> {
    let mut value = serde_json::to_value(result)?;
    value["action"] = serde_json::to_value(action)?;
    writeln!(writer, "{}", serde_json::to_string_pretty(&value)?)?;
    Ok(())
}

/// Prints a trust score and its band.
pub fn print_trust<W: Write>(
    writer: &mut W,
    score: f64,
    level: TrustLevel,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> Result<()> {
    let entry = match level {
        TrustLevel::Untrusted => ThemeEntry::Error,
        TrustLevel::Low => ThemeEntry::Warn,
        TrustLevel::Established | TrustLevel::Trusted => ThemeEntry::Success,
    };
    writeln!(
        writer,
        "{} {} ({})",
        paint("Trust score:", ThemeEntry::Header, theme_map, enable_colors),
        paint(&score.to_string(), ThemeEntry::Score, theme_map, enable_colors),
        paint(level.as_str(), entry, theme_map, enable_colors)
    )?;
    Ok(())
}

pub fn print_trust_json<W: Write>(writer: &mut W, score: f64, level: TrustLevel) -> Result<()> {
    let value = json!({ "trustScore": score, "level": level });
    writeln!(writer, "{}", serde_json::to_string_pretty(&value)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn plain_classification_lists_reasons() -> Result<()> {
        let theme = ThemeStyle::default_theme_map();
        let result = SpamCheckResult::from_score(75, vec!["Excessive capitalization".into()], 60);
        let mut out = Vec::new();
        print_classification(&mut out, &result, ModerationAction::Reject, &theme, false)?;
        let text = String::from_utf8(out)?;
        assert!(text.contains("Verdict: SPAM"));
        assert!(text.contains("Score: 75"));
        assert!(text.contains("Action: reject"));
        assert!(text.contains("Excessive capitalization"));
        Ok(())
    }

    #[test]
    fn classification_json_carries_action() -> Result<()> {
        let result = SpamCheckResult::from_score(35, Vec::new(), 60);
        let mut out = Vec::new();
        print_classification_json(&mut out, &result, ModerationAction::Review)?;
        let value: serde_json::Value = serde_json::from_slice(&out)?;
        assert_eq!(value["isSpam"], false);
        assert_eq!(value["score"], 35);
        assert_eq!(value["action"], "review");
        Ok(())
    }

    #[test]
    fn trust_json_shape() -> Result<()> {
        let mut out = Vec::new();
        print_trust_json(&mut out, 15.5, TrustLevel::Untrusted)?;
        let value: serde_json::Value = serde_json::from_slice(&out)?;
        assert_eq!(value["trustScore"], 15.5);
        assert_eq!(value["level"], "untrusted");
        Ok(())
    }

    #[test]
    fn info_and_warn_prefixes() -> Result<()> {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        print_info_message(&mut out, "writing", &theme, false)?;
        print_warn_message(&mut out, "careful", &theme, false)?;
        assert_eq!(String::from_utf8(out)?, "[INFO] writing\n[WARN] careful\n");
        Ok(())
    }

    #[test]
    fn error_prefix_is_plain_without_colors() -> Result<()> {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        print_error_message(&mut out, "boom", &theme, false)?;
        assert_eq!(String::from_utf8(out)?, "[ERROR] boom\n");
        Ok(())
    }
}
