//! `classify` command: score content from a file or stdin.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Read};
use std::sync::Arc;
use is_terminal::IsTerminal;

use trustguard_core::{
    AccountMetadata, ContentClassifier, FanoutSink, JsonLinesSink, LogSink, ModerationAction,
    ScoringConfig, SpamCheckResult, SpamClassifier, SpamEventSink, DEFAULT_REVIEW_THRESHOLD,
};

use crate::cli::ClassifyCommand;
use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Reads the content to classify.
fn read_input(cmd: &ClassifyCommand) -> Result<String> {
    match &cmd.input_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read content from stdin")?;
            Ok(buffer)
        }
    }
}

/// Account metadata from the flags, or `None` when none were given.
fn metadata_from_flags(cmd: &ClassifyCommand) -> Option<AccountMetadata> {
    if cmd.no_metadata || !cmd.has_metadata_flags() {
        return None;
    }
    Some(AccountMetadata {
        account_age_days: cmd.account_age_days,
        previous_posts: cmd.previous_posts,
        previous_reports: cmd.previous_reports,
        verified: Some(cmd.verified),
    })
}

/// Runs the command and returns the classification.
pub fn run_classify(cmd: &ClassifyCommand, config: ScoringConfig, theme_map: &ThemeMap) -> Result<SpamCheckResult> {
    let content = read_input(cmd)?;
    debug!("Read {} bytes of content to classify.", content.len());

    let mut classifier = SpamClassifier::new(config).context("Failed to build spam classifier")?;
    if let Some(path) = &cmd.audit_log {
        let file_sink = JsonLinesSink::open(path)
            .with_context(|| format!("Failed to open audit log {}", path.display()))?;
        let sinks: Vec<Box<dyn SpamEventSink>> = vec![Box::new(LogSink), Box::new(file_sink)];
        classifier.set_event_sink(Arc::new(FanoutSink::new(sinks)));
        info_msg(format!("Recording spam events to {}", path.display()), theme_map);
    }
    if cmd.no_metadata && cmd.has_metadata_flags() {
        warn_msg("--no-metadata is set; ignoring the account flags.", theme_map);
    }

    let metadata = metadata_from_flags(cmd);
    let result = classifier.classify(&content, &cmd.author, metadata.as_ref());
    let action = ModerationAction::from_result(&result, DEFAULT_REVIEW_THRESHOLD);
    info!("Classified content: score {}, spam {}.", result.score, result.is_spam);

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    if cmd.json {
        output_format::print_classification_json(&mut writer, &result, action)?;
    } else {
        let supports_color = stdout.is_terminal();
        output_format::print_classification(&mut writer, &result, action, theme_map, supports_color)?;
    }

    Ok(result)
}
