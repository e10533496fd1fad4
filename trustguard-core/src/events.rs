// trustguard-core/src/events.rs
//! Spam-detected events and the sinks that record them.
//!
//! Recording an event is a side effect of classification. Sinks may fail; the
//! classifier swallows those failures so an observability outage never blocks
//! a content submission. Raw content is never recorded, only its SHA-256.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use uuid::Uuid;

use crate::model::SpamCheckResult;

/// How many reasons an event carries.
pub const EVENT_REASON_LIMIT: usize = 3;

/// A structured record of one positive spam classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpamEvent {
    pub event_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub author_id: String,
    pub score: u32,
    pub confidence: f64,
    pub top_reasons: Vec<String>,
    pub content_sha256: String,
}

impl SpamEvent {
    pub fn new(author_id: &str, content: &str, result: &SpamCheckResult) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            author_id: author_id.to_string(),
            score: result.score,
            confidence: result.confidence,
            top_reasons: result.reasons.iter().take(EVENT_REASON_LIMIT).cloned().collect(),
            content_sha256: content_fingerprint(content),
        }
    }
}

/// Hex-encoded SHA-256 of the content.
pub fn content_fingerprint(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// Destination for spam-detected events.
pub trait SpamEventSink: Send + Sync {
    fn record(&self, event: &SpamEvent) -> Result<()>;
}

/// Emits each event as a warn-level log line.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SpamEventSink for LogSink {
    fn record(&self, event: &SpamEvent) -> Result<()> {
        warn!(
            target: "trustguard_core::spam",
            "Spam detected author={} score={} confidence={:.2} reasons={}",
            event.author_id,
            event.score,
            event.confidence,
            event.top_reasons.join("; ")
        );
        Ok(())
    }
}

/// Appends each event as one JSON line to a file.
#[derive(Debug)]
pub struct JsonLinesSink {
    file: Mutex<File>,
}

impl JsonLinesSink {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open spam event log {}", path.display()))?;
        Ok(Self { file: Mutex::new(file) })
    }
}

impl SpamEventSink for JsonLinesSink {
    fn record(&self, event: &SpamEvent) -> Result<()> {
        let line = serde_json::to_string(event).context("Failed to serialize spam event")?;
        let mut file = self
            .file
            .lock()
            .map_err(|_| anyhow::anyhow!("spam event log lock poisoned"))?;
        writeln!(file, "{}", line).context("Failed to append spam event")?;
        Ok(())
    }
}

/// Forwards every event to each inner sink, reporting the first failure.
pub struct FanoutSink {
    sinks: Vec<Box<dyn SpamEventSink>>,
}

impl FanoutSink {
    pub fn new(sinks: Vec<Box<dyn SpamEventSink>>) -> Self {
        Self { sinks }
    }
}

impl SpamEventSink for FanoutSink {
    fn record(&self, event: &SpamEvent) -> Result<()> {
        let mut first_error = None;
        for sink in &self.sinks {
            if let Err(e) = sink.record(event) {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::NamedTempFile;

    fn sample_result() -> SpamCheckResult {
        SpamCheckResult::from_score(
            95,
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            60,
        )
    }

    #[test]
    fn event_keeps_three_reasons_and_hides_content() {
        let event = SpamEvent::new("user-1", "buy cheap pills", &sample_result());
        assert_eq!(event.top_reasons, vec!["a", "b", "c"]);
        assert_eq!(event.content_sha256.len(), 64);
        assert_ne!(event.content_sha256, "buy cheap pills");
    }

    #[test]
    fn json_lines_sink_appends() -> Result<()> {
        let file = NamedTempFile::new()?;
        let sink = JsonLinesSink::open(file.path())?;
        let event = SpamEvent::new("user-2", "content", &sample_result());
        sink.record(&event)?;
        sink.record(&event)?;

        let mut text = String::new();
        File::open(file.path())?.read_to_string(&mut text)?;
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: SpamEvent = serde_json::from_str(lines[0])?;
        assert_eq!(parsed.author_id, "user-2");
        Ok(())
    }

    struct Failing;

    impl SpamEventSink for Failing {
        fn record(&self, _event: &SpamEvent) -> Result<()> {
            anyhow::bail!("sink offline")
        }
    }

    #[test]
    fn fanout_reports_failure_but_still_delivers() -> Result<()> {
        let file = NamedTempFile::new()?;
        let sink = FanoutSink::new(vec![Box::new(Failing), Box::new(JsonLinesSink::open(file.path())?)]);
        let err = sink.record(&SpamEvent::new("u", "c", &sample_result())).unwrap_err();
        assert!(err.to_string().contains("sink offline"));
        assert_eq!(std::fs::read_to_string(file.path())?.lines().count(), 1);
        Ok(())
    }
}
