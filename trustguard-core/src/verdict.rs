// trustguard-core/src/verdict.rs
//! Maps a classification onto the three outcomes of a submission flow.

use serde::{Deserialize, Serialize};

use crate::model::SpamCheckResult;

/// Scores at or above this, but below the spam threshold, go to review.
pub const DEFAULT_REVIEW_THRESHOLD: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationAction {
    Allow,
    Review,
    Reject,
}

impl ModerationAction {
    pub fn from_result(result: &SpamCheckResult, review_threshold: u32) -> Self {
        if result.is_spam {
            ModerationAction::Reject
        } else if result.score >= review_threshold {
            ModerationAction::Review
        } else {
            ModerationAction::Allow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands() {
        let allow = SpamCheckResult::from_score(29, Vec::new(), 60);
        let review = SpamCheckResult::from_score(30, Vec::new(), 60);
        let reject = SpamCheckResult::from_score(60, Vec::new(), 60);
        assert_eq!(ModerationAction::from_result(&allow, DEFAULT_REVIEW_THRESHOLD), ModerationAction::Allow);
        assert_eq!(ModerationAction::from_result(&review, DEFAULT_REVIEW_THRESHOLD), ModerationAction::Review);
        assert_eq!(ModerationAction::from_result(&reject, DEFAULT_REVIEW_THRESHOLD), ModerationAction::Reject);
    }
}
