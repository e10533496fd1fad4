// trustguard-core/src/trust.rs
//! Account trust scoring.
//!
//! Each positive factor is capped on its own before summing; reports subtract
//! without a cap. Only the final sum is clamped into [0, 100]. Inputs are
//! taken as given: negative or fractional values are not corrected here.

use serde::{Deserialize, Serialize};

use crate::config::TrustWeights;

pub const MIN_TRUST_SCORE: f64 = 0.0;
pub const MAX_TRUST_SCORE: f64 = 100.0;

/// Aggregate account statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustScoreInput {
    pub account_age_days: f64,
    pub post_count: f64,
    pub comment_count: f64,
    pub reputation_points: f64,
    pub report_count: f64,
    pub verified: bool,
}

impl TrustScoreInput {
    fn has_nan(&self) -> bool {
        [
            self.account_age_days,
            self.post_count,
            self.comment_count,
            self.reputation_points,
            self.report_count,
        ]
        .iter()
        .any(|v| v.is_nan())
    }
}

/// Computes trust scores with a fixed set of weights.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrustScorer {
    weights: TrustWeights,
}

impl TrustScorer {
    pub fn new(weights: TrustWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &TrustWeights {
        &self.weights
    }

    /// Scores an account, always returning a value in [0, 100].
    ///
    /// A NaN in any statistic scores 0. `f64::min` would otherwise replace it
    /// with the cap and give the account full credit for that term.
    pub fn score(&self, input: &TrustScoreInput) -> f64 {
        if input.has_nan() {
            return MIN_TRUST_SCORE;
        }
        let w = &self.weights;
        let verified_bonus = if input.verified { w.verified_bonus } else { 0.0 };

        let sum = input.account_age_days.min(w.age_cap)
            + (input.post_count * w.post_multiplier).min(w.post_cap)
            + input.comment_count.min(w.comment_cap)
            + (input.reputation_points / w.reputation_divisor).min(w.reputation_cap)
            + verified_bonus
            - input.report_count * w.report_penalty;

        if sum.is_nan() {
            return MIN_TRUST_SCORE;
        }
        sum.clamp(MIN_TRUST_SCORE, MAX_TRUST_SCORE)
    }
}

/// Scores an account with the default weights.
pub fn calculate_trust_score(input: &TrustScoreInput) -> f64 {
    TrustScorer::default().score(input)
}

/// Coarse standing bands used for display and moderation queues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustLevel {
    Untrusted,
    Low,
    Established,
    Trusted,
}

impl TrustLevel {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 80.0 => TrustLevel::Trusted,
            s if s >= 50.0 => TrustLevel::Established,
            s if s >= 20.0 => TrustLevel::Low,
            _ => TrustLevel::Untrusted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrustLevel::Untrusted => "untrusted",
            TrustLevel::Low => "low",
            TrustLevel::Established => "established",
            TrustLevel::Trusted => "trusted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(age: f64, posts: f64, comments: f64, rep: f64, reports: f64, verified: bool) -> TrustScoreInput {
        TrustScoreInput {
            account_age_days: age,
            post_count: posts,
            comment_count: comments,
            reputation_points: rep,
            report_count: reports,
            verified,
        }
    }

    #[test]
    fn blank_account_scores_zero() {
        assert_eq!(calculate_trust_score(&input(0.0, 0.0, 0.0, 0.0, 0.0, false)), 0.0);
    }

    #[test]
    fn saturated_account_is_clamped_to_hundred() {
        assert_eq!(calculate_trust_score(&input(9999.0, 9999.0, 9999.0, 9999.0, 0.0, true)), 100.0);
    }

    #[test]
    fn heavy_reports_clamp_to_zero() {
        assert_eq!(calculate_trust_score(&input(30.0, 10.0, 20.0, 300.0, 50.0, true)), 0.0);
    }

    #[test]
    fn terms_are_capped_independently() {
        // 10 + min(20, 6) + 5 + min(30, 4.5) - 10
        assert_eq!(calculate_trust_score(&input(10.0, 3.0, 5.0, 45.0, 1.0, false)), 15.5);
    }

    #[test]
    fn nan_inputs_score_zero() {
        let nan = f64::NAN;
        let cases = [
            input(nan, 10.0, 10.0, 100.0, 0.0, true),
            input(30.0, nan, 10.0, 100.0, 0.0, true),
            input(30.0, 10.0, nan, 100.0, 0.0, true),
            input(30.0, 10.0, 10.0, nan, 0.0, true),
            input(30.0, 10.0, 10.0, 100.0, nan, true),
            input(nan, 0.0, 0.0, nan, 0.0, false),
        ];
        for case in cases {
            assert_eq!(calculate_trust_score(&case), 0.0, "{:?}", case);
        }
    }

    #[test]
    fn levels_follow_bands() {
        assert_eq!(TrustLevel::from_score(0.0), TrustLevel::Untrusted);
        assert_eq!(TrustLevel::from_score(20.0), TrustLevel::Low);
        assert_eq!(TrustLevel::from_score(79.9), TrustLevel::Established);
        assert_eq!(TrustLevel::from_score(100.0), TrustLevel::Trusted);
    }
}
