// trustguard-core/tests/trust_score_tests.rs
use trustguard_core::{calculate_trust_score, TrustLevel, TrustScoreInput, TrustScorer, TrustWeights};

fn account(age: f64, posts: f64, comments: f64, rep: f64, reports: f64, verified: bool) -> TrustScoreInput {
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
fn empty_account_is_zero() {
    assert_eq!(calculate_trust_score(&account(0.0, 0.0, 0.0, 0.0, 0.0, false)), 0.0);
}

#[test]
fn saturated_verified_account_is_exactly_hundred() {
    assert_eq!(calculate_trust_score(&account(9999.0, 9999.0, 9999.0, 9999.0, 0.0, true)), 100.0);
}

#[test]
fn negative_sum_clamps_to_zero() {
    let score = calculate_trust_score(&account(5.0, 1.0, 1.0, 10.0, 3.0, false));
    assert_eq!(score, 0.0);
}

#[test]
fn scores_stay_in_range_for_extreme_inputs() {
    let extremes = [f64::MAX, f64::MIN, -1.0, 0.5, 1e12, f64::INFINITY, f64::NEG_INFINITY];
    for &value in &extremes {
        for verified in [true, false] {
            let score = calculate_trust_score(&account(value, value, value, value, value, verified));
            assert!((0.0..=100.0).contains(&score), "score {} out of range for {}", score, value);
        }
    }
}

#[test]
fn deserializes_from_camel_case_json() {
    let input: TrustScoreInput = serde_json::from_str(
        r#"{"accountAgeDays": 12, "postCount": 4, "commentCount": 9, "reputationPoints": 55, "reportCount": 0, "verified": false}"#,
    )
    .unwrap();
    // 12 + 8 + 9 + 5.5
    assert_eq!(calculate_trust_score(&input), 34.5);
    assert_eq!(TrustLevel::from_score(34.5), TrustLevel::Low);
}

#[test]
fn custom_weights_are_honoured() {
    let scorer = TrustScorer::new(TrustWeights { verified_bonus: 50.0, ..TrustWeights::default() });
    assert_eq!(scorer.score(&account(0.0, 0.0, 0.0, 0.0, 0.0, true)), 50.0);
}
