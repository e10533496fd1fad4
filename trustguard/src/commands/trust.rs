//! `trust` command: score an account from its statistics.

use anyhow::Result;
use log::debug;
use std::io;
use is_terminal::IsTerminal;

use trustguard_core::{ScoringConfig, TrustLevel, TrustScoreInput, TrustScorer};

use crate::cli::TrustCommand;
use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

impl From<&TrustCommand> for TrustScoreInput {
    fn from(cmd: &TrustCommand) -> Self {
        TrustScoreInput {
            account_age_days: cmd.account_age_days,
            post_count: cmd.post_count,
            comment_count: cmd.comment_count,
            reputation_points: cmd.reputation_points,
            report_count: cmd.report_count,
            verified: cmd.verified,
        }
    }
}

pub fn run_trust(cmd: &TrustCommand, config: &ScoringConfig, theme_map: &ThemeMap) -> Result<f64> {
    let input = TrustScoreInput::from(cmd);
    let score = TrustScorer::new(config.trust.clone()).score(&input);
    let level = TrustLevel::from_score(score);
    debug!("Trust score {} ({}) for {:?}", score, level.as_str(), input);

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    if cmd.json {
        output_format::print_trust_json(&mut writer, score, level)?;
    } else {
        let supports_color = stdout.is_terminal();
        output_format::print_trust(&mut writer, score, level, theme_map, supports_color)?;
    }
    Ok(score)
}
