//! `config` command: inspect the effective scoring configuration.

use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

use trustguard_core::ScoringConfig;

use crate::cli::ConfigCommand;

pub fn run_config(cmd: &ConfigCommand, config: &ScoringConfig, source: Option<&Path>) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    match cmd {
        ConfigCommand::Show => {
            write!(writer, "{}", config.to_yaml()?)?;
        }
        ConfigCommand::Path => match source {
            Some(path) => writeln!(writer, "{}", path.display())?,
            None => writeln!(writer, "embedded defaults")?,
        },
    }
    Ok(())
}
