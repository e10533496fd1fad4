// trustguard/src/main.rs
//! trustguard entry point.
//!
//! Loads the environment and logger, resolves the scoring configuration and
//! dispatches to the selected command.

use std::io;
use std::process;
use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use log::LevelFilter;

use trustguard::cli::{Cli, Commands};
use trustguard::commands::{classify, config, trust};
use trustguard::logger;
use trustguard::ui::output_format;
use trustguard::ui::theme::{build_theme_map, ThemeMap, ThemeStyle};
use trustguard::utils::config_paths::load_effective_config;

/// Exit code for `classify --fail-on-spam` when the content is spam.
const SPAM_EXIT_CODE: i32 = 2;

fn run(cli: &Cli, theme_map: &ThemeMap) -> Result<i32> {
    let (scoring, source) = load_effective_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Classify(cmd) => {
            let result = classify::run_classify(cmd, scoring, theme_map)?;
            if cmd.fail_on_spam && result.is_spam {
                return Ok(SPAM_EXIT_CODE);
            }
        }
        Commands::Trust(cmd) => {
            trust::run_trust(cmd, &scoring, theme_map)?;
        }
        Commands::Config(cmd) => {
            config::run_config(cmd, &scoring, source.as_deref())?;
        }
    }
    Ok(0)
}

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    let theme_map = match build_theme_map(cli.theme.as_ref()).context("Theme error") {
        Ok(map) => map,
        Err(e) => {
            report_error(&e, &ThemeStyle::default_theme_map());
            process::exit(1);
        }
    };

    match run(&cli, &theme_map) {
        Ok(code) => process::exit(code),
        Err(e) => {
            report_error(&e, &theme_map);
            process::exit(1);
        }
    }
}

fn report_error(err: &anyhow::Error, theme_map: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(
        &mut io::stderr(),
        &format!("{:#}", err),
        theme_map,
        stderr_supports_color,
    );
}
