//! Logger setup for the trustguard binary.

use std::io::Write;
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes `env_logger`, writing `[LEVEL target] message` lines to stderr.
///
/// `level` overrides `RUST_LOG` when given; otherwise `RUST_LOG` applies with a
/// default of `warn`. Calling this more than once is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format(|buf, record| {
        writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
    });
    let _ = builder.try_init();
}
