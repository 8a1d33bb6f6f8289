//! Logging setup for the `orcid` binary

use std::io::Write;

/// Padded label for a log level.
fn level_label(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARN ",
        log::Level::Info => "INFO ",
        log::Level::Debug => "DEBUG",
        log::Level::Trace => "TRACE",
    }
}

fn default_filter(quiet: bool, debug: bool) -> &'static str {
    if debug {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    }
}

/// Initialize stdout logging: `timestamp - target - LEVEL - message`.
///
/// `RUST_LOG` takes precedence over the flags. Safe to call more than
/// once; later calls are ignored.
pub fn init_logging(quiet: bool, debug: bool) {
    let result = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter(quiet, debug)),
    )
    .target(env_logger::Target::Stdout)
    .format(|buf, record| {
        let ts = buf.timestamp_millis();
        writeln!(
            buf,
            "{ts} - {} - {} - {}",
            record.target(),
            level_label(record.level()),
            record.args()
        )
    })
    .try_init();

    if let Err(e) = result {
        log::debug!("logger already initialized: {e}");
    }
}
