use tracing_subscriber::EnvFilter;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &["eumryeok", "eumryeok_calendar", "eumryeok_table"];

/// Maps a verbosity level to a filter directive for every workspace crate.
///
/// Mapping:
/// - 0        -> warn
/// - 1        -> info
/// - 2        -> debug
/// - 3 and up -> trace
fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs a global `tracing` subscriber at the given verbosity.
///
/// `RUST_LOG` overrides the verbosity if set. Calling this again after a
/// subscriber is installed has no effect.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    // Fails only if a global subscriber already exists.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
