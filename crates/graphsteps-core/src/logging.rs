//! Diagnostics on stderr
//!
//! Step traces go to stdout, so every log line is written to stderr. The
//! filter comes from `GRAPHSTEPS_LOG`, then `RUST_LOG`, then the CLI flags.

use std::io;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log the time elapsed since `$start` at trace level, with optional extra fields.
///
/// ```rust,ignore
/// let begin = Instant::now();
/// let steps = run(...);
/// trace_time!(begin, "kruskal", steps = steps.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Install the global subscriber for the CLI flags
///
/// `--log-level` wins over `--verbose`; without either only warnings are shown.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = env_filter(&filter_directive(log_level.unwrap_or(default_level)));

    // Span close events carry the per-algorithm timings in JSON mode
    let json = log_json.then(|| {
        fmt::layer()
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(io::stderr)
    });
    let text = (!log_json).then(|| {
        fmt::layer()
            .compact()
            .without_time()
            .with_target(false)
            .with_ansi(false)
            .with_writer(io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(text)
        .try_init()?;
    Ok(())
}

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env("GRAPHSTEPS_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// A bare level applies to both graphsteps crates; full directives pass through
fn filter_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("graphsteps={level},graphsteps_core={level}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_scopes_bare_level() {
        assert_eq!(
            filter_directive("debug"),
            "graphsteps=debug,graphsteps_core=debug"
        );
    }

    #[test]
    fn test_filter_directive_keeps_explicit_targets() {
        assert_eq!(filter_directive("graphsteps_core=trace"), "graphsteps_core=trace");
    }
}
