//! Stderr logging for the graphwalk binary
//!
//! Algorithms log through `tracing` spans and events; the binary installs a
//! subscriber once at startup. `RUST_LOG` or `GRAPHWALK_LOG` replace the
//! filter built from the command-line flags.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_ENV_VAR: &str = "GRAPHWALK_LOG";

/// Emit a trace event carrying the time since `$start`.
///
/// ```rust,ignore
/// let start = Instant::now();
/// let grid = load_grid(path)?;
/// trace_time!(start, "load_grid", rows = grid.rows());
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

/// Install the global subscriber.
///
/// `log_level` wins over `verbose`; without either only warnings are shown.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let directive = match (log_level, verbose) {
        (Some(level), _) => filter_directive(level),
        (None, true) => filter_directive("debug"),
        (None, false) => filter_directive("warn"),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV_VAR))
        .unwrap_or_else(|_| EnvFilter::new(directive));

    let registry = tracing_subscriber::registry().with(filter);
    if log_json {
        // Span close events carry the busy time of each algorithm call
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

/// A bare level applies to both graphwalk crates; `target=level` passes through
fn filter_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("graphwalk={level},graphwalk_core={level}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_bare_level() {
        assert_eq!(
            filter_directive("debug"),
            "graphwalk=debug,graphwalk_core=debug"
        );
    }

    #[test]
    fn test_filter_directive_passthrough() {
        assert_eq!(filter_directive("graphwalk_core=trace"), "graphwalk_core=trace");
    }
}
