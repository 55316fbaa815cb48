//! Logging for luahook
//!
//! Diagnostics go through `tracing` to stderr. Stdout carries only the check
//! report so callers can capture it unchanged.

use std::path::Path;
use tracing::{Level, info, span, warn};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence. Otherwise only warnings are shown, or debug
/// output for this crate when `verbose` is set.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            if verbose {
                EnvFilter::try_new("luahook=debug,luahook_runner=debug,info")
            } else {
                EnvFilter::try_new("luahook=warn,warn")
            }
        })
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let span_events = if verbose {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_line_number(false)
                .with_file(false)
                .with_span_events(span_events)
                .compact(),
        )
        .try_init()?;

    Ok(())
}

/// Span covering one linter invocation.
pub fn lint_span(file: &Path) -> tracing::Span {
    span!(Level::DEBUG, "lint_file", file = %file.display())
}

/// Log the outcome of a directory run.
pub fn log_directory_summary(root: &Path, checked: usize, failed: usize, duration_ms: u128) {
    if checked == 0 {
        warn!(
            root = %root.display(),
            "No *.lua files found; nothing was checked"
        );
    }
    info!(
        root = %root.display(),
        checked,
        failed,
        duration_ms = %duration_ms,
        "Directory check completed"
    );
}

/// Log linter stderr, which is never mixed into the report.
pub fn log_linter_stderr(file: &Path, stderr: &str) {
    let stderr = stderr.trim_end();
    if !stderr.is_empty() {
        warn!(file = %file.display(), stderr = %stderr, "Linter wrote to stderr");
    }
}
