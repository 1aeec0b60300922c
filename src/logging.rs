//! Tracing setup for the `zcalc` binary.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Directive used when `RUST_LOG` is unset: only calculator warnings, such as
/// rejected events.
pub const DEFAULT_DIRECTIVE: &str = "zcalc=warn";

/// Build the filter from `RUST_LOG`, falling back to `default_directive`.
pub fn filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install the global tracing subscriber.
///
/// Output goes to stderr so that it never mixes with the display lines on
/// stdout.
///
/// ```bash
/// RUST_LOG=zcalc=trace zcalc events.jsonl
/// ```
pub fn init(default_directive: &str) {
    tracing_subscriber::registry()
        .with(filter(default_directive))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
