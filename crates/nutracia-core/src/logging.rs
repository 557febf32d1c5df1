//! Tracing subscriber setup for embedding shells and tests.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `default_filter` applies when `RUST_LOG` is unset (e.g. `"info"` or
/// `"nutracia=debug"`). When `json` is true, events are emitted as JSON
/// lines for log shippers; otherwise the human-readable format is used.
///
/// Safe to call more than once; subsequent calls are no-ops.
pub fn init(default_filter: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    // Already-initialized is the only expected failure; keep the first
    // subscriber.
    if result.is_err() {
        tracing::debug!("tracing subscriber already initialized");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init("info", false);
        init("debug", true);
    }
}
