//! Opt-in tracing setup for hosts embedding `chart-layout`.
//!
//! The renderer emits `tracing` events (`trace` per registered series and
//! skipped pass, `debug` per committed layout, `warn` on rejected series).
//! Hosts either install their own subscriber or call one of these helpers
//! with the `telemetry` feature enabled.

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// `info`.
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter("info")
}

/// Like `init_default_tracing`, with `fallback` used when `RUST_LOG` is unset
/// or unparsable (e.g. `"chart_layout=debug"`).
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
