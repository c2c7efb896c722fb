//! Tracing setup for the binaries.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the host. Front ends that want the default call
//! [`init_default_tracing`] with the `telemetry` feature enabled.

/// Install a compact fmt subscriber on stderr filtered by `RUST_LOG`
/// (default `info`).
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
