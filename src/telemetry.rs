//! Opt-in tracing setup for hosts embedding `scatter3d-rs`.
//!
//! The engine only emits `tracing` events (skipped mutations, rescale
//! passes) and never installs a global subscriber on its own. Hosts that
//! want quick structured logs can call [`init_default_tracing`]; everyone
//! else wires their own subscriber and filters.

/// Installs a compact `tracing` subscriber honoring `RUST_LOG`, falling
/// back to `info` when the variable is unset.
///
/// Returns `true` when the subscriber was installed. Returns `false` when
/// the `telemetry` feature is disabled or another global subscriber is
/// already in place.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
