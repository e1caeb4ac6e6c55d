//! Tracing setup for applications embedding `stockview-rs`.
//!
//! Nothing here runs implicitly: hosts either call one of the init helpers
//! below or install their own `tracing` subscriber before constructing an
//! engine. All engine code logs through `tracing` macros regardless.

/// Installs a compact fmt subscriber honoring `RUST_LOG`, defaulting to `info`.
///
/// Returns `true` on success and `false` when the `telemetry` feature is off
/// or another global subscriber won the race.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter("info")
}

/// Same as [`init_default_tracing`] with an explicit fallback filter, used
/// when `RUST_LOG` is unset (for example `"stockview_rs=debug"`).
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
