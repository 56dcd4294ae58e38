//! Logging integration for the adminkit toolkit.
//!
//! Provides a helper for configuring [`tracing`]-based logging. Library
//! crates emit events through `tracing` macros only; installing a
//! subscriber is left to the embedding application via [`setup_logging`].

/// Sets up the global tracing subscriber.
///
/// The filter directive follows `tracing_subscriber::EnvFilter` syntax
/// (e.g. "debug", "info", "adminkit_forms=trace"). With `debug` set, a
/// pretty human-readable format is used; otherwise a structured JSON
/// format suited to log aggregation.
///
/// Calling this twice is harmless; the second subscriber silently fails
/// to install.
pub fn setup_logging(filter: &str, debug: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    if debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}
