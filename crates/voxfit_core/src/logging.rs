//! Structured logging for the reporting pipeline.

/// Installs a global `tracing` subscriber printing INFO and above.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_logging() {
    init_logging_with_level(tracing::Level::INFO);
}

/// Same as [`init_logging`] with an explicit maximum level.
pub fn init_logging_with_level(level: tracing::Level) {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(level)
            .finish(),
    )
    .ok();
}
