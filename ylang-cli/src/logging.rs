//! Tracing setup for the CLI.

/// Install a stderr fmt subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set, so stdout carries only program
/// output and the completion marker.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    }
}
