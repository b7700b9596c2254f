//! Logging configuration using tracing

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber, writing to stderr.
///
/// Log level is controlled by the `CHECKLIST_LOG` environment variable.
///
/// # Examples
/// ```bash
/// CHECKLIST_LOG=debug cargo run -p app
/// CHECKLIST_LOG=widget=trace,info cargo run -p app
/// ```
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_env("CHECKLIST_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    Ok(())
}
