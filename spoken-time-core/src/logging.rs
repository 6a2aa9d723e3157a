use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::errors::{Result, SpokenTimeError};

/// Initializes the default tracing subscriber used by the binaries.
///
/// `RUST_LOG` takes precedence over `level`; without either the filter is `info`.
/// Events are written to stderr.
pub fn init_tracing(level: Option<&str>) -> Result<()> {
    let default_level = level.unwrap_or("info");
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init()
        .map_err(|err| SpokenTimeError::GeneralError(err.to_string()))?;

    Ok(())
}
