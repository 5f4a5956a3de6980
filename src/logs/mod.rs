//! Log capture for the debug view
//!
//! Tracing events flow through [`BroadcastLayer`] (gated by a shared
//! [`VerbosityControl`]) into a [`LogBroadcaster`]. The GUI subscribes once
//! and drains lines into a [`LogBuffer`] on the UI thread. The same control
//! also gates the stderr output.

mod broadcast;
mod buffer;
mod layer;
mod verbosity;

pub use broadcast::LogBroadcaster;
pub use buffer::{FilterEntry, LogBuffer};
pub use layer::{format_line, BroadcastLayer};
pub use verbosity::{LevelGate, VerbosityControl, CRITICAL_FIELD};

use tracing::Subscriber;
use tracing_subscriber::filter::FilterExt;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Install the global subscriber: stderr output filtered by `RUST_LOG`
/// (default `info`, or `debug` when verbose) plus the debug-view broadcast.
pub fn init_logging(
    verbose: bool,
    broadcaster: &LogBroadcaster,
    control: &VerbosityControl,
) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    build_subscriber(
        env_filter,
        std::io::stderr,
        broadcaster.clone(),
        control.clone(),
    )
    .try_init()
    .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(())
}

fn build_subscriber<W>(
    env_filter: EnvFilter,
    writer: W,
    broadcaster: LogBroadcaster,
    control: VerbosityControl,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let gate = control.gate();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_filter(env_filter.and(gate)),
        )
        .with(BroadcastLayer::new(broadcaster).with_filter(control))
}
