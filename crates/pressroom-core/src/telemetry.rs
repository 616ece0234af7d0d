//! Tracing initialisation for binaries embedding the engine.
//!
//! Call [`init_tracing`] once at program start. The global subscriber can
//! only be installed once per process, so repeated calls are ignored
//! rather than treated as an error.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `level` is the default verbosity when `RUST_LOG` is not set; when it
/// is set, `RUST_LOG` wins. With `json` enabled, log lines come out as
/// newline-delimited JSON for aggregation pipelines.
pub fn init_tracing(json: bool, level: Level) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if json {
        registry
            .with(fmt::layer().with_target(false).json())
            .try_init()
    } else {
        registry.with(fmt::layer().with_target(false)).try_init()
    };
    installed.ok();
}
