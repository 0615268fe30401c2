use std::io::stderr;

use tracing::Level;
use tracing_forest::{ForestLayer, Printer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub fn setup_tracing() {
    setup_tracing_with_log_level(Level::INFO);
}

/// Installs the global subscriber. `RUST_LOG` overrides `level`; logs go to stderr so stdout
/// only carries the result.
pub fn setup_tracing_with_log_level(level: Level) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = Registry::default()
        .with(env_filter)
        .with(ForestLayer::from(Printer::new().writer(stderr)))
        .try_init();
}
