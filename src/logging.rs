use std::io;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a compact stderr subscriber. Calling it again is harmless.
pub fn init(level: LevelFilter) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .with_level(true)
        .with_ansi(false)
        .compact()
        .with_filter(level);

    let _ = Registry::default().with(layer).try_init();
}
