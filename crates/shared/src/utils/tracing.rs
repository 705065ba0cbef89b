use std::sync::Once;

use time::format_description::well_known::Iso8601;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{format::Pretty, time::UtcTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    Layer,
};
use tracing_web::{performance_layer, MakeWebConsoleWriter};

/// Installs the browser console subscriber
///
/// Only events at `max_level` or more severe reach the console. Spans still
/// show up in the browser's performance timeline
pub fn configure_tracing(max_level: LevelFilter) {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false) // Only partially supported across browsers
        .with_timer(UtcTime::new(Iso8601::DEFAULT))
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(max_level);
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

    tracing_subscriber::registry().with(console_layer).with(perf_layer).init();
}

/// Configures tracing inside a Once block so remounting doesn't panic
pub fn configure_tracing_once(max_level: LevelFilter) {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| configure_tracing(max_level));
}
