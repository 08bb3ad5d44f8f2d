//! JSON trace output for ingest debugging, compiled in by the `trace` feature.

#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
const TRACE_FILE: &str = "olchiki-trace.jsonl";

#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "olchiki_engine=debug,olchiki_core=debug";

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Send spans and events to `<log_dir>/olchiki-trace.jsonl`. `RUST_LOG`
/// overrides the default filter. Later calls are no-ops.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    INIT.call_once(|| {
        let appender = tracing_appender::rolling::never(log_dir, TRACE_FILE);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        // writer stays live for the rest of the process
        std::mem::forget(guard);

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(filter)
            .init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
