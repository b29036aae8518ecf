use tracing_subscriber::EnvFilter;

/// Directive that surfaces per-event search logs.
pub const TRACE_DIRECTIVE: &str = "pathlab_core=trace";

/// Filter from `RUST_LOG` (default `info`), with search tracing on top when `trace` is set.
pub fn env_filter(trace: bool) -> anyhow::Result<EnvFilter> {
    let spec = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(spec.as_deref(), trace)
}

pub fn filter_from(spec: Option<&str>, trace: bool) -> anyhow::Result<EnvFilter> {
    let filter = spec
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
    if trace {
        return Ok(filter.add_directive(TRACE_DIRECTIVE.parse()?));
    }
    Ok(filter)
}
