use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Initialize structured stdout tracing. Call once at service startup.
///
/// Filtering comes from `RUST_LOG`. Output is human-readable by default;
/// set `LOG_FORMAT=json` for one-object-per-line JSON.
///
/// Safe to call multiple times — subsequent calls are silently ignored.
pub fn init_tracing() {
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v == "json");
    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
    let _ = if json {
        registry.with(fmt::layer().json().boxed()).try_init()
    } else {
        registry.with(fmt::layer().boxed()).try_init()
    };
}
