//! Global `tracing` subscriber setup.
//!
//! The browser build logs to the devtools console through `tracing-wasm`; the
//! prerender binary logs to stderr, filtered by `RUST_LOG`.

#[cfg(target_arch = "wasm32")]
pub fn init() {
    tracing_wasm::set_as_global_default();
}

#[cfg(all(not(target_arch = "wasm32"), feature = "ssr"))]
pub fn init() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // try_init: a second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Native builds without the prerender stack have nowhere to send logs.
#[cfg(all(not(target_arch = "wasm32"), not(feature = "ssr")))]
pub fn init() {}
