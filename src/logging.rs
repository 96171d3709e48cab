/// Installs the process subscriber. Filtering comes from `RUST_LOG`
/// (e.g. `RUST_LOG=lisp_primitives=debug`); events go to stderr, leaving
/// stdout to printed results.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Trace-level subscriber on the test writer, installed once per test binary.
#[cfg(test)]
pub fn init_test_logging() {
    static TRACING_INIT: std::sync::Once = std::sync::Once::new();
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("trace")
            .with_test_writer()
            .try_init();
    });
}
