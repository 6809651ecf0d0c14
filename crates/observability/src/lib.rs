//! Tracing and logging setup shared by the binaries.

/// Initialize process-wide logging with [`tracing::DEFAULT_FILTER`]
/// (`info`, plus `debug` for `tower_http` request spans).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::DEFAULT_FILTER);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
