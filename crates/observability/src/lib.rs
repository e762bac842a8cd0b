//! Logging setup shared by the site binaries and tests.

/// Tracing configuration (filters, formatter).
pub mod tracing;

/// Initialize process-wide logging with the default `info` level.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init("info");
}
