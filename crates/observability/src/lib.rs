//! Tracing/logging setup shared by hosts embedding the analytics engine.

/// Initialize process-wide tracing with defaults (JSON, `info`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, formatter).
pub mod tracing;

pub use self::tracing::{ObservabilityConfig, init_with};
