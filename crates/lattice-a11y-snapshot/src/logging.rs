//! Logging facilities for accessibility snapshots.
//!
//! All instrumentation goes through the `tracing` crate. Nothing is printed
//! unless the embedding test harness installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("lattice_a11y_snapshot=trace")
//!     .init();
//! ```

/// Target names for log filtering.
pub mod targets {
    /// Tree traversal and pruning.
    pub const DESCRIBE: &str = "lattice_a11y_snapshot::describe";
    /// Environment-enable hook.
    pub const ENABLE: &str = "lattice_a11y_snapshot::enable";
    /// Snapshot rendering entry points.
    pub const SNAPSHOT: &str = "lattice_a11y_snapshot::snapshot";
    /// AccessKit adapter.
    pub const ACCESSKIT: &str = "lattice_a11y_snapshot::accesskit";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used to time a whole snapshot render.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "lattice_a11y_snapshot::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
