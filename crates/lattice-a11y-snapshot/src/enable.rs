//! The environment-enable hook.
//!
//! Some hosts only compute real accessibility attributes once an assistive
//! technology (or an automation flag) is switched on. The embedding
//! application supplies an [`AccessibilityEnabler`] that does this for its
//! platform; [`ensure_accessibility_enabled`] runs it at most once per
//! process and before any snapshot is rendered.

use std::sync::OnceLock;

use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::logging::targets;

/// Switches on the host's accessibility subsystem.
pub trait AccessibilityEnabler: Send + Sync {
    /// Enable accessibility. Must be idempotent.
    fn enable(&self) -> Result<()>;
}

/// Enabler for hosts where attributes are supplied directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEnabler;

impl AccessibilityEnabler for NoopEnabler {
    fn enable(&self) -> Result<()> {
        Ok(())
    }
}

/// Enabler backed by a closure.
pub struct FnEnabler<F>(F);

impl<F> FnEnabler<F>
where
    F: Fn() -> Result<()> + Send + Sync,
{
    pub fn new(enable: F) -> Self {
        Self(enable)
    }
}

impl<F> AccessibilityEnabler for FnEnabler<F>
where
    F: Fn() -> Result<()> + Send + Sync,
{
    fn enable(&self) -> Result<()> {
        (self.0)()
    }
}

static ENABLED: OnceLock<()> = OnceLock::new();
static ENABLE_LOCK: Mutex<()> = parking_lot::const_mutex(());

/// Whether accessibility has been successfully enabled in this process.
pub fn is_accessibility_enabled() -> bool {
    ENABLED.get().is_some()
}

/// Run `enabler` unless a previous call already succeeded.
///
/// Concurrent callers block until the first attempt finishes. A failed
/// attempt is not remembered, so the next call tries again; callers are
/// expected to abort rather than render snapshots after a failure.
pub fn ensure_accessibility_enabled(enabler: &dyn AccessibilityEnabler) -> Result<()> {
    if is_accessibility_enabled() {
        return Ok(());
    }

    let _guard = ENABLE_LOCK.lock();
    if is_accessibility_enabled() {
        return Ok(());
    }

    match enabler.enable() {
        Ok(()) => {
            let _ = ENABLED.set(());
            tracing::info!(target: targets::ENABLE, "accessibility enabled");
            Ok(())
        }
        Err(err) => {
            tracing::error!(target: targets::ENABLE, error = %err, "failed to enable accessibility");
            Err(match err {
                Error::EnableFailed(_) => err,
                other => Error::enable_failed(other.to_string()),
            })
        }
    }
}
