//! Environment-enable hook tests.
//!
//! The enabled state is process-wide, so this file holds a single test that
//! walks through the whole lifecycle in order.

use std::sync::atomic::{AtomicUsize, Ordering};

use lattice_a11y_snapshot::{
    A11yNode, Error, FnEnabler, SnapshotStrategy, ensure_accessibility_enabled,
    is_accessibility_enabled,
};

#[test]
fn test_enable_lifecycle() {
    static FAILING_CALLS: AtomicUsize = AtomicUsize::new(0);
    static WORKING_CALLS: AtomicUsize = AtomicUsize::new(0);

    let failing = SnapshotStrategy::new().with_enabler(FnEnabler::new(|| {
        FAILING_CALLS.fetch_add(1, Ordering::SeqCst);
        Err(Error::enable_failed("_AXSSetAutomationEnabled not found"))
    }));

    // A failed hook prevents rendering and is retried on the next attempt.
    assert!(!is_accessibility_enabled());
    let err = failing.render(&A11yNode::new("Root")).unwrap_err();
    assert!(matches!(err, Error::EnableFailed(_)));
    assert!(failing.render(&A11yNode::new("Root")).is_err());
    assert_eq!(FAILING_CALLS.load(Ordering::SeqCst), 2);
    assert!(!is_accessibility_enabled());

    // Errors other than EnableFailed are reported as EnableFailed.
    let misconfigured = FnEnabler::new(|| Err(Error::config("no simulator root")));
    assert!(matches!(
        ensure_accessibility_enabled(&misconfigured),
        Err(Error::EnableFailed(message)) if message.contains("no simulator root")
    ));

    let working = SnapshotStrategy::new().with_enabler(FnEnabler::new(|| {
        WORKING_CALLS.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }));
    assert_eq!(working.render(&A11yNode::new("Root")).unwrap(), "* Root");
    assert_eq!(working.render(&A11yNode::new("Root")).unwrap(), "* Root");
    assert_eq!(WORKING_CALLS.load(Ordering::SeqCst), 1);
    assert!(is_accessibility_enabled());

    // Once enabled, later hooks are not consulted.
    assert_eq!(failing.render(&A11yNode::new("Root")).unwrap(), "* Root");
    assert_eq!(FAILING_CALLS.load(Ordering::SeqCst), 2);
}
