//! Snapshot rendering entry points.

use std::fmt;
use std::sync::Arc;

use crate::config::SnapshotConfig;
use crate::describe::{DescribeOptions, TreeDescriber};
use crate::enable::{AccessibilityEnabler, NoopEnabler, ensure_accessibility_enabled};
use crate::error::Result;
use crate::logging::{PerfSpan, targets};
use crate::node::AccessibilityNode;
use crate::normalize::normalize;

/// Render the accessibility snapshot of `root`.
///
/// Lines are joined with `"\n"` without a trailing newline, and unstable
/// `(unknown context at $<hex>)` tokens are canonicalized.
///
/// # Panics
///
/// Panics if the tree is deeper than [`DEFAULT_MAX_DEPTH`](crate::DEFAULT_MAX_DEPTH),
/// which indicates a cycle. Use [`try_render_accessibility_snapshot`] to
/// handle that case.
pub fn render_accessibility_snapshot(root: &dyn AccessibilityNode) -> String {
    match try_render_accessibility_snapshot(root) {
        Ok(snapshot) => snapshot,
        Err(err) => panic!("cannot render accessibility snapshot: {err}"),
    }
}

/// Fallible form of [`render_accessibility_snapshot`].
pub fn try_render_accessibility_snapshot(root: &dyn AccessibilityNode) -> Result<String> {
    render_with(root, DescribeOptions::default(), true)
}

fn render_with(
    root: &dyn AccessibilityNode,
    options: DescribeOptions,
    normalize_output: bool,
) -> Result<String> {
    let _span = PerfSpan::new("render_accessibility_snapshot");
    let lines = TreeDescriber::with_options(options).describe(root)?;
    let joined = lines.join("\n");
    if normalize_output {
        Ok(normalize(&joined))
    } else {
        Ok(joined)
    }
}

/// A reusable snapshot strategy for test harnesses.
///
/// The strategy makes sure its environment-enable hook has run in this
/// process before the first tree is described, then renders with its
/// configuration. Comparing against stored baselines is left to the harness.
///
/// # Example
///
/// ```
/// use lattice_a11y_snapshot::{A11yNode, SnapshotStrategy};
///
/// let strategy = SnapshotStrategy::new();
/// let snapshot = strategy.render(&A11yNode::new("Root")).unwrap();
/// assert_eq!(snapshot, "* Root");
/// ```
#[derive(Clone)]
pub struct SnapshotStrategy {
    enabler: Arc<dyn AccessibilityEnabler>,
    config: SnapshotConfig,
}

impl SnapshotStrategy {
    /// A strategy with default configuration and no enable hook.
    pub fn new() -> Self {
        Self {
            enabler: Arc::new(NoopEnabler),
            config: SnapshotConfig::default(),
        }
    }

    /// Use `enabler` to switch on accessibility before the first render.
    pub fn with_enabler(mut self, enabler: impl AccessibilityEnabler + 'static) -> Self {
        self.enabler = Arc::new(enabler);
        self
    }

    pub fn with_config(mut self, config: SnapshotConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SnapshotConfig {
        &self.config
    }

    /// Render `root`, enabling accessibility first if needed.
    pub fn render(&self, root: &dyn AccessibilityNode) -> Result<String> {
        ensure_accessibility_enabled(self.enabler.as_ref())?;
        let snapshot = render_with(
            root,
            self.config.describe_options(),
            self.config.normalize_unknown_contexts,
        )?;
        tracing::debug!(target: targets::SNAPSHOT, bytes = snapshot.len(), "rendered accessibility snapshot");
        Ok(snapshot)
    }
}

impl Default for SnapshotStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SnapshotStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotStrategy")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::describe::DEFAULT_MAX_DEPTH;
    use crate::error::Error;
    use crate::node::A11yNode;
    use crate::traits::SemanticTrait;

    fn root_with_label(hidden: bool) -> A11yNode {
        A11yNode::new("Root").with_child(
            A11yNode::new("Label")
                .accessible(true)
                .hidden(hidden)
                .with_label("Hi")
                .with_trait(SemanticTrait::StaticText),
        )
    }

    #[test]
    fn test_end_to_end() {
        assert_eq!(
            render_accessibility_snapshot(&root_with_label(false)),
            "* Root\n  * Label\n  | -label: Hi\n  | -traits: .staticText"
        );
    }

    #[test]
    fn test_end_to_end_hidden() {
        assert_eq!(
            render_accessibility_snapshot(&root_with_label(true)),
            "* Root\n  o Label\n  o -label: Hi\n  o -traits: .staticText"
        );
    }

    #[test]
    fn test_no_trailing_newline() {
        let snapshot = render_accessibility_snapshot(&A11yNode::new("Root"));
        assert_eq!(snapshot, "* Root");
    }

    #[test]
    fn test_normalizes_type_names() {
        let root = A11yNode::new("App.(unknown context at $10d69dd68).ProceedButton");
        assert_eq!(
            render_accessibility_snapshot(&root),
            "* App.(unknown context).ProceedButton"
        );
    }

    struct Cycle;

    impl AccessibilityNode for Cycle {
        fn type_name(&self) -> String {
            "Cycle".to_string()
        }

        fn visit_children(&self, visitor: &mut dyn FnMut(&dyn AccessibilityNode)) {
            visitor(&Cycle);
        }
    }

    #[test]
    fn test_cyclic_tree_is_an_error() {
        assert!(matches!(
            try_render_accessibility_snapshot(&Cycle),
            Err(Error::CyclicTree { depth: DEFAULT_MAX_DEPTH })
        ));
    }

    #[test]
    #[should_panic(expected = "cannot render accessibility snapshot")]
    fn test_cyclic_tree_panics() {
        render_accessibility_snapshot(&Cycle);
    }

    #[test]
    fn test_strategy_without_normalization() {
        let strategy = SnapshotStrategy::new().with_config(SnapshotConfig {
            normalize_unknown_contexts: false,
            ..Default::default()
        });
        let root = A11yNode::new("App.(unknown context at $ff).Root");
        assert_eq!(
            strategy.render(&root).unwrap(),
            "* App.(unknown context at $ff).Root"
        );
    }

    #[test]
    fn test_strategy_depth_limit() {
        let mut root = A11yNode::new("Leaf").accessible(true);
        for _ in 0..8 {
            root = A11yNode::new("Wrapper").with_child(root);
        }
        let strategy = SnapshotStrategy::new().with_config(SnapshotConfig {
            max_depth: 4,
            ..Default::default()
        });
        assert!(matches!(
            strategy.render(&root),
            Err(Error::CyclicTree { depth: 4 })
        ));
    }

    #[test]
    fn test_strategy_debug_omits_enabler() {
        let debug = format!("{:?}", SnapshotStrategy::default());
        assert!(debug.starts_with("SnapshotStrategy"));
        assert!(debug.contains("max_depth"));
    }
}
