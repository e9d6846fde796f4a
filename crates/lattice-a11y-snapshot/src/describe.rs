//! Recursive tree-to-text description of the accessibility-relevant subtree.
//!
//! Each emitted node contributes a `<marker> <type name>` line followed, for
//! exposed nodes, by its spoken attributes. Descendant lines are prefixed by
//! their parent's child prefix, so prefixes accumulate with depth:
//!
//! ```text
//! * Root                  // not exposed, but has exposed descendants
//!   * Stack
//!     * Label             // exposed
//!     | -label: Hello
//!     | -traits: .staticText
//!     | * Icon            // exposed, but shadowed by the exposed parent
//!     | | -traits: .image
//!     o Banner            // hidden (itself or an ancestor)
//!     o -label: Offline
//!     o -traits: .none
//! ```
//!
//! Subtrees with no exposed node are pruned entirely, except for the
//! traversal root which always produces its own line.

use crate::error::{Error, Result};
use crate::logging::targets;
use crate::node::AccessibilityNode;
use crate::traits::format_traits;

/// Default recursion limit used to detect cyclic trees.
///
/// Each level of the tree costs several stack frames, so the limit stays
/// well inside the 2 MiB stack of a test thread.
pub const DEFAULT_MAX_DEPTH: usize = 256;

const VISIBLE_MARKER: &str = "*";
const HIDDEN_MARKER: &str = "o";
const HIDDEN_PREFIX: &str = "o ";
const EXPOSED_PREFIX: &str = "| ";
const PLAIN_PREFIX: &str = "  ";

/// Configuration for the tree describer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescribeOptions {
    /// Maximum depth to traverse before failing with [`Error::CyclicTree`].
    ///
    /// `None` disables the guard; a cyclic tree then recurses until the
    /// stack overflows.
    pub max_depth: Option<usize>,
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl DescribeOptions {
    /// Options without a depth guard.
    pub fn unbounded() -> Self {
        Self { max_depth: None }
    }
}

/// Produces the line-by-line accessibility description of a node tree.
#[derive(Debug, Clone, Default)]
pub struct TreeDescriber {
    options: DescribeOptions,
}

impl TreeDescriber {
    /// Create a describer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a describer with custom options.
    pub fn with_options(options: DescribeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> DescribeOptions {
        self.options
    }

    /// Describe `root` as the traversal root.
    ///
    /// The result always holds at least the root's own line.
    pub fn describe(&self, root: &dyn AccessibilityNode) -> Result<Vec<String>> {
        self.describe_node(root, true)
    }

    /// Describe `node`, treating it as the traversal root or as an inner node.
    ///
    /// An inner node that is not exposed and has no exposed descendants
    /// yields no lines. The node's parent is taken to be visible.
    pub fn describe_node(
        &self,
        node: &dyn AccessibilityNode,
        is_traversal_root: bool,
    ) -> Result<Vec<String>> {
        let lines = self.describe_into(node, false, is_traversal_root, 0)?;
        tracing::debug!(target: targets::DESCRIBE, lines = lines.len(), "described accessibility tree");
        Ok(lines)
    }

    fn describe_into(
        &self,
        node: &dyn AccessibilityNode,
        parent_hidden: bool,
        is_traversal_root: bool,
        depth: usize,
    ) -> Result<Vec<String>> {
        if let Some(max) = self.options.max_depth {
            if depth > max {
                return Err(Error::CyclicTree { depth: max });
            }
        }

        let hidden = parent_hidden || node.is_hidden();

        let mut child_lines = Vec::new();
        let mut failure = None;
        node.visit_children(&mut |child| {
            if failure.is_some() {
                return;
            }
            match self.describe_into(child, hidden, false, depth + 1) {
                Ok(lines) => child_lines.extend(lines),
                Err(err) => failure = Some(err),
            }
        });
        if let Some(err) = failure {
            return Err(err);
        }

        let exposed = node.is_accessibility_element();
        if child_lines.is_empty() && !exposed && !is_traversal_root {
            tracing::trace!(target: targets::DESCRIBE, depth, "pruned subtree without exposed nodes");
            return Ok(Vec::new());
        }

        let marker = if hidden { HIDDEN_MARKER } else { VISIBLE_MARKER };
        let child_prefix = if hidden {
            HIDDEN_PREFIX
        } else if exposed {
            EXPOSED_PREFIX
        } else {
            PLAIN_PREFIX
        };

        let mut lines = Vec::with_capacity(1 + child_lines.len());
        lines.push(format!("{marker} {}", node.type_name()));

        if exposed {
            let spoken = [
                ("value", node.accessibility_value()),
                ("label", node.accessibility_label()),
                ("hint", node.accessibility_hint()),
            ];
            for (name, text) in spoken {
                if let Some(text) = text.filter(|t| !t.is_empty()) {
                    lines.push(format!("{child_prefix}-{name}: {text}"));
                }
            }
            lines.push(format!(
                "{child_prefix}-traits: {}",
                format_traits(node.accessibility_traits())
            ));
            for action in node.custom_actions() {
                lines.push(format!("{child_prefix}-action: {}", action.name));
            }
        }

        lines.extend(
            child_lines
                .into_iter()
                .map(|line| format!("{child_prefix}{line}")),
        );
        Ok(lines)
    }
}
