//! Deterministic text snapshots of accessibility trees.
//!
//! This crate renders the accessibility-relevant part of a UI node tree as a
//! stable multi-line string, so that accessibility regressions show up as
//! plain text diffs in snapshot tests:
//!
//! - [`TreeDescriber`]: walks the tree, prunes subtrees without exposed
//!   nodes and encodes hierarchy and hidden state in line prefixes
//! - [`TraitSet`] / [`format_traits`]: canonical rendering of semantic traits
//! - [`normalize()`]: removes unstable tokens from the joined output
//! - [`SnapshotStrategy`]: runs the environment-enable hook once per process
//!   before rendering with a [`SnapshotConfig`]
//!
//! # Example
//!
//! ```
//! use lattice_a11y_snapshot::{A11yNode, SemanticTrait, render_accessibility_snapshot};
//!
//! let root = A11yNode::new("Root").with_child(
//!     A11yNode::new("Label")
//!         .accessible(true)
//!         .hidden(true)
//!         .with_label("Hi")
//!         .with_trait(SemanticTrait::StaticText),
//! );
//!
//! assert_eq!(
//!     render_accessibility_snapshot(&root),
//!     "* Root\n  o Label\n  o -label: Hi\n  o -traits: .staticText"
//! );
//! ```
//!
//! Toolkits implement [`AccessibilityNode`] for their own node type; with the
//! `accessibility` feature, AccessKit trees are supported through
//! [`AccessKitTree`].

pub mod config;
pub mod describe;
pub mod enable;
pub mod logging;
pub mod node;
pub mod normalize;
pub mod snapshot;
pub mod traits;

#[cfg(feature = "accessibility")]
pub mod accesskit_tree;

mod error;

pub use config::SnapshotConfig;
pub use describe::{DEFAULT_MAX_DEPTH, DescribeOptions, TreeDescriber};
pub use enable::{
    AccessibilityEnabler, FnEnabler, NoopEnabler, ensure_accessibility_enabled,
    is_accessibility_enabled,
};
pub use error::{Error, Result};
pub use node::{A11yNode, AccessibilityNode, CustomAction};
pub use normalize::normalize;
pub use snapshot::{
    SnapshotStrategy, render_accessibility_snapshot, try_render_accessibility_snapshot,
};
pub use traits::{SemanticTrait, TraitSet, format_traits};

#[cfg(feature = "accessibility")]
pub use accesskit_tree::{AccessKitNode, AccessKitTree};
