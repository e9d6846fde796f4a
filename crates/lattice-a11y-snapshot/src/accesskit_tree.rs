//! Snapshots of [AccessKit](https://accesskit.dev/) trees.
//!
//! [`AccessKitTree`] indexes a [`TreeUpdate`] so that the nodes it contains
//! can be described like any other [`AccessibilityNode`]. This lets a
//! widget toolkit that already publishes an AccessKit tree snapshot exactly
//! what assistive technologies will see.
//!
//! # Mapping
//!
//! - type name: the node's class name, falling back to its role
//! - exposed: every role except generic containers
//! - value, label, hint: `value`, `label`, `description`
//! - traits: derived from the role plus the disabled/selected states
//! - custom actions: the custom action descriptions
//!
//! # Example
//!
//! ```ignore
//! let tree = AccessKitTree::new(&update)?;
//! let snapshot = render_accessibility_snapshot(&tree.root());
//! ```

use std::collections::HashMap;

use accesskit::{Node, NodeId, Role, TreeUpdate};

use crate::error::{Error, Result};
use crate::logging::targets;
use crate::node::{AccessibilityNode, CustomAction};
use crate::traits::{SemanticTrait, TraitSet};

/// An indexed view over a complete AccessKit tree update.
#[derive(Debug)]
pub struct AccessKitTree<'a> {
    nodes: HashMap<NodeId, &'a Node>,
    root: NodeId,
}

impl<'a> AccessKitTree<'a> {
    /// Index `update`. The update must carry a [`accesskit::Tree`] whose
    /// root node is included in the update.
    pub fn new(update: &'a TreeUpdate) -> Result<Self> {
        let root = update.tree.as_ref().map(|tree| tree.root).ok_or(Error::MissingRoot)?;
        let nodes: HashMap<_, _> = update.nodes.iter().map(|(id, node)| (*id, node)).collect();
        if !nodes.contains_key(&root) {
            return Err(Error::MissingRoot);
        }
        Ok(Self { nodes, root })
    }

    /// The root node of the tree.
    pub fn root(&self) -> AccessKitNode<'_> {
        AccessKitNode {
            tree: self,
            id: self.root,
            node: self.nodes[&self.root],
        }
    }

    /// Look up a node by ID.
    pub fn node(&self, id: NodeId) -> Option<AccessKitNode<'_>> {
        self.nodes.get(&id).map(|&node| AccessKitNode {
            tree: self,
            id,
            node,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A single node of an [`AccessKitTree`].
#[derive(Debug, Clone, Copy)]
pub struct AccessKitNode<'a> {
    tree: &'a AccessKitTree<'a>,
    id: NodeId,
    node: &'a Node,
}

impl AccessKitNode<'_> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn role(&self) -> Role {
        self.node.role()
    }
}

/// Roles that only group other nodes and are never announced themselves.
fn is_container_role(role: Role) -> bool {
    matches!(
        role,
        Role::Unknown
            | Role::GenericContainer
            | Role::Window
            | Role::Group
            | Role::Pane
            | Role::ScrollView
            | Role::List
            | Role::Tree
            | Role::Table
            | Role::TabPanel
            | Role::Toolbar
            | Role::MenuBar
            | Role::Menu
    )
}

fn role_traits(role: Role) -> TraitSet {
    match role {
        Role::Button | Role::CheckBox | Role::RadioButton | Role::MenuItem | Role::Tab => {
            SemanticTrait::Button.into()
        }
        Role::Link => SemanticTrait::Link.into(),
        Role::Image => SemanticTrait::Image.into(),
        Role::Heading => SemanticTrait::Header.into(),
        Role::Label => SemanticTrait::StaticText.into(),
        Role::Slider | Role::SpinButton => SemanticTrait::Adjustable.into(),
        Role::SearchInput => SemanticTrait::SearchField.into(),
        Role::TabList => SemanticTrait::TabBar.into(),
        Role::ProgressIndicator => SemanticTrait::UpdatesFrequently.into(),
        _ => TraitSet::empty(),
    }
}

impl AccessibilityNode for AccessKitNode<'_> {
    fn type_name(&self) -> String {
        match self.node.class_name() {
            Some(class_name) => class_name.to_string(),
            None => format!("{:?}", self.node.role()),
        }
    }

    fn visit_children(&self, visitor: &mut dyn FnMut(&dyn AccessibilityNode)) {
        for &child_id in self.node.children() {
            match self.tree.node(child_id) {
                Some(child) => visitor(&child),
                None => tracing::warn!(
                    target: targets::ACCESSKIT,
                    parent = ?self.id,
                    child = ?child_id,
                    "child node missing from tree update"
                ),
            }
        }
    }

    fn is_accessibility_element(&self) -> bool {
        !is_container_role(self.node.role())
    }

    fn is_hidden(&self) -> bool {
        self.node.is_hidden()
    }

    fn accessibility_value(&self) -> Option<String> {
        self.node.value().map(str::to_string)
    }

    fn accessibility_label(&self) -> Option<String> {
        self.node.label().map(str::to_string)
    }

    fn accessibility_hint(&self) -> Option<String> {
        self.node.description().map(str::to_string)
    }

    fn accessibility_traits(&self) -> TraitSet {
        let mut traits = role_traits(self.node.role());
        if self.node.is_disabled() {
            traits.insert(SemanticTrait::NotEnabled);
        }
        if self.node.is_selected() == Some(true) {
            traits.insert(SemanticTrait::Selected);
        }
        traits
    }

    fn custom_actions(&self) -> Vec<CustomAction> {
        self.node
            .custom_actions()
            .iter()
            .map(|action| CustomAction::new(action.description.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use accesskit::Tree;

    use super::*;
    use crate::snapshot::render_accessibility_snapshot;

    fn update(nodes: Vec<(NodeId, Node)>) -> TreeUpdate {
        TreeUpdate {
            nodes,
            tree: Some(Tree::new(NodeId(0))),
            focus: NodeId(0),
        }
    }

    #[test]
    fn test_snapshot_of_accesskit_tree() {
        let mut window = Node::new(Role::Window);
        window.set_class_name("MainWindow");
        window.set_children(vec![NodeId(1), NodeId(2)]);

        let mut title = Node::new(Role::Label);
        title.set_label("Settings");

        let mut ok = Node::new(Role::Button);
        ok.set_label("Save");
        ok.set_description("Saves your changes");
        ok.set_disabled();
        ok.set_custom_actions(vec![accesskit::CustomAction {
            id: 1,
            description: "Discard".into(),
        }]);

        let update = update(vec![(NodeId(0), window), (NodeId(1), title), (NodeId(2), ok)]);
        let tree = AccessKitTree::new(&update).unwrap();
        assert_eq!(tree.len(), 3);

        assert_eq!(
            render_accessibility_snapshot(&tree.root()),
            "* MainWindow\n\
             \x20 * Label\n\
             \x20 | -label: Settings\n\
             \x20 | -traits: .staticText\n\
             \x20 * Button\n\
             \x20 | -label: Save\n\
             \x20 | -hint: Saves your changes\n\
             \x20 | -traits: .button, .notEnabled\n\
             \x20 | -action: Discard"
        );
    }

    #[test]
    fn test_hidden_and_selected() {
        let mut root = Node::new(Role::GenericContainer);
        root.set_children(vec![NodeId(1)]);
        let mut tab = Node::new(Role::Tab);
        tab.set_label("General");
        tab.set_selected(true);
        tab.set_hidden();

        let update = update(vec![(NodeId(0), root), (NodeId(1), tab)]);
        let tree = AccessKitTree::new(&update).unwrap();
        assert_eq!(
            render_accessibility_snapshot(&tree.root()),
            "* GenericContainer\n  o Tab\n  o -label: General\n  o -traits: .button, .selected"
        );
    }

    #[test]
    fn test_missing_child_is_skipped() {
        let mut root = Node::new(Role::GenericContainer);
        root.set_children(vec![NodeId(7)]);
        let update = update(vec![(NodeId(0), root)]);
        let tree = AccessKitTree::new(&update).unwrap();
        assert_eq!(render_accessibility_snapshot(&tree.root()), "* GenericContainer");
    }

    #[test]
    fn test_missing_root() {
        let update = TreeUpdate {
            nodes: vec![(NodeId(1), Node::new(Role::Button))],
            tree: Some(Tree::new(NodeId(0))),
            focus: NodeId(1),
        };
        assert!(matches!(AccessKitTree::new(&update), Err(Error::MissingRoot)));

        let update = TreeUpdate {
            nodes: vec![(NodeId(1), Node::new(Role::Button))],
            tree: None,
            focus: NodeId(1),
        };
        assert!(matches!(AccessKitTree::new(&update), Err(Error::MissingRoot)));
    }

    #[test]
    fn test_container_roles_are_not_exposed() {
        let update = update(vec![(NodeId(0), Node::new(Role::Group))]);
        let tree = AccessKitTree::new(&update).unwrap();
        assert!(!tree.root().is_accessibility_element());
        assert_eq!(tree.root().role(), Role::Group);
        assert_eq!(tree.root().id(), NodeId(0));
    }
}
