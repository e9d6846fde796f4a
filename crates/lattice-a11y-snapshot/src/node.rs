//! The node capability trait consumed by the tree describer.

use crate::traits::{SemanticTrait, TraitSet};

/// A named operation exposed to an assistive reader beyond basic activation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomAction {
    /// The name announced for the action.
    pub name: String,
}

impl CustomAction {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Trait for tree nodes that can be described in an accessibility snapshot.
///
/// The embedding application implements this once per node type of its UI
/// toolkit. The describer only reads through it and never mutates the tree.
///
/// # Default Implementations
///
/// Every attribute method defaults to an unexposed, visible node with no
/// spoken attributes, so adapters only override what their toolkit knows.
///
/// # Example
///
/// ```ignore
/// impl AccessibilityNode for MyView {
///     fn type_name(&self) -> String {
///         "MyApp.ProfileHeader".to_string()
///     }
///
///     fn visit_children(&self, visitor: &mut dyn FnMut(&dyn AccessibilityNode)) {
///         for child in &self.subviews {
///             visitor(child);
///         }
///     }
///
///     fn is_accessibility_element(&self) -> bool {
///         true
///     }
///
///     fn accessibility_label(&self) -> Option<String> {
///         Some(self.title.clone())
///     }
/// }
/// ```
pub trait AccessibilityNode {
    /// Stable, caller-supplied identifier of the node's concrete kind.
    ///
    /// Only used for display.
    fn type_name(&self) -> String;

    /// Call `visitor` once for every child, in natural child order.
    fn visit_children(&self, visitor: &mut dyn FnMut(&dyn AccessibilityNode));

    /// Whether this node is announced as a discrete unit.
    fn is_accessibility_element(&self) -> bool {
        false
    }

    /// Whether this node itself is hidden.
    ///
    /// Ancestors' hidden state is combined by the describer.
    fn is_hidden(&self) -> bool {
        false
    }

    fn accessibility_value(&self) -> Option<String> {
        None
    }

    fn accessibility_label(&self) -> Option<String> {
        None
    }

    fn accessibility_hint(&self) -> Option<String> {
        None
    }

    fn accessibility_traits(&self) -> TraitSet {
        TraitSet::empty()
    }

    fn custom_actions(&self) -> Vec<CustomAction> {
        Vec::new()
    }
}

/// An owned node whose accessibility attributes are supplied directly.
///
/// Useful when the toolkit's tree is first copied into a plain structure,
/// and for building fixtures.
///
/// # Example
///
/// ```
/// use lattice_a11y_snapshot::{A11yNode, SemanticTrait, render_accessibility_snapshot};
///
/// let root = A11yNode::new("Root").with_child(
///     A11yNode::new("Label")
///         .accessible(true)
///         .with_label("Hi")
///         .with_trait(SemanticTrait::StaticText),
/// );
///
/// assert_eq!(
///     render_accessibility_snapshot(&root),
///     "* Root\n  * Label\n  | -label: Hi\n  | -traits: .staticText"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct A11yNode {
    pub type_name: String,
    pub children: Vec<A11yNode>,
    pub is_accessibility_element: bool,
    pub is_hidden: bool,
    pub value: Option<String>,
    pub label: Option<String>,
    pub hint: Option<String>,
    pub traits: TraitSet,
    pub custom_actions: Vec<CustomAction>,
}

impl A11yNode {
    /// Create an unexposed, visible node with no children.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Default::default()
        }
    }

    pub fn with_child(mut self, child: A11yNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = A11yNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Set whether the node is exposed as an accessibility element.
    pub fn accessible(mut self, exposed: bool) -> Self {
        self.is_accessibility_element = exposed;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.is_hidden = hidden;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_trait(mut self, t: SemanticTrait) -> Self {
        self.traits.insert(t);
        self
    }

    pub fn with_traits(mut self, traits: impl IntoIterator<Item = SemanticTrait>) -> Self {
        self.traits.extend(traits);
        self
    }

    pub fn with_action(mut self, name: impl Into<String>) -> Self {
        self.custom_actions.push(CustomAction::new(name));
        self
    }
}

impl AccessibilityNode for A11yNode {
    fn type_name(&self) -> String {
        self.type_name.clone()
    }

    fn visit_children(&self, visitor: &mut dyn FnMut(&dyn AccessibilityNode)) {
        for child in &self.children {
            visitor(child);
        }
    }

    fn is_accessibility_element(&self) -> bool {
        self.is_accessibility_element
    }

    fn is_hidden(&self) -> bool {
        self.is_hidden
    }

    fn accessibility_value(&self) -> Option<String> {
        self.value.clone()
    }

    fn accessibility_label(&self) -> Option<String> {
        self.label.clone()
    }

    fn accessibility_hint(&self) -> Option<String> {
        self.hint.clone()
    }

    fn accessibility_traits(&self) -> TraitSet {
        self.traits
    }

    fn custom_actions(&self) -> Vec<CustomAction> {
        self.custom_actions.clone()
    }
}

static_assertions::assert_impl_all!(A11yNode: Send, Sync);
