//! Semantic accessibility traits and their stable textual rendering.

use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

use crate::error::Error;

/// A semantic capability or role flag announced by an assistive reader.
///
/// The declaration order is the canonical order used when a [`TraitSet`]
/// is rendered. New traits are added here and to [`SemanticTrait::ALL`] only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SemanticTrait {
    /// The element's value can be incremented or decremented.
    Adjustable,
    /// Touches are passed straight through to the element.
    AllowsDirectInteraction,
    /// A button.
    Button,
    /// The element turns the page when reading reaches its end.
    CausesPageTurn,
    /// A section header.
    Header,
    /// An image.
    Image,
    /// A keyboard key.
    KeyboardKey,
    /// A hyperlink.
    Link,
    /// The element is disabled.
    NotEnabled,
    /// The element plays its own sound when activated.
    PlaysSound,
    /// A search field.
    SearchField,
    /// The element is currently selected.
    Selected,
    /// Activating the element starts a media session.
    StartsMediaSession,
    /// Static, non-interactive text.
    StaticText,
    /// The element summarises the current state of the screen.
    SummaryElement,
    /// A tab bar.
    TabBar,
    /// The element's value changes often.
    UpdatesFrequently,
}

static_assertions::const_assert!(SemanticTrait::ALL.len() <= u32::BITS as usize);

impl SemanticTrait {
    /// Every trait, in canonical order.
    pub const ALL: [SemanticTrait; 17] = [
        SemanticTrait::Adjustable,
        SemanticTrait::AllowsDirectInteraction,
        SemanticTrait::Button,
        SemanticTrait::CausesPageTurn,
        SemanticTrait::Header,
        SemanticTrait::Image,
        SemanticTrait::KeyboardKey,
        SemanticTrait::Link,
        SemanticTrait::NotEnabled,
        SemanticTrait::PlaysSound,
        SemanticTrait::SearchField,
        SemanticTrait::Selected,
        SemanticTrait::StartsMediaSession,
        SemanticTrait::StaticText,
        SemanticTrait::SummaryElement,
        SemanticTrait::TabBar,
        SemanticTrait::UpdatesFrequently,
    ];

    /// The display token for this trait, e.g. `.button`.
    pub fn token(self) -> &'static str {
        match self {
            SemanticTrait::Adjustable => ".adjustable",
            SemanticTrait::AllowsDirectInteraction => ".allowsDirectInteraction",
            SemanticTrait::Button => ".button",
            SemanticTrait::CausesPageTurn => ".causesPageTurn",
            SemanticTrait::Header => ".header",
            SemanticTrait::Image => ".image",
            SemanticTrait::KeyboardKey => ".keyboardKey",
            SemanticTrait::Link => ".link",
            SemanticTrait::NotEnabled => ".notEnabled",
            SemanticTrait::PlaysSound => ".playsSound",
            SemanticTrait::SearchField => ".searchField",
            SemanticTrait::Selected => ".selected",
            SemanticTrait::StartsMediaSession => ".startsMediaSession",
            SemanticTrait::StaticText => ".staticText",
            SemanticTrait::SummaryElement => ".summaryElement",
            SemanticTrait::TabBar => ".tabBar",
            SemanticTrait::UpdatesFrequently => ".updatesFrequently",
        }
    }

    fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

impl fmt::Display for SemanticTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for SemanticTrait {
    type Err = Error;

    /// Parses a token with or without its leading dot (`.button` or `button`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        let wanted = wanted.strip_prefix('.').unwrap_or(wanted);
        SemanticTrait::ALL
            .into_iter()
            .find(|t| &t.token()[1..] == wanted)
            .ok_or_else(|| Error::UnknownTrait(s.to_string()))
    }
}

/// A set of [`SemanticTrait`]s.
///
/// Iteration always follows the canonical order regardless of how the set
/// was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TraitSet(u32);

impl TraitSet {
    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Add a trait. Returns `true` if it was not already present.
    pub fn insert(&mut self, t: SemanticTrait) -> bool {
        let had = self.contains(t);
        self.0 |= t.bit();
        !had
    }

    /// Remove a trait. Returns `true` if it was present.
    pub fn remove(&mut self, t: SemanticTrait) -> bool {
        let had = self.contains(t);
        self.0 &= !t.bit();
        had
    }

    /// Builder-style insert.
    pub fn with(mut self, t: SemanticTrait) -> Self {
        self.insert(t);
        self
    }

    pub fn contains(&self, t: SemanticTrait) -> bool {
        self.0 & t.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the contained traits in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = SemanticTrait> + '_ {
        SemanticTrait::ALL.into_iter().filter(move |t| self.contains(*t))
    }
}

impl From<SemanticTrait> for TraitSet {
    fn from(t: SemanticTrait) -> Self {
        Self(t.bit())
    }
}

impl FromIterator<SemanticTrait> for TraitSet {
    fn from_iter<I: IntoIterator<Item = SemanticTrait>>(iter: I) -> Self {
        let mut set = TraitSet::empty();
        set.extend(iter);
        set
    }
}

impl Extend<SemanticTrait> for TraitSet {
    fn extend<I: IntoIterator<Item = SemanticTrait>>(&mut self, iter: I) {
        for t in iter {
            self.insert(t);
        }
    }
}

impl BitOr for TraitSet {
    type Output = TraitSet;

    fn bitor(self, rhs: TraitSet) -> TraitSet {
        TraitSet(self.0 | rhs.0)
    }
}

impl BitOr<SemanticTrait> for TraitSet {
    type Output = TraitSet;

    fn bitor(self, rhs: SemanticTrait) -> TraitSet {
        self.with(rhs)
    }
}

impl fmt::Display for TraitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_traits(*self))
    }
}

/// Render a trait set as `.a, .b` in canonical order, or `.none` when empty.
pub fn format_traits(traits: TraitSet) -> String {
    if traits.is_empty() {
        return ".none".to_string();
    }
    traits
        .iter()
        .map(SemanticTrait::token)
        .collect::<Vec<_>>()
        .join(", ")
}
