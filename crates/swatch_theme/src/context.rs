//! Cross-declaration coordination context
//!
//! Descriptors never see each other directly. The only channel between them is
//! the [`StyleContext`]: every descriptor may contribute entries, the resolver
//! folds all contributions left to right, and every descriptor then renders
//! against the folded result.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// A CSS property the base transition rule can animate
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum TransitionProperty {
    Color,
    BackgroundColor,
    BorderColor,
    BoxShadow,
    Opacity,
    Transform,
}

impl TransitionProperty {
    /// Every property, in the order they appear in the rendered `transition` rule
    pub const ALL: [TransitionProperty; 6] = [
        TransitionProperty::Color,
        TransitionProperty::BackgroundColor,
        TransitionProperty::BorderColor,
        TransitionProperty::BoxShadow,
        TransitionProperty::Opacity,
        TransitionProperty::Transform,
    ];

    pub fn as_css(self) -> &'static str {
        match self {
            TransitionProperty::Color => "color",
            TransitionProperty::BackgroundColor => "background-color",
            TransitionProperty::BorderColor => "border-color",
            TransitionProperty::BoxShadow => "box-shadow",
            TransitionProperty::Opacity => "opacity",
            TransitionProperty::Transform => "transform",
        }
    }
}

/// Known coordination keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ContextKey {
    /// Whether the base transition rule should animate a property
    Transition(TransitionProperty),
}

/// The context entries a single descriptor declares
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Contribution {
    entries: SmallVec<[(ContextKey, bool); 2]>,
}

impl Contribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style entry. Repeating a key keeps both entries; the later wins when folded.
    pub fn set(mut self, key: ContextKey, value: bool) -> Self {
        self.entries.push((key, value));
        self
    }

    /// Request a transition for `property`
    pub fn transition(self, property: TransitionProperty) -> Self {
        self.set(ContextKey::Transition(property), true)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContextKey, bool)> + '_ {
        self.entries.iter().copied()
    }
}

/// Folded context every descriptor renders against
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleContext {
    values: FxHashMap<ContextKey, bool>,
}

impl StyleContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shallow merge: each entry of `contribution` overwrites the current value.
    pub fn merge(&mut self, contribution: &Contribution) {
        for (key, value) in contribution.iter() {
            self.values.insert(key, value);
        }
    }

    /// Value of a key, `false` when nothing declared it
    pub fn flag(&self, key: ContextKey) -> bool {
        self.values.get(&key).copied().unwrap_or(false)
    }

    pub fn transition(&self, property: TransitionProperty) -> bool {
        self.flag(ContextKey::Transition(property))
    }

    /// Properties with a transition requested, in rule order
    pub fn transitions(&self) -> impl Iterator<Item = TransitionProperty> + '_ {
        TransitionProperty::ALL
            .into_iter()
            .filter(|property| self.transition(*property))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_keys_are_false() {
        let cx = StyleContext::new();
        assert!(!cx.transition(TransitionProperty::Color));
        assert_eq!(cx.transitions().count(), 0);
    }

    #[test]
    fn later_contribution_overwrites() {
        let mut cx = StyleContext::new();
        cx.merge(&Contribution::new().transition(TransitionProperty::Color));
        cx.merge(&Contribution::new().set(ContextKey::Transition(TransitionProperty::Color), false));
        assert!(!cx.transition(TransitionProperty::Color));
    }

    #[test]
    fn disjoint_keys_accumulate() {
        let mut cx = StyleContext::new();
        cx.merge(&Contribution::new().transition(TransitionProperty::BoxShadow));
        cx.merge(&Contribution::new().transition(TransitionProperty::Color));
        let enabled: Vec<_> = cx.transitions().collect();
        assert_eq!(
            enabled,
            vec![TransitionProperty::Color, TransitionProperty::BoxShadow]
        );
    }

    #[test]
    fn duplicate_keys_within_one_contribution() {
        let key = ContextKey::Transition(TransitionProperty::Opacity);
        let mut cx = StyleContext::new();
        cx.merge(&Contribution::new().set(key, true).set(key, false));
        assert!(!cx.flag(key));
    }
}
