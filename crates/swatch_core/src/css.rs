//! CSS fragments
//!
//! A [`CssFragment`] is the unit handed to the host styling runtime: a flat,
//! insertion-ordered mapping from CSS property names to values. Keys that start
//! with `&` (e.g. `&:hover`) hold nested fragments scoped to that selector.
//!
//! Fragments are pure data. Ordering is preserved so that serializing the same
//! fragment twice always yields the same text.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::color::{Color, Gradient};
use crate::units::format_number;

/// A value in a CSS fragment
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssValue {
    Str(String),
    Number(f32),
    Nested(CssFragment),
}

impl CssValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CssValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_fragment(&self) -> Option<&CssFragment> {
        match self {
            CssValue::Nested(fragment) => Some(fragment),
            _ => None,
        }
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssValue::Str(s) => f.write_str(s),
            CssValue::Number(n) => f.write_str(&format_number(*n)),
            CssValue::Nested(fragment) => write!(f, "{{ {} declarations }}", fragment.len()),
        }
    }
}

impl From<String> for CssValue {
    fn from(value: String) -> Self {
        CssValue::Str(value)
    }
}

impl From<&str> for CssValue {
    fn from(value: &str) -> Self {
        CssValue::Str(value.to_string())
    }
}

impl From<f32> for CssValue {
    fn from(value: f32) -> Self {
        CssValue::Number(value)
    }
}

impl From<f64> for CssValue {
    fn from(value: f64) -> Self {
        CssValue::Number(value as f32)
    }
}

impl From<u16> for CssValue {
    fn from(value: u16) -> Self {
        CssValue::Number(value as f32)
    }
}

impl From<Color> for CssValue {
    fn from(value: Color) -> Self {
        CssValue::Str(value.to_css())
    }
}

impl From<&Gradient> for CssValue {
    fn from(value: &Gradient) -> Self {
        CssValue::Str(value.to_css())
    }
}

impl From<CssFragment> for CssValue {
    fn from(value: CssFragment) -> Self {
        CssValue::Nested(value)
    }
}

/// Ordered mapping of CSS property names (or nested selectors) to values
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CssFragment {
    entries: IndexMap<String, CssValue>,
}

impl CssFragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CssValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a declaration. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CssValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&CssValue> {
        self.entries.get(key)
    }

    /// Shorthand for reading a string declaration
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(CssValue::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CssValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Wrap this fragment under a nested selector key, e.g. `&:hover`
    pub fn nest(self, selector: impl Into<String>) -> CssFragment {
        CssFragment::new().with(selector, CssValue::Nested(self))
    }

    /// Merge `other` into `self`, later values winning.
    ///
    /// Nested fragments under the same selector are merged recursively; any
    /// other collision is replaced outright.
    pub fn merge(&mut self, other: CssFragment) {
        for (key, value) in other.entries {
            match (self.entries.get_mut(&key), value) {
                (Some(CssValue::Nested(existing)), CssValue::Nested(incoming)) => {
                    existing.merge(incoming);
                }
                (_, value) => {
                    self.entries.insert(key, value);
                }
            }
        }
    }

    /// Serialize to CSS text under `selector`.
    ///
    /// Nested keys containing `&` have it replaced by the parent selector; other
    /// nested keys are treated as descendant selectors. Empty rule blocks are
    /// omitted.
    pub fn to_css(&self, selector: &str) -> String {
        let mut out = String::new();
        self.write_rules(selector, &mut out);
        out
    }

    fn write_rules(&self, selector: &str, out: &mut String) {
        let declarations: Vec<_> = self
            .entries
            .iter()
            .filter(|(_, value)| !matches!(value, CssValue::Nested(_)))
            .collect();

        if !declarations.is_empty() {
            out.push_str(selector);
            out.push_str(" {\n");
            for (property, value) in declarations {
                out.push_str(&format!("  {property}: {value};\n"));
            }
            out.push_str("}\n");
        }

        for (key, value) in &self.entries {
            if let CssValue::Nested(nested) = value {
                let nested_selector = if key.contains('&') {
                    key.replace('&', selector)
                } else {
                    format!("{selector} {key}")
                };
                nested.write_rules(&nested_selector, out);
            }
        }
    }
}

impl FromIterator<(String, CssValue)> for CssFragment {
    fn from_iter<I: IntoIterator<Item = (String, CssValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Reference left-to-right merge of an ordered fragment list.
///
/// Hosts apply resolved fragments in order; this is that cascade for hosts that
/// want a single fragment, and for tests.
pub fn cascade(fragments: &[CssFragment]) -> CssFragment {
    fragments
        .iter()
        .cloned()
        .fold(CssFragment::new(), |mut acc, fragment| {
            acc.merge(fragment);
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::px;
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_keeps_first_position() {
        let mut fragment = CssFragment::new().with("color", "red").with("padding", px(4.0));
        fragment.insert("color", "blue");

        let keys: Vec<&str> = fragment.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["color", "padding"]);
        assert_eq!(fragment.get_str("color"), Some("blue"));
    }

    #[test]
    fn nest_wraps_under_selector() {
        let hover = CssFragment::new().with("color", "red").nest("&:hover");
        let inner = hover.get("&:hover").and_then(CssValue::as_fragment).unwrap();
        assert_eq!(inner.get_str("color"), Some("red"));
    }

    #[test]
    fn merge_is_deep_for_nested_selectors() {
        let mut base = CssFragment::new()
            .with("color", "red")
            .with("&:hover", CssFragment::new().with("color", "blue").with("opacity", 1.0));
        base.merge(
            CssFragment::new()
                .with("color", "green")
                .with("&:hover", CssFragment::new().with("opacity", 0.5)),
        );

        let expected = CssFragment::new()
            .with("color", "green")
            .with("&:hover", CssFragment::new().with("color", "blue").with("opacity", 0.5));
        assert_eq!(base, expected);
    }

    #[test]
    fn cascade_later_wins() {
        let merged = cascade(&[
            CssFragment::new().with("color", "red").with("margin", px(0.0)),
            CssFragment::new().with("color", "blue"),
        ]);
        assert_eq!(merged.get_str("color"), Some("blue"));
        assert_eq!(merged.get_str("margin"), Some("0px"));
    }

    #[test]
    fn to_css_expands_nested_selectors() {
        let fragment = CssFragment::new()
            .with("color", "#ffffff")
            .with("font-weight", 600u16)
            .with("&:hover", CssFragment::new().with("color", "#000000"))
            .with("&:focus", CssFragment::new());

        assert_eq!(
            fragment.to_css(".button"),
            ".button {\n  color: #ffffff;\n  font-weight: 600;\n}\n.button:hover {\n  color: #000000;\n}\n"
        );
    }
}
