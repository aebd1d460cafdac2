//! What a style spec may return
//!
//! Specs can hand back nothing, a single declaration, or a list whose entries
//! may be blank. All of these become a [`SpecResult`], and flattening it is
//! the one place that turns spec output into the ordered descriptor list.

use crate::descriptor::Descriptor;
use crate::modifier::{Modified, StateSet};

/// Normalized spec output
#[derive(Debug, Default)]
pub enum SpecResult {
    #[default]
    None,
    One(Descriptor),
    /// Ordered entries; `None` entries are blanks and get dropped
    Many(Vec<Option<Descriptor>>),
}

impl SpecResult {
    /// Ordered descriptors with blanks removed
    pub(crate) fn flatten(self) -> Vec<Descriptor> {
        match self {
            SpecResult::None => Vec::new(),
            SpecResult::One(descriptor) => vec![descriptor],
            SpecResult::Many(entries) => entries.into_iter().flatten().collect(),
        }
    }
}

/// A single list entry: a declaration or a blank
pub trait SpecEntry {
    fn into_entry(self) -> Option<Descriptor>;
}

impl SpecEntry for Descriptor {
    fn into_entry(self) -> Option<Descriptor> {
        Some(self)
    }
}

impl<S: StateSet> SpecEntry for Modified<S> {
    fn into_entry(self) -> Option<Descriptor> {
        Some(self.plain())
    }
}

impl<D: SpecEntry> SpecEntry for Option<D> {
    fn into_entry(self) -> Option<Descriptor> {
        self.and_then(SpecEntry::into_entry)
    }
}

/// Anything a style spec can return
pub trait IntoSpecResult {
    fn into_spec_result(self) -> SpecResult;
}

impl IntoSpecResult for SpecResult {
    fn into_spec_result(self) -> SpecResult {
        self
    }
}

impl IntoSpecResult for () {
    fn into_spec_result(self) -> SpecResult {
        SpecResult::None
    }
}

impl IntoSpecResult for Descriptor {
    fn into_spec_result(self) -> SpecResult {
        SpecResult::One(self)
    }
}

impl<S: StateSet> IntoSpecResult for Modified<S> {
    fn into_spec_result(self) -> SpecResult {
        SpecResult::One(self.plain())
    }
}

impl<D: SpecEntry> IntoSpecResult for Option<D> {
    fn into_spec_result(self) -> SpecResult {
        match self.into_entry() {
            Some(descriptor) => SpecResult::One(descriptor),
            None => SpecResult::None,
        }
    }
}

impl<D: SpecEntry> IntoSpecResult for Vec<D> {
    fn into_spec_result(self) -> SpecResult {
        SpecResult::Many(self.into_iter().map(SpecEntry::into_entry).collect())
    }
}

impl<D: SpecEntry, const N: usize> IntoSpecResult for [D; N] {
    fn into_spec_result(self) -> SpecResult {
        SpecResult::Many(self.into_iter().map(SpecEntry::into_entry).collect())
    }
}

/// Build a [`SpecResult`] from entries of mixed types.
///
/// Each entry may be a [`Descriptor`], a [`Modified`] or an `Option` of either.
///
/// ```ignore
/// themed(|o| style_list![
///     o.bg(ColorToken::Surface1).hover(),
///     o.padding(Sides::All, SpacingToken::Space4),
///     o.when(disabled, o.css(CssFragment::new().with("opacity", 0.5))),
/// ])
/// ```
#[macro_export]
macro_rules! style_list {
    ($($entry:expr),* $(,)?) => {
        $crate::SpecResult::Many(::std::vec![$($crate::SpecEntry::into_entry($entry)),*])
    };
}
