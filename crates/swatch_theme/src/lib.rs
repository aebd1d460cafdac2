//! Swatch Theme System
//!
//! Typed design-token styling. A style spec is a closure that receives a
//! [`StyleBuilder`] and returns declarations built from theme tokens:
//!
//! ```ignore
//! use swatch_theme::prelude::*;
//!
//! let card = create_theme::<ThemeTokens>().styles(|o| {
//!     style_list![
//!         o.bg(ColorToken::Surface1),
//!         o.bg(ColorToken::Surface3).hover(),
//!         o.padding(Sides::All, SpacingToken::Space4),
//!         o.border_radius(RadiusToken::Md),
//!     ]
//! });
//!
//! let theme = ThemePreset::Swatch.bundle().into_scheme(ColorScheme::Light);
//! let fragments = card.render(ThemeProps::new(&theme))?;
//! ```
//!
//! Rendering runs in two passes. Every declaration first contributes to a
//! shared [`StyleContext`]; then each one renders against the complete
//! context. This is how the hover background above ends up in the base
//! `transition` rule that is appended after the user's declarations.
//!
//! # Token Categories
//!
//! - **Colors** and **gradient colors**
//! - **Typography**: families, sizes, weights, line heights
//! - **Spacing** and **sizes**
//! - **Borders**, **border radii** and **outlines**
//! - **Element effects**: shadows and transition timing

pub mod accessors;
pub mod builder;
pub mod config;
pub mod context;
pub mod descriptor;
pub mod error;
pub mod modifier;
pub mod presets;
pub mod resolve;
pub mod spec;
pub mod styled;
pub mod theme;
pub mod themes;
pub mod tokens;

mod transition;

pub use accessors::{BorderVariant, Corners, Edge, OutlineVariant, Paint, Sides};
pub use builder::StyleBuilder;
pub use config::{FontConfig, ThemeConfig, TransitionConfig};
pub use context::{ContextKey, Contribution, StyleContext, TransitionProperty};
pub use descriptor::Descriptor;
pub use error::{ConfigError, ThemeError};
pub use modifier::{FocusState, InteractionState, Modified, StateSet};
pub use presets::{preset_bundle, ThemePreset};
pub use resolve::resolve;
pub use spec::{IntoSpecResult, SpecEntry, SpecResult};
pub use styled::{create_theme, themed, ThemeFactory, ThemeProps, Themed};
pub use theme::{ColorScheme, Theme, ThemeBundle, ThemeTokens};
pub use themes::SwatchTheme;
pub use tokens::*;

pub use swatch_core::{cascade, Color, CssFragment, CssValue, Gradient};

/// Everything a style spec usually needs
pub mod prelude {
    pub use crate::style_list;
    pub use crate::{
        create_theme, themed, BorderVariant, ColorScheme, Corners, CssFragment, Descriptor,
        FocusState, InteractionState, OutlineVariant, Sides, Theme, ThemePreset, ThemeProps,
        ThemeTokens, TransitionProperty,
    };
    pub use crate::tokens::*;
}
