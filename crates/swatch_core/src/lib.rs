//! Swatch Core
//!
//! Foundational value types shared by the Swatch styling crates:
//!
//! - **Colors**: [`Color`] and [`Gradient`] with hex parsing and CSS output
//! - **CSS fragments**: [`CssFragment`], an insertion-ordered mapping from CSS
//!   property names (or nested `&` selectors) to [`CssValue`]s
//! - **Units**: the single [`px`] rule every numeric token goes through
//!
//! # Example
//!
//! ```rust
//! use swatch_core::{px, Color, CssFragment};
//!
//! let fragment = CssFragment::new()
//!     .with("color", Color::from_hex(0x1E66F5))
//!     .with("border-radius", px(8.0));
//!
//! assert_eq!(fragment.get_str("border-radius"), Some("8px"));
//! assert_eq!(fragment.get_str("color"), Some("#1e66f5"));
//! ```

pub mod color;
pub mod css;
pub mod units;

pub use color::{Color, ColorParseError, Gradient, GradientStop};
pub use css::{cascade, CssFragment, CssValue};
pub use units::{format_number, px};
