//! Entry point
//!
//! [`create_theme`] fixes the theme type once; [`ThemeFactory::styles`] (or the
//! shorthand [`themed`]) turns a style spec into a [`Themed`] render function
//! the host calls with whatever theme is in scope.

use std::fmt;
use std::marker::PhantomData;

use swatch_core::CssFragment;

use crate::builder::StyleBuilder;
use crate::error::ThemeError;
use crate::resolve::resolve;
use crate::spec::IntoSpecResult;
use crate::theme::Theme;

/// Props a themed render function receives from the host
pub struct ThemeProps<'a, T: Theme + ?Sized> {
    pub theme: Option<&'a T>,
}

impl<'a, T: Theme + ?Sized> ThemeProps<'a, T> {
    pub fn new(theme: &'a T) -> Self {
        Self { theme: Some(theme) }
    }

    /// Props with no theme in scope
    pub fn none() -> Self {
        Self { theme: None }
    }
}

impl<T: Theme + ?Sized> Clone for ThemeProps<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Theme + ?Sized> Copy for ThemeProps<'_, T> {}

/// A style spec bound to a theme type
pub struct Themed<T: Theme + ?Sized, F> {
    spec: F,
    _theme: PhantomData<fn(&T)>,
}

impl<T: Theme + ?Sized, F> Themed<T, F> {
    /// Run the spec against `props.theme` and resolve it.
    ///
    /// Fails with [`ThemeError::MissingThemeProvider`] before calling the spec
    /// when no theme is in scope.
    pub fn render<R>(&self, props: ThemeProps<'_, T>) -> Result<Vec<CssFragment>, ThemeError>
    where
        F: Fn(&StyleBuilder<'_, T>) -> R,
        R: IntoSpecResult,
    {
        let Some(theme) = props.theme else {
            tracing::debug!("Themed::render - no theme provided");
            return Err(ThemeError::MissingThemeProvider);
        };

        let builder = StyleBuilder::new(theme);
        let result = (self.spec)(&builder).into_spec_result();
        Ok(resolve(theme, result))
    }
}

impl<T: Theme + ?Sized, F> fmt::Debug for Themed<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Themed").finish_non_exhaustive()
    }
}

/// Zero-sized factory fixing the theme type for a family of styles
pub struct ThemeFactory<T: Theme + ?Sized> {
    _theme: PhantomData<fn(&T)>,
}

impl<T: Theme + ?Sized> ThemeFactory<T> {
    pub fn styles<F, R>(&self, spec: F) -> Themed<T, F>
    where
        F: Fn(&StyleBuilder<'_, T>) -> R,
        R: IntoSpecResult,
    {
        Themed {
            spec,
            _theme: PhantomData,
        }
    }
}

impl<T: Theme + ?Sized> Clone for ThemeFactory<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Theme + ?Sized> Copy for ThemeFactory<T> {}

impl<T: Theme + ?Sized> Default for ThemeFactory<T> {
    fn default() -> Self {
        Self {
            _theme: PhantomData,
        }
    }
}

impl<T: Theme + ?Sized> fmt::Debug for ThemeFactory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ThemeFactory")
    }
}

/// Factory for styles over theme type `T`
pub fn create_theme<T: Theme + ?Sized>() -> ThemeFactory<T> {
    ThemeFactory::default()
}

/// Shorthand for `create_theme::<T>().styles(spec)`
pub fn themed<T, F, R>(spec: F) -> Themed<T, F>
where
    T: Theme + ?Sized,
    F: Fn(&StyleBuilder<'_, T>) -> R,
    R: IntoSpecResult,
{
    create_theme::<T>().styles(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeTokens;
    use crate::tokens::ColorToken;

    #[test]
    fn factory_is_zero_sized() {
        assert_eq!(std::mem::size_of::<ThemeFactory<ThemeTokens>>(), 0);
    }

    #[test]
    fn missing_theme_never_calls_the_spec() {
        let called = std::cell::Cell::new(false);
        let styles = themed::<ThemeTokens, _, _>(|o| {
            called.set(true);
            o.color(ColorToken::Primary)
        });

        assert_eq!(styles.render(ThemeProps::none()), Err(ThemeError::MissingThemeProvider));
        assert!(!called.get());
    }
}
