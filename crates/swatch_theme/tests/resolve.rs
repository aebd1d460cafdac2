use pretty_assertions::assert_eq;
use swatch_theme::prelude::*;
use swatch_theme::{cascade, SpecResult, ThemeError};

const TIMING: &str = "150ms cubic-bezier(0.4, 0, 0.2, 1)";

fn light() -> ThemeTokens {
    ThemePreset::Swatch.bundle().into_scheme(ColorScheme::Light)
}

#[test]
fn missing_theme_is_an_error() {
    let styles = create_theme::<ThemeTokens>().styles(|o| o.bg(ColorToken::Surface1));
    assert_eq!(
        styles.render(ThemeProps::none()),
        Err(ThemeError::MissingThemeProvider)
    );
}

#[test]
fn rendering_is_deterministic() {
    let theme = light();
    let styles = create_theme::<ThemeTokens>().styles(|o| {
        style_list![
            o.bg(ColorToken::Surface1),
            o.color(ColorToken::TextPrimary).hover(),
            o.border(BorderToken::Default),
            o.effect(EffectToken::Md).focus(),
            o.padding(Sides::X, SpacingToken::Space4),
        ]
    });

    let first = styles.render(ThemeProps::new(&theme)).unwrap();
    let second = styles.render(ThemeProps::new(&theme)).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        cascade(&first).to_css(".card"),
        cascade(&second).to_css(".card")
    );
}

#[test]
fn blanks_are_filtered_and_transition_comes_last() {
    let theme = light();
    let styles = create_theme::<ThemeTokens>().styles(|o| {
        vec![
            None,
            Some(o.gap(SpacingToken::Space2)),
            None,
            Some(o.width(SizeToken::ControlMd)),
            None,
        ]
    });

    let fragments = styles.render(ThemeProps::new(&theme)).unwrap();
    assert_eq!(fragments.len(), 3);
    assert!(fragments[0].contains("gap"));
    assert!(fragments[1].contains("width"));
    assert!(fragments[2].is_empty());
}

#[test]
fn hover_background_requests_its_transition() {
    let theme = light();
    let styles = create_theme::<ThemeTokens>().styles(|o| [o.bg(ColorToken::Surface3).hover()]);

    let fragments = styles.render(ThemeProps::new(&theme)).unwrap();
    assert_eq!(fragments.len(), 2);

    let expected_bg = theme.colors().get(ColorToken::Surface3).to_css();
    assert_eq!(
        fragments[0],
        CssFragment::new().with(
            "&:hover",
            CssFragment::new().with("background-color", expected_bg)
        )
    );
    assert_eq!(
        fragments[1].get_str("transition"),
        Some(format!("background-color {TIMING}").as_str())
    );
}

#[test]
fn later_contribution_cancels_a_transition() {
    let theme = light();
    let styles = create_theme::<ThemeTokens>().styles(|o| {
        style_list![
            o.color(ColorToken::TextLink),
            o.bg(ColorToken::Surface2),
            o.no_transition(TransitionProperty::Color),
        ]
    });

    let fragments = styles.render(ThemeProps::new(&theme)).unwrap();
    let transition = fragments.last().and_then(|f| f.get_str("transition"));
    assert_eq!(transition, Some(format!("background-color {TIMING}").as_str()));
    // declaration-only entries render nothing
    assert!(fragments[2].is_empty());
}

#[test]
fn explicit_transition_request() {
    let theme = light();
    let styles = create_theme::<ThemeTokens>().styles(|o| {
        style_list![
            o.css(CssFragment::new().with("opacity", 0.8)),
            o.transition(TransitionProperty::Opacity),
            o.color(ColorToken::TextPrimary),
        ]
    });

    let fragments = styles.render(ThemeProps::new(&theme)).unwrap();
    assert_eq!(
        fragments.last().and_then(|f| f.get_str("transition")),
        Some(format!("color {TIMING}, opacity {TIMING}").as_str())
    );
}

#[test]
fn singleton_equals_one_element_list() {
    let theme = light();
    let single = create_theme::<ThemeTokens>().styles(|o| o.border_radius(RadiusToken::Lg));
    let list = create_theme::<ThemeTokens>().styles(|o| vec![o.border_radius(RadiusToken::Lg)]);

    assert_eq!(
        single.render(ThemeProps::new(&theme)).unwrap(),
        list.render(ThemeProps::new(&theme)).unwrap()
    );
}

#[test]
fn radius_is_formatted_once() {
    let theme = light();
    let styles = create_theme::<ThemeTokens>().styles(|o| o.border_radius(RadiusToken::Md));

    let fragments = styles.render(ThemeProps::new(&theme)).unwrap();
    assert_eq!(fragments[0], CssFragment::new().with("border-radius", "8px"));
}

#[test]
fn unit_spec_renders_only_an_empty_transition() {
    let theme = light();
    let styles = create_theme::<ThemeTokens>().styles(|_o| ());
    assert_eq!(
        styles.render(ThemeProps::new(&theme)).unwrap(),
        vec![CssFragment::new()]
    );
}

#[test]
fn conditional_entries() {
    let theme = light();
    for disabled in [false, true] {
        let styles = create_theme::<ThemeTokens>().styles(move |o| {
            style_list![
                o.bg(ColorToken::Primary),
                o.when(disabled, o.css(CssFragment::new().with("opacity", 0.5))),
            ]
        });
        let fragments = styles.render(ThemeProps::new(&theme)).unwrap();
        assert_eq!(fragments.len(), if disabled { 3 } else { 2 });
    }
}

#[test]
fn outline_focus_modifiers() {
    let theme = light();
    let styles = create_theme::<ThemeTokens>().styles(|o| {
        style_list![
            o.outline(OutlineToken::Focus).focus_visible(),
            o.outline_with(OutlineToken::Error, OutlineVariant::new().sides(Sides::Bottom))
                .focus_within(),
        ]
    });

    let fragments = styles.render(ThemeProps::new(&theme)).unwrap();
    assert!(fragments[0]
        .get("&:focus-visible")
        .and_then(|v| v.as_fragment())
        .is_some_and(|f| f.contains("outline")));
    assert!(fragments[1]
        .get("&:focus-within")
        .and_then(|v| v.as_fragment())
        .is_some_and(|f| f.contains("box-shadow")));
    assert_eq!(
        fragments[2].get_str("transition"),
        Some(format!("box-shadow {TIMING}").as_str())
    );
}

#[test]
fn themed_shorthand_and_dyn_theme() {
    let theme = light();
    let dyn_theme: &(dyn Theme + 'static) = &theme;
    let styles = themed::<dyn Theme, _, _>(|o| o.size(SizeToken::IconMd));

    let fragments = styles.render(ThemeProps::new(dyn_theme)).unwrap();
    let icon = theme.sizes().get(SizeToken::IconMd);
    assert_eq!(
        fragments[0].get_str("width"),
        Some(format!("{}px", swatch_core::format_number(icon)).as_str())
    );
}

#[test]
fn explicit_spec_result() {
    let theme = light();
    let styles = create_theme::<ThemeTokens>().styles(|_o| SpecResult::None);
    assert_eq!(styles.render(ThemeProps::new(&theme)).unwrap().len(), 1);
}

#[test]
fn corner_radius_through_the_builder() {
    let theme = light();
    let styles = create_theme::<ThemeTokens>()
        .styles(|o| o.border_radius_on(Corners::Bottom, RadiusToken::Md));

    let fragments = styles.render(ThemeProps::new(&theme)).unwrap();
    assert_eq!(
        fragments,
        vec![
            CssFragment::new()
                .with("border-bottom-right-radius", "8px")
                .with("border-bottom-left-radius", "8px"),
            CssFragment::new(),
        ]
    );
}

#[test]
fn gradient_background_requests_background_transition() {
    let theme = light();
    let styles = create_theme::<ThemeTokens>().styles(|o| o.bg_gradient(GradientToken::Primary));

    let fragments = styles.render(ThemeProps::new(&theme)).unwrap();
    let gradient = theme.gradients().get(GradientToken::Primary).to_css();
    assert_eq!(
        fragments,
        vec![
            CssFragment::new().with("background-image", gradient),
            CssFragment::new().with("transition", format!("background-color {TIMING}")),
        ]
    );
}

#[test]
fn margin_on_one_axis() {
    let theme = light();
    let styles =
        create_theme::<ThemeTokens>().styles(|o| o.margin(Sides::Y, SpacingToken::Space2));

    let fragments = styles.render(ThemeProps::new(&theme)).unwrap();
    let space = swatch_core::units::px_string(theme.spacing().get(SpacingToken::Space2));
    assert_eq!(
        fragments[0],
        CssFragment::new()
            .with("margin-top", space.as_str())
            .with("margin-bottom", space.as_str())
    );
    assert!(fragments[1].is_empty());
}

#[test]
fn gradient_border_requests_border_transition() {
    let theme = light();
    let styles = create_theme::<ThemeTokens>().styles(|o| {
        style_list![
            o.border_with(
                BorderToken::Default,
                BorderVariant::new().sides(Sides::Top).gradient(GradientToken::Accent),
            ),
            o.effect(EffectToken::Sm).hover(),
        ]
    });

    let fragments = styles.render(ThemeProps::new(&theme)).unwrap();
    let gradient = theme.gradients().get(GradientToken::Accent).to_css();
    assert_eq!(
        fragments[0],
        CssFragment::new()
            .with("border-top", "1px solid transparent")
            .with("border-image", format!("{gradient} 1"))
    );
    assert_eq!(
        fragments[2].get_str("transition"),
        Some(format!("border-color {TIMING}, box-shadow {TIMING}").as_str())
    );
}
