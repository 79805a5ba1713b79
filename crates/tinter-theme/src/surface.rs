//! Applying a theme to a visual surface.
//!
//! The theme pipeline is pure; this is the one place a [`Theme`] meets
//! something stateful. A [`Surface`] receives the declarations wholesale,
//! an optional transition directive, and the dark-mode flag. Callers drive
//! a surface from a single thread of control; there is no locking here.

use tinter_color::ColorValue;
use tracing::debug;

use crate::theme::{StyleDeclaration, Theme, generate_css_color};

/// Something a theme can be painted onto.
pub trait Surface {
    /// Replace the surface's style variables with `declarations`.
    fn apply_declarations(&mut self, declarations: &[StyleDeclaration]);

    /// Tag the next repaint with a transition effect.
    fn set_transition(&mut self, transition: &str);

    /// Switch dark mode on or off.
    fn set_dark(&mut self, dark: bool);
}

/// Push `theme` onto `surface`.
pub fn apply_theme<S: Surface + ?Sized>(surface: &mut S, theme: &Theme, transition: Option<&str>) {
    if let Some(transition) = transition {
        surface.set_transition(transition);
    }
    surface.apply_declarations(&theme.css_variables);
    surface.set_dark(theme.is_dark());
    debug!(
        declarations = theme.css_variables.len(),
        dark = theme.is_dark(),
        ?transition,
        "applied theme to surface"
    );
}

/// Derive the theme for `value` and apply it to `surface` in one step.
///
/// Returns the theme so callers can inspect what was applied.
pub fn calculate_color<S: Surface + ?Sized>(
    surface: &mut S,
    value: &ColorValue,
    transition: Option<&str>,
) -> Theme {
    let theme = generate_css_color(value);
    apply_theme(surface, &theme, transition);
    theme
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
