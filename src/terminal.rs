// SPDX-License-Identifier: MIT
//
// Terminal surface — renders an applied theme as text.
//
// The surface only records what it was given; `render` turns that into
// bytes. Each declaration prints as `name: value;`, followed by a 24-bit
// background swatch when the value is in `rgb(...)` notation and previews
// are on. Output is accumulated and written once.

use std::io::{self, Write};

use tinter_color::{normalize, parse_rgb};
use tinter_theme::{StyleDeclaration, Surface};

/// Width of a swatch in cells.
const SWATCH_WIDTH: usize = 6;

/// A [`Surface`] that prints to a terminal.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    declarations: Vec<StyleDeclaration>,
    transition: Option<String>,
    dark: bool,
    preview: bool,
}

impl TerminalSurface {
    #[must_use]
    pub fn new(preview: bool) -> Self {
        Self {
            preview,
            ..Self::default()
        }
    }

    /// Write the recorded theme to `w`.
    pub fn render(&self, w: &mut impl Write) -> io::Result<()> {
        let mut buf: Vec<u8> = Vec::with_capacity(1024);

        if let Some(transition) = &self.transition {
            writeln!(buf, "/* transition: {transition} */")?;
        }
        writeln!(buf, "/* mode: {} */", if self.dark { "dark" } else { "light" })?;

        for declaration in &self.declarations {
            write!(buf, "{declaration};")?;
            if self.preview {
                if let Some(rgb) = declaration.value.as_deref().and_then(parse_rgb) {
                    buf.write_all(b" ")?;
                    swatch(&mut buf, to_rgb8(rgb))?;
                }
            }
            buf.write_all(b"\n")?;
        }

        w.write_all(&buf)?;
        w.flush()
    }
}

impl Surface for TerminalSurface {
    fn apply_declarations(&mut self, declarations: &[StyleDeclaration]) {
        self.declarations = declarations.to_vec();
    }

    fn set_transition(&mut self, transition: &str) {
        self.transition = Some(transition.to_string());
    }

    fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_rgb8(rgb: [f64; 3]) -> (u8, u8, u8) {
    let [r, g, b] = normalize(rgb).map(|v| v.clamp(0, 255) as u8);
    (r, g, b)
}

/// Paint a block of background color, then reset SGR.
fn swatch(w: &mut impl Write, (r, g, b): (u8, u8, u8)) -> io::Result<()> {
    write!(w, "\x1b[48;2;{r};{g};{b}m{:width$}\x1b[0m", "", width = SWATCH_WIDTH)
}
