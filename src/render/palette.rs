use crossterm::style::Color;

use crate::particles::{Ink, Shade};

use super::Style;

/// blue, cyan, green, yellow, orange, red, magenta, purple, white
static EXTENDED_RAINBOW: [Color; 9] = [
    Color::AnsiValue(21),
    Color::AnsiValue(51),
    Color::AnsiValue(46),
    Color::AnsiValue(226),
    Color::AnsiValue(202),
    Color::AnsiValue(196),
    Color::AnsiValue(201),
    Color::AnsiValue(93),
    Color::AnsiValue(231),
];

/// The rainbow for terminals limited to the eight standard colors.
static BASIC_RAINBOW: [Color; 7] = [
    Color::DarkBlue,
    Color::DarkCyan,
    Color::DarkGreen,
    Color::DarkYellow,
    Color::DarkRed,
    Color::DarkMagenta,
    Color::Grey,
];

/// Resolves shades into concrete terminal styles.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Palette {
    mono: Option<Color>,
    rainbow: &'static [Color],
}

impl Palette {
    /// Rainbow colors are drawn over this background.
    pub const BACKGROUND: Color = Color::Black;

    /// The 256-color palette.
    pub fn extended() -> Self {
        Self {
            mono: Some(Color::DarkGreen),
            rainbow: &EXTENDED_RAINBOW,
        }
    }

    pub fn basic() -> Self {
        Self {
            mono: Some(Color::DarkGreen),
            rainbow: &BASIC_RAINBOW,
        }
    }

    /// No colors at all. Every particle is drawn with the terminal's
    /// defaults.
    pub fn uncolored() -> Self {
        Self {
            mono: None,
            rainbow: &[],
        }
    }

    /// Pick the richest palette a terminal with `color_count` colors can
    /// show.
    pub fn for_color_count(color_count: u16) -> Self {
        if color_count >= 256 {
            Self::extended()
        } else if color_count >= 8 {
            Self::basic()
        } else {
            Self::uncolored()
        }
    }

    /// Pick a palette for the attached terminal.
    pub fn detect() -> Self {
        let color_count = crossterm::style::available_color_count();
        log::debug!("Terminal advertises {} colors", color_count);
        Self::for_color_count(color_count)
    }

    pub fn is_colored(&self) -> bool {
        self.mono.is_some()
    }

    /// The number of rainbow colors. The last one is white.
    pub fn rainbow_len(&self) -> usize {
        self.rainbow.len()
    }

    pub fn rainbow(&self) -> &'static [Color] {
        self.rainbow
    }

    /// The style to draw a shade with, or None when the shade is not drawn
    /// this frame.
    pub fn style(&self, shade: &Shade) -> Option<Style> {
        if !shade.visible {
            return None;
        }
        if !self.is_colored() {
            return Some(Style::PLAIN);
        }

        let (foreground, background) = match shade.ink {
            Ink::Mono => (self.mono, None),
            Ink::Rainbow(index) => (
                self.rainbow_color(index),
                Some(Self::BACKGROUND),
            ),
            Ink::White => (
                self.rainbow_color(usize::MAX),
                Some(Self::BACKGROUND),
            ),
        };
        Some(Style {
            foreground,
            background,
            bold: shade.emphasis.bold,
            dim: shade.emphasis.dim,
            blink: shade.emphasis.blink,
        })
    }

    fn rainbow_color(&self, index: usize) -> Option<Color> {
        let last = self.rainbow.len().checked_sub(1)?;
        Some(self.rainbow[index.min(last)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::{Emphasis, Zone};

    fn shade(ink: Ink, emphasis: Emphasis, visible: bool) -> Shade {
        Shade {
            zone: Zone::Disk,
            ink,
            emphasis,
            visible,
        }
    }

    #[test]
    fn palette_follows_color_support() {
        assert_eq!(Palette::for_color_count(256).rainbow_len(), 9);
        assert_eq!(Palette::for_color_count(u16::MAX).rainbow_len(), 9);
        assert_eq!(Palette::for_color_count(16).rainbow_len(), 7);
        assert_eq!(Palette::for_color_count(8).rainbow_len(), 7);
        assert!(!Palette::for_color_count(2).is_colored());
    }

    #[test]
    fn mono_uses_the_default_background() {
        let style = Palette::basic()
            .style(&shade(Ink::Mono, Emphasis::BOLD, true))
            .unwrap();
        assert_eq!(style.foreground, Some(Color::DarkGreen));
        assert_eq!(style.background, None);
        assert!(style.bold);
    }

    #[test]
    fn white_is_the_last_rainbow_entry() {
        let palette = Palette::extended();
        let style = palette
            .style(&shade(Ink::White, Emphasis::BOLD_BLINK, true))
            .unwrap();
        assert_eq!(style.foreground, Some(Color::AnsiValue(231)));
        assert_eq!(style.background, Some(Color::Black));
        assert!(style.blink);

        let first = palette
            .style(&shade(Ink::Rainbow(0), Emphasis::DIM, true))
            .unwrap();
        assert_eq!(first.foreground, Some(Color::AnsiValue(21)));
        assert!(first.dim);
    }

    #[test]
    fn hidden_shades_have_no_style() {
        let palette = Palette::extended();
        assert_eq!(
            palette.style(&shade(Ink::Rainbow(3), Emphasis::NONE, false)),
            None
        );
    }

    #[test]
    fn uncolored_palette_ignores_ink() {
        let style = Palette::uncolored()
            .style(&shade(Ink::Rainbow(4), Emphasis::BOLD, true))
            .unwrap();
        assert_eq!(style, Style::PLAIN);
    }
}
