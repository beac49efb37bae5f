//! Colors for the light and dark themes

use ratatui::style::Color;

use crate::models::Theme;

/// Colors used by every widget
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub card: Color,
    pub dim: Color,
    pub accent: Color,
    pub error: Color,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            background: Color::Rgb(250, 250, 250),
            text: Color::Rgb(17, 21, 23),
            card: Color::Rgb(255, 255, 255),
            dim: Color::Rgb(110, 110, 110),
            accent: Color::Rgb(0, 95, 175),
            error: Color::Rgb(190, 30, 45),
        },
        Theme::Dark => Palette {
            background: Color::Rgb(32, 44, 55),
            text: Color::Rgb(255, 255, 255),
            card: Color::Rgb(43, 57, 69),
            dim: Color::Rgb(170, 170, 170),
            accent: Color::Rgb(120, 200, 255),
            error: Color::Rgb(255, 120, 120),
        },
    }
}

/// Label of the theme toggle: offers the theme you would switch to
pub fn toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "☀ Light Mode",
        Theme::Light => "☾ Dark Mode",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_label_offers_other_theme() {
        assert_eq!(toggle_label(Theme::Light), "☾ Dark Mode");
        assert_eq!(toggle_label(Theme::Dark), "☀ Light Mode");
        assert_ne!(palette(Theme::Light), palette(Theme::Dark));
    }
}
