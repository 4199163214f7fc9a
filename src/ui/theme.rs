use ratatui::style::Color;

/// The two palettes of the app, toggled at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Paper,
    Charcoal,
}

impl ColorScheme {
    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Paper => ColorScheme::Charcoal,
            ColorScheme::Charcoal => ColorScheme::Paper,
        }
    }
}

/// Palette colors for one scheme.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub secondary: Color,
    pub accent: Color,
    pub dimmed: Color,
}

impl Theme {
    /// Paper-cream background with ink-black text.
    pub fn paper() -> Self {
        Self {
            background: Color::Rgb(245, 241, 232), // #F5F1E8
            surface: Color::Rgb(253, 251, 247),    // #FDFBF7
            text: Color::Rgb(44, 44, 44),          // #2C2C2C
            secondary: Color::Rgb(90, 90, 90),     // #5A5A5A
            accent: Color::Rgb(196, 30, 58),       // #C41E3A hanko red
            dimmed: Color::Rgb(170, 164, 152),
        }
    }

    /// Charcoal background with paper-cream text.
    pub fn charcoal() -> Self {
        Self {
            background: Color::Rgb(28, 28, 28), // #1C1C1C
            surface: Color::Rgb(42, 42, 42),    // #2A2A2A
            text: Color::Rgb(245, 241, 232),    // #F5F1E8
            secondary: Color::Rgb(200, 196, 188),
            accent: Color::Rgb(196, 30, 58), // #C41E3A hanko red
            dimmed: Color::Rgb(95, 95, 95),
        }
    }

    pub fn of(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Paper => Self::paper(),
            ColorScheme::Charcoal => Self::charcoal(),
        }
    }
}
