//! Color theme preference.

mod state;

pub use state::{ThemeState, ThemeWatcher, THEME_STORAGE_KEY};

/// Color theme applied to the whole application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Purple,
    DarkGreen,
}

impl Theme {
    /// Stable storage value; also the CSS class of the root element.
    /// Once published, do not rename.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "app_light_theme",
            Self::Dark => "app_dark_theme",
            Self::Purple => "app_purple_theme",
            Self::DarkGreen => "app_dark_green",
        }
    }

    /// Parse a stored value. Unknown values return `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "app_light_theme" => Some(Self::Light),
            "app_dark_theme" => Some(Self::Dark),
            "app_purple_theme" => Some(Self::Purple),
            "app_dark_green" => Some(Self::DarkGreen),
            _ => None,
        }
    }

    /// All variants in cycle order.
    pub fn all() -> &'static [Theme] {
        &[Self::Light, Self::Dark, Self::Purple, Self::DarkGreen]
    }

    /// Next theme in the cycle Light → Dark → Purple → DarkGreen → Light.
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Purple,
            Self::Purple => Self::DarkGreen,
            Self::DarkGreen => Self::Light,
        }
    }

    /// Successor of a possibly unset theme. Unset maps to Light.
    pub fn after(current: Option<Theme>) -> Self {
        current.map_or(Self::Light, Self::next)
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
