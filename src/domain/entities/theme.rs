//! Content themes.

use serde::{Deserialize, Serialize};

/// Top-level content category shown in the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Theme {
    #[default]
    Colors,
    Numbers,
    Animals,
}

impl Theme {
    /// Every theme, in selector order.
    pub const ALL: [Self; 3] = [Self::Colors, Self::Numbers, Self::Animals];

    /// Upper-case code used in asset directories.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Colors => "COLORS",
            Self::Numbers => "NUMBERS",
            Self::Animals => "ANIMALS",
        }
    }

    /// Spanish caption for the theme selector.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Colors => "Colores",
            Self::Numbers => "Números",
            Self::Animals => "Animales",
        }
    }

    /// Cover image of the theme button.
    #[must_use]
    pub const fn cover_image(self) -> &'static str {
        match self {
            Self::Colors => "colors.jpg",
            Self::Numbers => "numbers.jpg",
            Self::Animals => "animals.jpg",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
