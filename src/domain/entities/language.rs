//! Supported content languages.

use serde::{Deserialize, Serialize};

/// Language a tile is pronounced and labelled in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Spanish.
    #[default]
    Es,
    /// English.
    En,
    /// Portuguese.
    Pr,
}

impl Language {
    /// Every language, in selector order.
    pub const ALL: [Self; 3] = [Self::Es, Self::En, Self::Pr];

    /// Upper-case code used in asset names.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Es => "ES",
            Self::En => "EN",
            Self::Pr => "PR",
        }
    }

    /// Name shown above the grid. The app chrome is Spanish, so every name is too.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Es => "Español",
            Self::En => "Inglés",
            Self::Pr => "Portugués",
        }
    }

    /// Flag glyph for the language selector.
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Es => "🇪🇸",
            Self::En => "🇬🇧",
            Self::Pr => "🇵🇹",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_spanish() {
        assert_eq!(Language::default(), Language::Es);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Language::Es.display_name(), "Español");
        assert_eq!(Language::En.display_name(), "Inglés");
        assert_eq!(Language::Pr.display_name(), "Portugués");
    }

    #[test]
    fn test_deserialize_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            language: Language,
        }

        let parsed: Wrapper = toml::from_str(r#"language = "pr""#).unwrap();
        assert_eq!(parsed.language, Language::Pr);
    }
}
