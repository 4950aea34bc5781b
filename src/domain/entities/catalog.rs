//! Static content catalog.
//!
//! Every (theme, item, language) triple resolves to exactly one
//! [`ContentTile`]. Labels and sounds are exhaustive matches over closed
//! enums, so adding a language without translating every item fails to
//! compile.

use std::fmt;

use super::{Language, Theme};

/// Relative path of a pronunciation clip under the assets directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SoundRef(String);

impl SoundRef {
    /// Returns the relative asset path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SoundRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Relative path of a tile picture under the assets directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageRef(&'static str);

impl ImageRef {
    /// Returns the relative asset path.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One learnable thing, independent of language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Item {
    Red,
    Blue,
    Green,
    Pink,
    One,
    Two,
    Three,
    Four,
    Dog,
    Cat,
    Lion,
    Dinosaur,
}

const COLORS: [Item; 4] = [Item::Red, Item::Blue, Item::Green, Item::Pink];
const NUMBERS: [Item; 4] = [Item::One, Item::Two, Item::Three, Item::Four];
const ANIMALS: [Item; 4] = [Item::Dog, Item::Cat, Item::Lion, Item::Dinosaur];

impl Item {
    /// Theme this item belongs to.
    #[must_use]
    pub const fn theme(self) -> Theme {
        match self {
            Self::Red | Self::Blue | Self::Green | Self::Pink => Theme::Colors,
            Self::One | Self::Two | Self::Three | Self::Four => Theme::Numbers,
            Self::Dog | Self::Cat | Self::Lion | Self::Dinosaur => Theme::Animals,
        }
    }

    /// Lower-case identifier used in asset names.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Pink => "pink",
            Self::One => "one",
            Self::Two => "two",
            Self::Three => "three",
            Self::Four => "four",
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::Lion => "lion",
            Self::Dinosaur => "dinosaur",
        }
    }

    /// Localized label.
    #[must_use]
    pub const fn label(self, language: Language) -> &'static str {
        use Language::{En, Es, Pr};

        match (self, language) {
            (Self::Red, Es) => "Rojo",
            (Self::Red, En) => "Red",
            (Self::Red, Pr) => "Vermelho",
            (Self::Blue, Es | Pr) => "Azul",
            (Self::Blue, En) => "Blue",
            (Self::Green, Es | Pr) => "Verde",
            (Self::Green, En) => "Green",
            (Self::Pink, Es | Pr) => "Rosa",
            (Self::Pink, En) => "Pink",
            (Self::One, Es) => "Uno",
            (Self::One, En) => "One",
            (Self::One, Pr) => "Um",
            (Self::Two, Es) => "Dos",
            (Self::Two, En) => "Two",
            (Self::Two, Pr) => "Três",
            (Self::Three, Es) => "Tres",
            (Self::Three, En) => "Three",
            (Self::Three, Pr) => "Três",
            (Self::Four, Es) => "Cuatro",
            (Self::Four, En) => "Four",
            (Self::Four, Pr) => "Quatro",
            (Self::Dog, Es) => "Perro",
            (Self::Dog, En) => "Dog",
            (Self::Dog, Pr) => "O cão",
            (Self::Cat, Es | Pr) => "Gato",
            (Self::Cat, En) => "Cat",
            (Self::Lion, Es) => "León",
            (Self::Lion, En) => "Lion",
            (Self::Lion, Pr) => "Leão",
            (Self::Dinosaur, Es) => "Dinosaurio",
            (Self::Dinosaur, En) => "Dinosaur",
            (Self::Dinosaur, Pr) => "Dinossauro",
        }
    }

    /// Pronunciation clip for the given language.
    #[must_use]
    pub fn sound(self, language: Language) -> SoundRef {
        SoundRef(format!(
            "audio/{}/{}-{}.m4a",
            self.theme().code(),
            language.code(),
            self.slug()
        ))
    }

    /// Picture shown on the tile. Shared across languages.
    #[must_use]
    pub const fn image(self) -> ImageRef {
        ImageRef(match self {
            Self::Red => "colors/red.webp",
            Self::Blue => "colors/blue.jpeg",
            Self::Green => "colors/green.webp",
            Self::Pink => "colors/pink.webp",
            Self::One => "numbers/one.png",
            Self::Two => "numbers/two.png",
            Self::Three => "numbers/three.png",
            Self::Four => "numbers/four.png",
            Self::Dog => "animals/dog.jpeg",
            Self::Cat => "animals/cat.jpeg",
            Self::Lion => "animals/lion.jpeg",
            Self::Dinosaur => "animals/dinosaur.jpeg",
        })
    }

    /// Builds the tile for this item in the given language.
    #[must_use]
    pub fn tile(self, language: Language) -> ContentTile {
        ContentTile {
            item: self,
            sound: self.sound(language),
            image: self.image(),
            label: self.label(language),
        }
    }
}

impl Theme {
    /// Items of this theme, in display order.
    #[must_use]
    pub const fn items(self) -> &'static [Item] {
        match self {
            Self::Colors => &COLORS,
            Self::Numbers => &NUMBERS,
            Self::Animals => &ANIMALS,
        }
    }
}

/// One selectable unit of content for a theme and language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTile {
    /// Language-independent item.
    pub item: Item,
    /// Pronunciation clip.
    pub sound: SoundRef,
    /// Picture.
    pub image: ImageRef,
    /// Localized label.
    pub label: &'static str,
}

/// Returns the full, ordered tile set for a theme in a language.
#[must_use]
pub fn tiles(theme: Theme, language: Language) -> Vec<ContentTile> {
    theme
        .items()
        .iter()
        .map(|item| item.tile(language))
        .collect()
}
