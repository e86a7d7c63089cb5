//! Picker categories and their tab metadata.

use serde::{Deserialize, Serialize};

/// Picker categories, in tab order.
///
/// `All` is a synthetic aggregate over the static categories and `History`
/// is built from the recently-used log; neither is a dataset partition.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    #[value(alias = "recent")]
    History,
    #[value(alias = "smileys")]
    Emotion,
    People,
    #[value(alias = "animals")]
    Nature,
    Food,
    Activities,
    #[value(alias = "travel")]
    Places,
    Objects,
    Symbols,
    #[value(alias = "flag")]
    Flags,
}

impl Category {
    /// Every category in enumeration order.
    pub const ALL: [Category; 11] = [
        Category::All,
        Category::History,
        Category::Emotion,
        Category::People,
        Category::Nature,
        Category::Food,
        Category::Activities,
        Category::Places,
        Category::Objects,
        Category::Symbols,
        Category::Flags,
    ];

    /// Categories backed by a partition of the dataset, in enumeration order.
    pub fn statics() -> impl Iterator<Item = Category> {
        Self::ALL.into_iter().filter(|c| c.is_static())
    }

    /// Whether this category is a partition of the dataset.
    pub fn is_static(&self) -> bool {
        !matches!(self, Self::All | Self::History)
    }

    /// Lowercase key used in config files and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::History => "history",
            Self::Emotion => "emotion",
            Self::People => "people",
            Self::Nature => "nature",
            Self::Food => "food",
            Self::Activities => "activities",
            Self::Places => "places",
            Self::Objects => "objects",
            Self::Symbols => "symbols",
            Self::Flags => "flags",
        }
    }

    /// Display name. For static categories this is also the dataset's
    /// `category` string.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::History => "Recently used",
            Self::Emotion => "Smileys & Emotion",
            Self::People => "People & Body",
            Self::Nature => "Animals & Nature",
            Self::Food => "Food & Drink",
            Self::Activities => "Activities",
            Self::Places => "Travel & Places",
            Self::Objects => "Objects",
            Self::Symbols => "Symbols",
            Self::Flags => "Flags",
        }
    }

    /// Tab glyph. `All` has no tab.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::History => Some("🕘"),
            Self::Emotion => Some("😀"),
            Self::People => Some("🧑"),
            Self::Nature => Some("🦄"),
            Self::Food => Some("🍔"),
            Self::Activities => Some("⚾️"),
            Self::Places => Some("✈️"),
            Self::Objects => Some("💡"),
            Self::Symbols => Some("🔣"),
            Self::Flags => Some("🏳️‍🌈"),
        }
    }

    /// Parse a category from its key, case-insensitively.
    pub fn parse_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        Self::ALL.into_iter().find(|c| c.key() == lower)
    }

    /// Map a dataset `category` string onto a static category.
    ///
    /// Dataset groups without a picker tab (e.g. "Component") yield `None`.
    pub fn from_dataset_name(name: &str) -> Option<Self> {
        Self::statics().find(|c| c.display_name() == name)
    }
}
