//! Emoji record data structures.

use super::category::Category;
use super::codepoint::decode_unified;
use crate::error::DecodeError;
use serde::{Deserialize, Serialize};

/// One entry of the static emoji dataset.
///
/// Field names follow the `emoji-datasource` JSON layout so a published
/// dataset file deserializes directly; fields the picker does not use are
/// ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiRecord {
    /// Hyphen-separated hex codepoints, e.g. `1F1FA-1F1F8`.
    pub unified: String,
    /// Descriptive name, e.g. `GRINNING FACE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Primary alias. Falls back to the first of `short_names` when empty.
    #[serde(default)]
    pub short_name: String,
    /// Lowercase search aliases.
    #[serde(default)]
    pub short_names: Vec<String>,
    /// Dataset category string (a [`Category`] display name).
    pub category: String,
    /// Intra-category display order.
    pub sort_order: i64,
    /// Identity of the replacing record, if this one is obsolete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obsoleted_by: Option<String>,
}

impl EmojiRecord {
    /// The primary short name.
    pub fn primary_short_name(&self) -> &str {
        if self.short_name.is_empty() {
            self.short_names.first().map(String::as_str).unwrap_or("")
        } else {
            &self.short_name
        }
    }

    /// The static category this record belongs to, if any.
    pub fn static_category(&self) -> Option<Category> {
        Category::from_dataset_name(&self.category)
    }

    /// Whether a newer record supersedes this one.
    pub fn is_obsolete(&self) -> bool {
        self.obsoleted_by.is_some()
    }

    /// Whether any alias contains `needle` (expected lowercase).
    pub fn alias_contains(&self, needle: &str) -> bool {
        self.short_names.iter().any(|n| n.contains(needle))
    }

    /// Whether any alias equals one of `aliases`.
    pub fn shares_alias(&self, aliases: &[String]) -> bool {
        self.short_names.iter().any(|n| aliases.contains(n))
    }

    /// Decode the displayed glyph.
    pub fn glyph(&self) -> Result<String, DecodeError> {
        decode_unified(&self.unified)
    }
}
