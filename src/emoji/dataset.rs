//! Emoji dataset sources.
//!
//! The picker ships with a dataset built from the `emojis` crate. Hosts that
//! want a specific `emoji-datasource` release can load its JSON instead.

use super::codepoint::encode_unified;
use super::record::EmojiRecord;
use crate::error::DatasetError;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info};

/// Lazily built bundled dataset.
static BUNDLED: OnceLock<Vec<EmojiRecord>> = OnceLock::new();

/// The dataset bundled with the crate, in Unicode order.
pub fn bundled() -> &'static [EmojiRecord] {
    BUNDLED.get_or_init(|| {
        let records: Vec<EmojiRecord> = emojis::iter()
            .enumerate()
            .map(|(idx, emoji)| record_from_emoji(idx, emoji))
            .collect();
        debug!(count = records.len(), "Built bundled emoji dataset");
        records
    })
}

/// Convert an `emojis` entry into a dataset record.
fn record_from_emoji(sort_order: usize, emoji: &emojis::Emoji) -> EmojiRecord {
    let mut short_names: Vec<String> = emoji.shortcodes().map(str::to_string).collect();
    if short_names.is_empty() {
        short_names.push(emoji.name().to_lowercase().replace([' ', '-'], "_"));
    }

    EmojiRecord {
        unified: encode_unified(emoji.as_str()),
        name: Some(emoji.name().to_uppercase()),
        short_name: short_names[0].clone(),
        short_names,
        category: group_name(emoji.group()).to_string(),
        sort_order: sort_order as i64,
        obsoleted_by: None,
    }
}

/// Dataset category string for an `emojis` group.
fn group_name(group: emojis::Group) -> &'static str {
    match group {
        emojis::Group::SmileysAndEmotion => "Smileys & Emotion",
        emojis::Group::PeopleAndBody => "People & Body",
        emojis::Group::AnimalsAndNature => "Animals & Nature",
        emojis::Group::FoodAndDrink => "Food & Drink",
        emojis::Group::TravelAndPlaces => "Travel & Places",
        emojis::Group::Activities => "Activities",
        emojis::Group::Objects => "Objects",
        emojis::Group::Symbols => "Symbols",
        emojis::Group::Flags => "Flags",
        #[allow(unreachable_patterns)]
        _ => "Component",
    }
}

/// Parse an `emoji-datasource` style JSON array.
pub fn parse_dataset(json: &str) -> Result<Vec<EmojiRecord>, DatasetError> {
    serde_json::from_str(json).map_err(DatasetError::ParseFailed)
}

/// Load an `emoji-datasource` style JSON file.
pub fn load_dataset(path: &Path) -> Result<Vec<EmojiRecord>, DatasetError> {
    let content = std::fs::read_to_string(path).map_err(DatasetError::ReadFailed)?;
    let records = parse_dataset(&content)?;
    info!(count = records.len(), "Loaded emoji dataset from {:?}", path);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emoji::Category;

    #[test]
    fn test_bundled_contains_grinning() {
        let grinning = bundled()
            .iter()
            .find(|r| r.unified == "1F600")
            .expect("grinning face missing");
        assert_eq!(grinning.static_category(), Some(Category::Emotion));
        assert!(grinning.short_names.iter().any(|n| n == "grinning"));
    }

    #[test]
    fn test_bundled_records_all_land_in_a_tab() {
        assert!(bundled().iter().all(|r| r.static_category().is_some()));
    }

    #[test]
    fn test_bundled_sort_order_is_dataset_order() {
        let records = bundled();
        assert!(!records.is_empty());
        assert!(
            records
                .windows(2)
                .all(|w| w[0].sort_order < w[1].sort_order)
        );
    }

    #[test]
    fn test_parse_dataset_rejects_garbage() {
        assert!(matches!(
            parse_dataset("{not json"),
            Err(DatasetError::ParseFailed(_))
        ));
    }

    #[test]
    fn test_load_dataset_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emoji.json");
        std::fs::write(
            &path,
            r#"[{"unified":"1F600","short_names":["grinning"],"category":"Smileys & Emotion","sort_order":1}]"#,
        )
        .unwrap();

        let records = load_dataset(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].primary_short_name(), "grinning");
    }

    #[test]
    fn test_load_dataset_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_dataset(&dir.path().join("missing.json")),
            Err(DatasetError::ReadFailed(_))
        ));
    }
}
