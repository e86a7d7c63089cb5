//! Test utilities and mock factories.
//!
//! This module provides common testing utilities including mock record
//! factories and a small fixed dataset. Only compiled in test builds.

use crate::config::PickerOptions;
use crate::emoji::{Category, EmojiRecord};
use crate::selection::RankedCandidate;

/// Create a mock EmojiRecord in a static category.
pub fn mock_record(unified: &str, short_names: &[&str], category: Category, sort_order: i64) -> EmojiRecord {
    EmojiRecord {
        unified: unified.to_string(),
        name: None,
        short_name: short_names.first().map(|s| s.to_string()).unwrap_or_default(),
        short_names: short_names.iter().map(|s| s.to_string()).collect(),
        category: category.display_name().to_string(),
        sort_order,
        obsoleted_by: None,
    }
}

/// Create a mock ranked-selection candidate.
pub fn mock_candidate(short_names: &[&str], selected: bool, value: i64) -> RankedCandidate {
    RankedCandidate {
        selected,
        value,
        ..RankedCandidate::new(short_names)
    }
}

/// A small dataset covering every static category.
///
/// Dataset order deliberately differs from sort order in places, and it
/// includes one obsolete record and one record outside the picker's
/// categories.
pub fn mock_dataset() -> Vec<EmojiRecord> {
    let mut obsolete = mock_record("1F3CC", &["golfer"], Category::Activities, 41);
    obsolete.obsoleted_by = Some("1F3CC-FE0F".to_string());

    let mut skin_tone = mock_record("1F3FB", &["skin-tone-2"], Category::People, 90);
    skin_tone.category = "Component".to_string();

    vec![
        mock_record("1F600", &["grinning"], Category::Emotion, 1),
        mock_record("1F605", &["sweat_smile"], Category::Emotion, 3),
        mock_record("1F604", &["smile"], Category::Emotion, 2),
        mock_record("1F642", &["slightly_smiling_face"], Category::Emotion, 4),
        mock_record("1F44B", &["wave"], Category::People, 10),
        mock_record("1F44D", &["+1", "thumbsup"], Category::People, 11),
        mock_record("1F431", &["cat"], Category::Nature, 21),
        mock_record("1F436", &["dog"], Category::Nature, 20),
        mock_record("1F355", &["pizza"], Category::Food, 30),
        mock_record("2615", &["coffee"], Category::Food, 31),
        mock_record("26BD", &["soccer"], Category::Activities, 40),
        obsolete,
        mock_record("2708-FE0F", &["airplane"], Category::Places, 50),
        mock_record("1F4A1", &["bulb"], Category::Objects, 60),
        mock_record("2764-FE0F", &["heart"], Category::Symbols, 70),
        mock_record("1F1FA-1F1F8", &["us", "flag-us"], Category::Flags, 80),
        skin_tone,
    ]
}

/// Create mock picker options with history enabled.
pub fn mock_options() -> PickerOptions {
    PickerOptions {
        show_history: true,
        namespace: "test".to_string(),
        ..PickerOptions::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_record() {
        let record = mock_record("1F600", &["grinning"], Category::Emotion, 1);
        assert_eq!(record.category, "Smileys & Emotion");
        assert_eq!(record.primary_short_name(), "grinning");
    }

    #[test]
    fn test_mock_dataset_covers_statics() {
        let dataset = mock_dataset();
        for category in Category::statics() {
            assert!(
                dataset.iter().any(|r| r.static_category() == Some(category)),
                "missing {:?}",
                category
            );
        }
    }

    #[test]
    fn test_mock_candidate() {
        let candidate = mock_candidate(&["a"], true, 3);
        assert!(candidate.selected);
        assert_eq!(candidate.value, 3);
        assert!(candidate.code.is_none());
    }
}
