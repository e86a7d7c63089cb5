//! Category-partitioned index over the emoji dataset.

use super::category::Category;
use super::record::EmojiRecord;
use std::collections::HashMap;
use tracing::debug;

/// Immutable, category-partitioned index over a dataset.
///
/// Built once per picker mount and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Every dataset record, obsoleted ones included, in dataset order.
    records: Vec<EmojiRecord>,
    /// Indices into `records` per static category, sorted by `sort_order`.
    partitions: HashMap<Category, Vec<usize>>,
}

/// Build a catalog from raw dataset records.
///
/// Obsoleted records stay searchable but are left out of the category
/// partitions. Each static category is sorted by `sort_order`; records
/// sharing a sort key keep dataset order.
pub fn build_catalog(raw: impl IntoIterator<Item = EmojiRecord>) -> Catalog {
    let records: Vec<EmojiRecord> = raw.into_iter().collect();

    let mut partitions: HashMap<Category, Vec<usize>> = HashMap::new();
    for (idx, record) in records.iter().enumerate() {
        if record.is_obsolete() {
            continue;
        }
        if let Some(category) = record.static_category() {
            partitions.entry(category).or_default().push(idx);
        }
    }

    for indices in partitions.values_mut() {
        // sort_by_key is stable
        indices.sort_by_key(|&idx| records[idx].sort_order);
    }

    debug!(
        records = records.len(),
        categories = partitions.len(),
        "Built emoji catalog"
    );

    Catalog {
        records,
        partitions,
    }
}

impl Catalog {
    /// Every record in dataset order, for search and ranked matching.
    pub fn records(&self) -> &[EmojiRecord] {
        &self.records
    }

    /// Records of one category in display order.
    ///
    /// Synthetic categories and categories with no records yield nothing.
    pub fn category(&self, category: Category) -> impl Iterator<Item = &EmojiRecord> + '_ {
        self.partitions
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&idx| &self.records[idx])
    }

    /// Number of records in a category.
    pub fn category_len(&self, category: Category) -> usize {
        self.partitions.get(&category).map(Vec::len).unwrap_or(0)
    }

    /// Look up a record by its `unified` identity.
    pub fn find(&self, unified: &str) -> Option<&EmojiRecord> {
        self.records
            .iter()
            .find(|r| r.unified.eq_ignore_ascii_case(unified))
    }

    /// Total number of records, obsoleted ones included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{mock_dataset, mock_record};

    #[test]
    fn test_obsoleted_kept_out_of_partitions() {
        let mut obsolete = mock_record("1F3CC", &["golfer"], Category::Activities, 5);
        obsolete.obsoleted_by = Some("1F3CC-FE0F".to_string());
        let catalog = build_catalog(vec![
            obsolete,
            mock_record("26BD", &["soccer"], Category::Activities, 1),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.category_len(Category::Activities), 1);
        assert!(
            !catalog
                .category(Category::Activities)
                .any(|r| r.unified == "1F3CC")
        );
        assert!(catalog.find("1F3CC").is_some_and(|r| r.is_obsolete()));
    }

    #[test]
    fn test_category_sorted_by_sort_order() {
        let catalog = build_catalog(vec![
            mock_record("1F603", &["smiley"], Category::Emotion, 3),
            mock_record("1F600", &["grinning"], Category::Emotion, 1),
            mock_record("1F604", &["smile"], Category::Emotion, 2),
        ]);

        let order: Vec<_> = catalog
            .category(Category::Emotion)
            .map(|r| r.unified.as_str())
            .collect();
        assert_eq!(order, vec!["1F600", "1F604", "1F603"]);
    }

    #[test]
    fn test_ties_keep_dataset_order() {
        let catalog = build_catalog(vec![
            mock_record("A", &["a"], Category::Objects, 7),
            mock_record("B", &["b"], Category::Objects, 7),
            mock_record("C", &["c"], Category::Objects, 1),
            mock_record("D", &["d"], Category::Objects, 7),
        ]);

        let order: Vec<_> = catalog
            .category(Category::Objects)
            .map(|r| r.unified.as_str())
            .collect();
        assert_eq!(order, vec!["C", "A", "B", "D"]);
    }

    #[test]
    fn test_unknown_category_not_partitioned() {
        let mut skin_tone = mock_record("1F3FB", &["skin-tone-2"], Category::People, 1);
        skin_tone.category = "Component".to_string();
        let catalog = build_catalog(vec![skin_tone]);

        assert_eq!(catalog.len(), 1);
        assert!(Category::statics().all(|c| catalog.category_len(c) == 0));
    }

    #[test]
    fn test_synthetic_categories_empty() {
        let catalog = build_catalog(mock_dataset());
        assert_eq!(catalog.category(Category::All).count(), 0);
        assert_eq!(catalog.category(Category::History).count(), 0);
    }

    #[test]
    fn test_find_case_insensitive() {
        let catalog = build_catalog(mock_dataset());
        assert!(catalog.find("1f600").is_some());
    }
}
