//! View resolution: mapping picker state to the ordered emoji to render.

use crate::emoji::{Catalog, Category, EmojiRecord};
use crate::history::HistoryLog;
use crate::selection::{Annotation, RankedSelection};
use std::collections::HashSet;
use tracing::debug;

/// One cell of the resolved grid.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewItem<'a> {
    /// Rendering identity (`unified`), unique within a view.
    pub key: &'a str,
    pub emoji: &'a EmojiRecord,
    /// Ranked-selection overlay, only set in ranked views.
    pub annotation: Option<Annotation>,
}

/// Inputs to view resolution.
#[derive(Clone, Copy, Debug)]
pub struct ViewState<'a> {
    pub category: Category,
    pub search_query: &'a str,
    pub history: &'a HistoryLog,
    pub catalog: &'a Catalog,
    pub ranked_selection: Option<&'a RankedSelection>,
    /// Cap on the number of emoji shown; `None` or `Some(0)` disables it.
    pub max_per_category: Option<usize>,
    /// Reverse the final list (for layouts growing right to left).
    pub reverse_order: bool,
}

/// Which resolution branch applies to a state, in precedence order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    /// `all` with no query: every static category concatenated.
    Aggregate,
    /// Non-empty query over the whole dataset.
    Search,
    /// The recently-used log.
    History,
    /// First N records of the active category.
    Capped,
    /// Dataset records matching the ranked selection, best first.
    Ranked,
    /// A ranked selection was supplied but is empty; nothing to show yet.
    AwaitingSelection,
    /// The active category in catalog order.
    Category,
}

impl ViewState<'_> {
    fn cap(&self) -> Option<usize> {
        self.max_per_category.filter(|&n| n > 0)
    }

    /// Classify this state.
    pub fn kind(&self) -> ViewKind {
        let has_query = !self.search_query.is_empty();

        if self.category == Category::All && !has_query {
            return ViewKind::Aggregate;
        }
        if has_query {
            return ViewKind::Search;
        }
        if self.category == Category::History {
            return ViewKind::History;
        }

        match (self.ranked_selection, self.cap()) {
            (None, Some(_)) => ViewKind::Capped,
            (Some(ranked), Some(_)) if !ranked.is_empty() => ViewKind::Ranked,
            (Some(ranked), _) if ranked.is_empty() => ViewKind::AwaitingSelection,
            _ => ViewKind::Category,
        }
    }
}

/// Resolve the ordered, key-unique list of emoji to render.
pub fn resolve_view<'a>(state: &ViewState<'a>) -> Vec<ViewItem<'a>> {
    let kind = state.kind();
    let catalog = state.catalog;

    let mut items: Vec<ViewItem<'a>> = match kind {
        ViewKind::Aggregate => plain(
            Category::statics().flat_map(move |category| catalog.category(category)),
        ),
        ViewKind::Search => {
            let needle = state.search_query.to_lowercase();
            let mut matches: Vec<&EmojiRecord> = catalog
                .records()
                .iter()
                .filter(|record| record.alias_contains(&needle))
                .collect();
            matches.sort_by_key(|record| record.sort_order);
            plain(matches)
        }
        ViewKind::History => plain(state.history.records()),
        ViewKind::Capped => plain(
            catalog
                .category(state.category)
                .take(state.cap().unwrap_or(usize::MAX)),
        ),
        ViewKind::Ranked => ranked(state),
        ViewKind::AwaitingSelection => Vec::new(),
        ViewKind::Category => plain(catalog.category(state.category)),
    };

    if state.reverse_order {
        items.reverse();
    }

    debug!(?kind, count = items.len(), "Resolved emoji view");
    items
}

/// Annotated records matching the ranked selection, highest value first.
fn ranked<'a>(state: &ViewState<'a>) -> Vec<ViewItem<'a>> {
    let Some(selection) = state.ranked_selection else {
        return Vec::new();
    };

    let mut annotated: Vec<(&'a EmojiRecord, Annotation)> = state
        .catalog
        .records()
        .iter()
        .filter_map(|record| selection.annotation_for(record).map(|a| (record, a)))
        .collect();

    // Stable: equal values keep dataset order
    annotated.sort_by(|a, b| b.1.value.cmp(&a.1.value));

    let mut items = dedupe(annotated.into_iter().map(|(emoji, annotation)| ViewItem {
        key: emoji.unified.as_str(),
        emoji,
        annotation: Some(annotation),
    }));
    items.truncate(state.cap().unwrap_or(usize::MAX));
    items
}

fn plain<'a>(records: impl IntoIterator<Item = &'a EmojiRecord>) -> Vec<ViewItem<'a>> {
    dedupe(records.into_iter().map(|emoji| ViewItem {
        key: emoji.unified.as_str(),
        emoji,
        annotation: None,
    }))
}

/// Keep the first item for each key.
fn dedupe<'a>(items: impl Iterator<Item = ViewItem<'a>>) -> Vec<ViewItem<'a>> {
    let mut seen = HashSet::new();
    items.filter(|item| seen.insert(item.key)).collect()
}
