//! Picker session: one mounted instance of the emoji grid.
//!
//! Owns the catalog, the recently-used log and the UI state (active tab,
//! search text, ranked selection) and turns UI events into view updates
//! and selection reports. Drawing is left to the host.

mod layout;
mod state;

pub use layout::GridMetrics;
pub use state::{PickerEvent, PickerState};

use crate::config::PickerOptions;
use crate::emoji::{Catalog, Category, EmojiRecord, build_catalog};
use crate::error::PickerError;
use crate::history::{HistoryLog, HistoryOutcome};
use crate::selection::{Annotation, RankedSelection, select_emoji};
use crate::storage::KeyValueStore;
use crate::view::{ViewItem, ViewKind, ViewState, resolve_view};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Type alias for selection callbacks to reduce complexity
type SelectCallback = Arc<dyn Fn(&str, &EmojiRecord, Option<&RankedSelection>) + Send + Sync>;

/// Title shown above search results.
const SEARCH_RESULTS_TITLE: &str = "Search Results";

/// A category tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub category: Category,
    pub symbol: &'static str,
    pub name: &'static str,
    pub active: bool,
}

/// What a tap produced.
#[derive(Debug)]
pub struct Selection {
    /// The decoded glyph.
    pub glyph: String,
    /// The tapped record.
    pub record: EmojiRecord,
    /// Overlay for the tapped record after the tap.
    pub annotation: Option<Annotation>,
    /// The updated ranked selection, when ranked mode is active.
    pub ranked_selection: Option<RankedSelection>,
    /// Effect on the history log.
    pub history: HistoryOutcome,
}

/// A mounted emoji picker backed by a key-value store.
pub struct EmojiPicker<S: KeyValueStore> {
    options: PickerOptions,
    store: S,
    state: PickerState,
    catalog: Catalog,
    metrics: Option<GridMetrics>,
    category: Category,
    search_query: String,
    history: HistoryLog,
    ranked_selection: Option<RankedSelection>,
    on_emoji_selected: Option<SelectCallback>,
}

impl<S: KeyValueStore> EmojiPicker<S> {
    /// Create an unmounted picker.
    pub fn new(options: PickerOptions, store: S) -> Self {
        Self {
            category: options.category,
            options,
            store,
            state: PickerState::default(),
            catalog: Catalog::default(),
            metrics: None,
            search_query: String::new(),
            history: HistoryLog::new(),
            ranked_selection: None,
            on_emoji_selected: None,
        }
    }

    /// Set the selection callback.
    pub fn set_on_emoji_selected(
        &mut self,
        callback: impl Fn(&str, &EmojiRecord, Option<&RankedSelection>) + Send + Sync + 'static,
    ) {
        self.on_emoji_selected = Some(Arc::new(callback));
    }

    /// Mount the picker, loading history when enabled.
    pub async fn mount(&mut self) {
        self.state = self.state.transition(PickerEvent::Mounted);

        if self.options.show_history {
            self.history = HistoryLog::load(&self.store, &self.options.namespace).await;
        }
    }

    /// Handle a measured layout width.
    ///
    /// The catalog is built from `dataset` on the first layout only; later
    /// layouts just recompute the grid metrics.
    pub fn on_layout(&mut self, width: f32, dataset: &[EmojiRecord]) -> Result<(), PickerError> {
        if self.state == PickerState::Uninitialized {
            return Err(PickerError::NotReady(self.state.name()));
        }

        if !self.state.is_indexed() {
            self.catalog = build_catalog(dataset.iter().cloned());
            info!(count = self.catalog.len(), "Indexed emoji catalog");
        }

        self.metrics = Some(GridMetrics::compute(width, &self.options));
        self.state = self.state.transition(PickerEvent::Indexed);
        self.state = self.state.transition(PickerEvent::Settled {
            awaiting: self.awaiting_selection(),
        });
        Ok(())
    }

    /// Replace the caller's ranked selection.
    ///
    /// An empty list makes the picker not-ready until a non-empty one
    /// arrives; `None` turns ranked mode off.
    pub fn set_ranked_selection(&mut self, ranked_selection: Option<RankedSelection>) {
        if self.ranked_selection == ranked_selection {
            return;
        }

        self.ranked_selection = ranked_selection;
        let empty = self.awaiting_selection();
        match self.ranked_selection {
            Some(_) => {
                self.state = self
                    .state
                    .transition(PickerEvent::RankedSelectionChanged { empty });
            }
            None if self.state == PickerState::AwaitingSelection => {
                self.state = PickerState::Ready;
            }
            None => {}
        }
    }

    /// Switch tabs. Ignored until ready; clears the search text.
    pub fn select_category(&mut self, category: Category) -> bool {
        if !self.state.is_ready() {
            debug!(category = category.key(), "Ignoring tab change, picker not ready");
            return false;
        }
        self.category = category;
        self.search_query.clear();
        true
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Inputs for resolving the current view.
    pub fn view_state(&self) -> ViewState<'_> {
        ViewState {
            category: self.category,
            search_query: &self.search_query,
            history: &self.history,
            catalog: &self.catalog,
            ranked_selection: self.ranked_selection.as_ref(),
            max_per_category: self.options.number_of_emojis,
            reverse_order: self.options.reverse_order,
        }
    }

    /// The emoji to render. Empty while not ready.
    pub fn view(&self) -> Vec<ViewItem<'_>> {
        if !self.state.is_ready() {
            return Vec::new();
        }
        let view_state = self.view_state();
        if view_state.kind() == ViewKind::AwaitingSelection {
            return Vec::new();
        }
        resolve_view(&view_state)
    }

    /// Title above the grid.
    pub fn section_title(&self) -> &'static str {
        if self.search_query.is_empty() {
            self.category.display_name()
        } else {
            SEARCH_RESULTS_TITLE
        }
    }

    /// Tabs for every category except `all`.
    pub fn tabs(&self) -> Vec<Tab> {
        Category::ALL
            .into_iter()
            .filter_map(|category| {
                category.symbol().map(|symbol| Tab {
                    category,
                    symbol,
                    name: category.display_name(),
                    active: category == self.category,
                })
            })
            .collect()
    }

    /// Handle a tap on `record`.
    ///
    /// The callback fires before the history write completes. A malformed
    /// codepoint aborts the tap with no state change.
    pub async fn select(&mut self, record: &EmojiRecord) -> Result<Selection, PickerError> {
        if !self.state.is_ready() {
            return Err(PickerError::NotReady(self.state.name()));
        }

        let effect = select_emoji(record, self.ranked_selection.clone())?;
        if effect.ranked_selection.is_some() {
            self.ranked_selection = effect.ranked_selection.clone();
        }

        let recorded = self.options.show_history && self.history.record(record);

        if let Some(callback) = &self.on_emoji_selected {
            callback(&effect.glyph, &effect.record, effect.ranked_selection.as_ref());
        }

        let history = if !self.options.show_history {
            HistoryOutcome::Disabled
        } else if !recorded {
            HistoryOutcome::Unchanged
        } else {
            match self.history.persist(&self.store, &self.options.namespace).await {
                Ok(()) => HistoryOutcome::Recorded,
                Err(e) => {
                    warn!("Failed to persist emoji history: {}", e);
                    HistoryOutcome::WriteFailed(e)
                }
            }
        };

        Ok(Selection {
            glyph: effect.glyph,
            record: effect.record,
            annotation: effect.annotation,
            ranked_selection: effect.ranked_selection,
            history,
        })
    }

    fn awaiting_selection(&self) -> bool {
        self.ranked_selection
            .as_ref()
            .is_some_and(RankedSelection::is_empty)
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn metrics(&self) -> Option<&GridMetrics> {
        self.metrics.as_ref()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn ranked_selection(&self) -> Option<&RankedSelection> {
        self.ranked_selection.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
