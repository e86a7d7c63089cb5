//! Configuration type definitions.

use crate::emoji::Category;
use crate::history::DEFAULT_NAMESPACE;
use serde::{Deserialize, Serialize};

/// Caller-facing picker options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerOptions {
    /// Category shown on mount.
    pub category: Category,
    /// Grid columns.
    pub columns: usize,
    /// Search box placeholder.
    pub placeholder: String,
    /// Accent colour for the active tab and loader.
    pub theme: String,
    /// Show the category tab bar.
    pub show_tabs: bool,
    /// Show the search box.
    pub show_search_bar: bool,
    /// Record and show recently used emoji.
    pub show_history: bool,
    /// Show the category name above the grid.
    pub show_section_titles: bool,
    /// Cap on emoji shown per category; unset or 0 shows everything.
    pub number_of_emojis: Option<usize>,
    /// Lay the grid out as a single horizontally scrolling row.
    pub scroll_horizontal: bool,
    /// Allow the grid to scroll.
    pub scroll_enabled: bool,
    /// Pixels taken off each cell.
    pub reduce_emoji_size_by: f32,
    /// Use the fixed-height frame instead of filling the parent.
    pub adjust_rows: bool,
    /// Render each candidate's value under its emoji.
    pub render_values: bool,
    /// Styles for the value label.
    pub render_value_style: RenderValueStyle,
    /// Cap on accessibility font scaling for value labels.
    pub max_font_size_multiplier: Option<f32>,
    /// Reverse the resolved list.
    pub reverse_order: bool,
    /// Storage namespace for the history key.
    pub namespace: String,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            category: Category::All,
            columns: 6,
            placeholder: "Search...".to_string(),
            theme: "#007AFF".to_string(),
            show_tabs: true,
            show_search_bar: true,
            show_history: false,
            show_section_titles: true,
            number_of_emojis: None,
            scroll_horizontal: false,
            scroll_enabled: true,
            reduce_emoji_size_by: 0.0,
            adjust_rows: false,
            render_values: false,
            render_value_style: RenderValueStyle::default(),
            max_font_size_multiplier: None,
            reverse_order: false,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

/// Value label styles, for unselected and selected candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderValueStyle {
    pub rating_text: TextStyle,
    pub rating_text_selected: TextStyle,
}

impl Default for RenderValueStyle {
    fn default() -> Self {
        Self {
            rating_text: TextStyle {
                color: "#8F8F8F".to_string(),
                font_size: 12.0,
                bold: false,
            },
            rating_text_selected: TextStyle {
                color: "#007AFF".to_string(),
                font_size: 12.0,
                bold: true,
            },
        }
    }
}

impl RenderValueStyle {
    /// Style for a label, by selection state.
    pub fn for_selected(&self, selected: bool) -> &TextStyle {
        if selected {
            &self.rating_text_selected
        } else {
            &self.rating_text
        }
    }
}

/// Minimal text style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub color: String,
    pub font_size: f32,
    #[serde(default)]
    pub bold: bool,
}
