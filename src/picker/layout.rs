//! Grid sizing derived from the measured width.

use crate::config::PickerOptions;
use crate::emoji::Category;

/// Extra cell height reserved for the value label.
const VALUE_LABEL_HEIGHT: f32 = 15.0;

/// Cell and tab sizes for a measured width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    /// Measured container width.
    pub width: f32,
    /// Columns the grid lays out (1 when scrolling horizontally).
    pub columns: usize,
    /// Square cell edge, already reduced.
    pub cell_size: f32,
    /// Cell height, including the value label when shown.
    pub cell_height: f32,
    /// Whole-pixel size reduction added back to the cell width.
    pub reduce_by: f32,
    /// Edge of each category tab.
    pub tab_size: f32,
}

impl GridMetrics {
    pub fn compute(width: f32, options: &PickerOptions) -> Self {
        let columns = options.columns.max(1);
        let cell_size = (width / columns as f32 - options.reduce_emoji_size_by)
            .floor()
            .max(0.0);
        let cell_height = if options.render_values {
            cell_size + VALUE_LABEL_HEIGHT
        } else {
            cell_size
        };

        Self {
            width,
            columns: if options.scroll_horizontal { 1 } else { columns },
            cell_size,
            cell_height,
            reduce_by: options.reduce_emoji_size_by.floor(),
            tab_size: width / Category::ALL.len() as f32,
        }
    }

    /// Cell width as laid out.
    pub fn cell_width(&self) -> f32 {
        self.cell_size + self.reduce_by
    }

    /// Glyph font size inside a cell.
    pub fn glyph_font_size(&self) -> f32 {
        (self.cell_size - 12.0).max(0.0)
    }

    /// Rows needed for `count` emoji.
    pub fn row_count(&self, count: usize) -> usize {
        count.div_ceil(self.columns)
    }
}
