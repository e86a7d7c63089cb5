//! Selection effects: glyph decoding and ranked-selection toggling.

mod ranked;

pub use ranked::{Annotation, RankedCandidate, RankedSelection};

use crate::emoji::EmojiRecord;
use crate::error::DecodeError;
use tracing::debug;

/// Result of tapping an emoji.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionEffect {
    /// The decoded glyph.
    pub glyph: String,
    /// The tapped record.
    pub record: EmojiRecord,
    /// Overlay for the tapped record from the updated ranked selection.
    pub annotation: Option<Annotation>,
    /// The updated ranked selection, when ranked mode is active.
    pub ranked_selection: Option<RankedSelection>,
}

/// Apply the effects of tapping `record`.
///
/// Ranked mode is active when `ranked_selection` is given and non-empty.
/// On a decode failure nothing is applied and the ranked selection is
/// dropped with the error; callers that need it back should clone first.
pub fn select_emoji(
    record: &EmojiRecord,
    ranked_selection: Option<RankedSelection>,
) -> Result<SelectionEffect, DecodeError> {
    let glyph = record.glyph()?;

    let ranked_selection = ranked_selection.map(|ranked| {
        if ranked.is_empty() {
            ranked
        } else {
            ranked.toggle(record.primary_short_name())
        }
    });

    let annotation = ranked_selection
        .as_ref()
        .and_then(|ranked| ranked.annotation_for(record));

    debug!(unified = %record.unified, %glyph, "Selected emoji");

    Ok(SelectionEffect {
        glyph,
        record: record.clone(),
        annotation,
        ranked_selection,
    })
}
