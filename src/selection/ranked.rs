//! Caller-owned ranked selection ("my emoji") state.

use crate::emoji::EmojiRecord;
use serde::{Deserialize, Serialize};

/// One entry of a caller's ranked selection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    /// Aliases matched exactly against dataset `short_names`.
    pub short_names: Vec<String>,
    /// Whether this candidate is the current pick.
    #[serde(default)]
    pub selected: bool,
    /// Score; rises on select, falls on deselect.
    #[serde(default)]
    pub value: i64,
    /// Opaque caller identity, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<serde_json::Value>,
}

impl RankedCandidate {
    /// Create an unselected candidate with a zero score.
    pub fn new(short_names: &[&str]) -> Self {
        Self {
            short_names: short_names.iter().map(|s| s.to_string()).collect(),
            selected: false,
            value: 0,
            code: None,
        }
    }

    fn select(&mut self) {
        self.selected = true;
        self.value += 1;
    }

    fn deselect(&mut self) {
        self.selected = false;
        self.value -= 1;
    }
}

/// Selection state overlaid onto a catalog record at view time.
///
/// Catalog records are never mutated; views carry this alongside them.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub selected: bool,
    pub value: i64,
    pub code: Option<serde_json::Value>,
}

impl From<&RankedCandidate> for Annotation {
    fn from(candidate: &RankedCandidate) -> Self {
        Self {
            selected: candidate.selected,
            value: candidate.value,
            code: candidate.code.clone(),
        }
    }
}

/// Ordered, caller-owned list of ranked candidates.
///
/// The engine takes it by value and hands back the updated list; the caller
/// decides how to store it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedSelection(Vec<RankedCandidate>);

impl RankedSelection {
    pub fn new(candidates: Vec<RankedCandidate>) -> Self {
        Self(candidates)
    }

    pub fn candidates(&self) -> &[RankedCandidate] {
        &self.0
    }

    pub fn into_candidates(self) -> Vec<RankedCandidate> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Number of candidates currently selected.
    pub fn selected_count(&self) -> usize {
        self.0.iter().filter(|c| c.selected).count()
    }

    /// Annotation for a record, if any candidate shares an alias with it.
    ///
    /// When several candidates match, the last one in list order wins.
    pub fn annotation_for(&self, record: &EmojiRecord) -> Option<Annotation> {
        self.0
            .iter()
            .rev()
            .find(|c| record.shares_alias(&c.short_names))
            .map(Annotation::from)
    }

    /// Apply a tap on the emoji whose primary alias is `short_name`.
    ///
    /// Matching candidates toggle. Every other selected candidate is
    /// deselected, so at most one pick remains afterwards as long as a
    /// single candidate carries the alias.
    pub fn toggle(mut self, short_name: &str) -> Self {
        for candidate in &mut self.0 {
            if candidate.short_names.iter().any(|n| n == short_name) {
                if candidate.selected {
                    candidate.deselect();
                } else {
                    candidate.select();
                }
            } else if candidate.selected {
                candidate.deselect();
            }
        }
        self
    }
}

impl From<Vec<RankedCandidate>> for RankedSelection {
    fn from(candidates: Vec<RankedCandidate>) -> Self {
        Self(candidates)
    }
}
