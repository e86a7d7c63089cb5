//! Picker lifecycle state machine.

use tracing::debug;

/// Lifecycle of a mounted picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerState {
    /// Created, not yet mounted.
    #[default]
    Uninitialized,
    /// Mounted, waiting for the layout width.
    Measuring,
    /// Catalog built and grid measured.
    Indexed,
    /// Accepting taps, searches and tab changes.
    Ready,
    /// Indexed, but the ranked selection is empty; shows a loader until
    /// candidates arrive.
    AwaitingSelection,
}

/// Inputs driving state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    /// The widget was mounted.
    Mounted,
    /// A layout width was measured and the catalog indexed.
    Indexed,
    /// Indexing finished; `awaiting` if the ranked selection is empty.
    Settled { awaiting: bool },
    /// The caller supplied a ranked selection.
    RankedSelectionChanged { empty: bool },
}

impl PickerState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Measuring => "measuring",
            Self::Indexed => "indexed",
            Self::Ready => "ready",
            Self::AwaitingSelection => "awaiting-selection",
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Whether the catalog has been built.
    pub fn is_indexed(&self) -> bool {
        matches!(self, Self::Indexed | Self::Ready | Self::AwaitingSelection)
    }

    /// Apply an event. Events that do not apply in the current state leave
    /// it unchanged.
    pub fn transition(self, event: PickerEvent) -> Self {
        let next = match (self, event) {
            (Self::Uninitialized, PickerEvent::Mounted) => Self::Measuring,
            // A new layout width re-measures from any mounted state
            (
                Self::Measuring | Self::Indexed | Self::Ready | Self::AwaitingSelection,
                PickerEvent::Indexed,
            ) => Self::Indexed,
            (Self::Indexed, PickerEvent::Settled { awaiting: false }) => Self::Ready,
            (Self::Indexed, PickerEvent::Settled { awaiting: true }) => Self::AwaitingSelection,
            (Self::Ready, PickerEvent::RankedSelectionChanged { empty: true }) => {
                Self::AwaitingSelection
            }
            (Self::AwaitingSelection, PickerEvent::RankedSelectionChanged { empty: false }) => {
                Self::Ready
            }
            (state, _) => state,
        };

        if next != self {
            debug!(from = self.name(), to = next.name(), ?event, "Picker state changed");
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let state = PickerState::default()
            .transition(PickerEvent::Mounted)
            .transition(PickerEvent::Indexed)
            .transition(PickerEvent::Settled { awaiting: false });
        assert_eq!(state, PickerState::Ready);
    }

    #[test]
    fn test_layout_before_mount_ignored() {
        let state = PickerState::Uninitialized.transition(PickerEvent::Indexed);
        assert_eq!(state, PickerState::Uninitialized);
    }

    #[test]
    fn test_empty_ranked_selection_retracts_ready() {
        let state = PickerState::Ready.transition(PickerEvent::RankedSelectionChanged { empty: true });
        assert_eq!(state, PickerState::AwaitingSelection);
        assert!(!state.is_ready());

        let state = state.transition(PickerEvent::RankedSelectionChanged { empty: true });
        assert_eq!(state, PickerState::AwaitingSelection);

        let state = state.transition(PickerEvent::RankedSelectionChanged { empty: false });
        assert_eq!(state, PickerState::Ready);
    }

    #[test]
    fn test_ranked_selection_ignored_while_measuring() {
        let state = PickerState::Measuring.transition(PickerEvent::RankedSelectionChanged { empty: true });
        assert_eq!(state, PickerState::Measuring);
    }

    #[test]
    fn test_relayout_reindexes() {
        let state = PickerState::Ready.transition(PickerEvent::Indexed);
        assert_eq!(state, PickerState::Indexed);
        assert!(state.is_indexed());
    }
}
