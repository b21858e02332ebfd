//! Drag interaction phases.
//!
//! The surface only ever sits in one of two phases, and every pointer event
//! maps onto a pure transition here so the cycle can be tested without a
//! rendering backend.

/// Whether a file drag is currently hovering the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    DragActive,
}

/// Pointer events that move the phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragUpdate {
    /// A drag carrying files entered (or keeps hovering) the surface.
    Enter,
    /// The drag left the surface.
    Leave,
    /// Files were dropped, accepted or not.
    Drop,
    /// The drag was abandoned without a drop.
    Cancel,
}

impl DragPhase {
    pub fn apply(self, update: DragUpdate) -> DragPhase {
        match update {
            DragUpdate::Enter => DragPhase::DragActive,
            DragUpdate::Leave | DragUpdate::Drop | DragUpdate::Cancel => DragPhase::Idle,
        }
    }

    pub fn is_active(self) -> bool {
        self == DragPhase::DragActive
    }
}
