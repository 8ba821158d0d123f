//! Edit cycle phases.

/// Where the engine is within one text-change notification cycle.
///
/// A cycle always runs `Idle → Before → OnChanged → After → Idle`. A
/// notification that arrives out of order (including the host echoing the
/// engine's own write while in `After`) is skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EditPhase {
    /// No edit in progress
    #[default]
    Idle,
    /// Removed range has been processed
    Before,
    /// Inserted text has been processed
    OnChanged,
    /// Masked text is being applied to the host
    After,
}

impl EditPhase {
    /// The phase a notification must find the engine in to run
    pub fn accepts(&self, next: EditPhase) -> bool {
        matches!(
            (self, next),
            (EditPhase::Idle, EditPhase::Before)
                | (EditPhase::Before, EditPhase::OnChanged)
                | (EditPhase::OnChanged, EditPhase::After)
        )
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditPhase::Idle)
    }
}
