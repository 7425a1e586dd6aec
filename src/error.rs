use thiserror::Error;

/// Errors for the few operations the editor refuses outright.
///
/// Expected edge cases (mutating an unknown element id, undo/redo at the
/// log boundary) are silent no-ops and never reach this type.
#[derive(Debug, Error)]
pub enum EditorError {
    /// A history restore referenced an entry that is not in the log
    #[error("history entry {0} not found")]
    UnknownHistoryEntry(uuid::Uuid),

    /// A snapshot failed validation (duplicate element ids); the live
    /// document is left unchanged
    #[error("snapshot is corrupt: duplicate element id {0}")]
    CorruptSnapshot(u64),

    /// The export payload could not be serialized
    #[error("failed to serialize export payload: {0}")]
    Export(#[from] serde_json::Error),
}
