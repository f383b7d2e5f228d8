use crate::model::IdentityHash;
use thiserror::Error;

/// Result type alias using ListDeltaError
pub type Result<T> = std::result::Result<T, ListDeltaError>;

/// Which snapshot a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Before => write!(f, "before"),
            Side::After => write!(f, "after"),
        }
    }
}

/// Error taxonomy for snapshot reconciliation
///
/// Every failure is surfaced to the caller; the engine never resolves an
/// ambiguous input on its own, and never retries (the computation is
/// deterministic, so a retry would fail identically). Each variant maps
/// to a stable error code via [`ListDeltaError::code`] for programmatic
/// handling and log correlation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListDeltaError {
    /// Two sections in one snapshot share an identity hash.
    ///
    /// Any diff computed over an ambiguous section index would be
    /// unsound, so this is fatal to the call. The snapshot provider
    /// violated its uniqueness contract.
    #[error("duplicate section identity {identity:#018x} in {side} snapshot")]
    DuplicateSectionIdentity { side: Side, identity: IdentityHash },

    /// Two rows within one section share an identity hash.
    #[error(
        "duplicate row identity {identity:#018x} in section {section:#018x} of {side} snapshot"
    )]
    DuplicateRowIdentity {
        side: Side,
        section: IdentityHash,
        identity: IdentityHash,
    },

    /// A section selected for row-level diffing is missing from the
    /// side's section index. Indicates a provider contract violation.
    #[error("section {section:#018x} missing from {side} snapshot index")]
    InconsistentSnapshot { side: Side, section: IdentityHash },

    /// An edit operation addressed a position outside the live structure.
    #[error("{op} index {index} out of bounds (len {len})")]
    IndexOutOfBounds {
        op: &'static str,
        index: usize,
        len: usize,
    },

    /// The engine's self-check failed: replaying the freshly built
    /// script did not reproduce the after snapshot's structure.
    /// Should never occur in correct builds.
    #[error("unsound edit script: {detail}")]
    UnsoundEditScript { detail: String },
}

impl ListDeltaError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ListDeltaError::DuplicateSectionIdentity { .. } => "ERR_DUPLICATE_IDENTITY",
            ListDeltaError::DuplicateRowIdentity { .. } => "ERR_DUPLICATE_IDENTITY",
            ListDeltaError::InconsistentSnapshot { .. } => "ERR_INCONSISTENT_SNAPSHOT",
            ListDeltaError::IndexOutOfBounds { .. } => "ERR_INDEX_OUT_OF_BOUNDS",
            ListDeltaError::UnsoundEditScript { .. } => "ERR_UNSOUND_EDIT_SCRIPT",
        }
    }

    /// Which snapshot the error refers to, where that is meaningful
    pub fn side(&self) -> Option<Side> {
        match self {
            ListDeltaError::DuplicateSectionIdentity { side, .. }
            | ListDeltaError::DuplicateRowIdentity { side, .. }
            | ListDeltaError::InconsistentSnapshot { side, .. } => Some(*side),
            _ => None,
        }
    }
}
