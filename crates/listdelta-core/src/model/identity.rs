//! Identity capability contracts for sections and items.
//!
//! The engine matches entities across two snapshots purely by identity
//! hash: equal hashes mean "the same logical entity", regardless of
//! position. Hashes are opaque to the engine — equality comparison only,
//! no ordering semantics — and no default hashing is provided centrally;
//! each concrete section/item type supplies its own.

/// Stable identity hash for matching entities across snapshots.
///
/// Uniqueness is only required within one snapshot's scope: among
/// sections, and among items within the same section. A collision
/// between conceptually different entities is treated as equality;
/// that ambiguity is inherent to a hash-based identity scheme.
pub type IdentityHash = u64;

/// Capability contract for a section.
pub trait SectionIdentity {
    /// Identity hash of this section, independent of its contained items.
    fn identity(&self) -> IdentityHash;
}

/// Capability contract for an item (row).
pub trait ItemIdentity {
    /// Identity hash computed from the item's semantically-unique
    /// attributes. Two rows for the same underlying entity must return
    /// the same hash even when display-relevant attributes differ.
    fn identity(&self) -> IdentityHash;

    /// Secondary hash over mutable, display-relevant attributes.
    ///
    /// Returning `None` (the default) disables reload detection for
    /// this item: an identity match alone then implies "no visible
    /// change". When both snapshots supply a signature for the same
    /// identity and the signatures differ, the engine emits a reload
    /// in place instead of treating the row as unchanged.
    fn attributes_signature(&self) -> Option<IdentityHash> {
        None
    }
}
