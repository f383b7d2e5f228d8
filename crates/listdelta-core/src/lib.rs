//! ListDelta Core - Snapshot reconciliation for sectioned list surfaces
//!
//! This crate computes the minimal ordered edit script that transforms one
//! snapshot of a sectioned list (sections of rows, each carrying a stable
//! identity hash) into another. It provides:
//! - Identity capability contracts for sections and items
//! - Immutable snapshot value types and capture from a data source
//! - The reconciliation engine (LCS-based move minimization)
//! - An edit-script model with the canonical delete/insert/move/reload order
//! - A reference apply function for consumers and self-checks
//! - Structured error and logging facilities
//!
//! The engine is pure and synchronous: two snapshots in, one edit script
//! out. Rendering, persistence, and scheduling live with the caller.

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use diff::{apply_edit_script, diff, diff_with_context, render_summary};
pub use diff::{EditOp, EditScript, RowAddress};
pub use errors::{ListDeltaError, Result, Side};
pub use model::{
    IdentityHash, ItemIdentity, ItemRecord, SectionIdentity, SectionRecord, Snapshot,
    SnapshotSource,
};
