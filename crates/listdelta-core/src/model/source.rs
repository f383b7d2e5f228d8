//! Snapshot capture from a host data source.
//!
//! The host surface owns the live data; this contract only asks it to
//! enumerate the current sections and the items of each section. The
//! caller captures once before its mutation and once after, then hands
//! both values to the engine — there is no "pass" parameter and the
//! engine never calls back into the source mid-computation, so a source
//! cannot observe a half-applied mutation.

use crate::model::identity::{ItemIdentity, SectionIdentity};
use crate::model::snapshot::{ItemRecord, SectionRecord, Snapshot};
use chrono::Utc;

/// Capability contract for the component that owns the list data.
pub trait SnapshotSource {
    type Section: SectionIdentity;
    type Item: ItemIdentity;

    /// Current sections, in display order.
    fn sections(&self) -> Vec<Self::Section>;

    /// Current items of the given section, in display order.
    fn items(&self, section: &Self::Section) -> Vec<Self::Item>;
}

impl Snapshot {
    /// Capture the source's current structure as an immutable value.
    ///
    /// Identity uniqueness is not checked here; the engine verifies it
    /// while building its indices and fails loudly on violation.
    pub fn capture<S: SnapshotSource>(source: &S) -> Snapshot {
        let sections = source
            .sections()
            .iter()
            .map(|section| {
                SectionRecord::new(
                    section.identity(),
                    source.items(section).iter().map(ItemRecord::of).collect(),
                )
            })
            .collect();
        Snapshot {
            captured_at: Utc::now(),
            sections,
        }
    }
}
