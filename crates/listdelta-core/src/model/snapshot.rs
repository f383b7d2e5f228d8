//! Immutable snapshot value types.
//!
//! A snapshot is a value capture of the full section/item structure at
//! one point in time: an ordered sequence of sections, each an ordered
//! sequence of item records. Snapshots are transient — captured
//! immediately before and after an external mutation, consumed once by
//! the engine, then discarded.
//!
//! `captured_at` is metadata, never semantic: two snapshots with equal
//! structure and attribute signatures are identical to the engine no
//! matter when they were taken. `Snapshot` therefore does not implement
//! `PartialEq`; use [`Snapshot::semantic_eq`] or
//! [`Snapshot::structure_eq`] and say which equality you mean.

use crate::model::identity::{IdentityHash, ItemIdentity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Value record of one item (row) at capture time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Stable identity hash for cross-snapshot matching
    pub identity: IdentityHash,

    /// Optional signature over display-relevant attributes; `None`
    /// disables reload detection for this row
    pub attributes: Option<IdentityHash>,
}

impl ItemRecord {
    /// Record an item through its identity capability.
    pub fn of<I: ItemIdentity>(item: &I) -> Self {
        Self {
            identity: item.identity(),
            attributes: item.attributes_signature(),
        }
    }
}

/// Value record of one section and its ordered items at capture time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRecord {
    /// Identity hash of the section, independent of its items' identities
    pub identity: IdentityHash,

    /// Ordered item records
    pub items: Vec<ItemRecord>,
}

impl SectionRecord {
    pub fn new(identity: IdentityHash, items: Vec<ItemRecord>) -> Self {
        Self { identity, items }
    }
}

/// An immutable capture of the full section/item structure for one pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// When this capture was taken. Metadata only — excluded from both
    /// semantic and structural comparison.
    pub captured_at: DateTime<Utc>,

    /// Ordered sections
    pub sections: Vec<SectionRecord>,
}

impl Snapshot {
    /// Build a snapshot from already-recorded sections, stamped now.
    pub fn from_sections(sections: Vec<SectionRecord>) -> Self {
        Self {
            captured_at: Utc::now(),
            sections,
        }
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of rows across all sections.
    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Full semantic equality: section identities, item identities, and
    /// attribute signatures all match, in order. `captured_at` is
    /// ignored. This is the engine's fast-path check.
    pub fn semantic_eq(&self, other: &Snapshot) -> bool {
        self.sections == other.sections
    }

    /// Structural equality: section/item identity structure and order
    /// match; attribute signatures are ignored. This is what an edit
    /// script is required to reproduce (reloads carry no payload).
    pub fn structure_eq(&self, other: &Snapshot) -> bool {
        self.sections.len() == other.sections.len()
            && self
                .sections
                .iter()
                .zip(other.sections.iter())
                .all(|(a, b)| {
                    a.identity == b.identity
                        && a.items.len() == b.items.len()
                        && a.items
                            .iter()
                            .zip(b.items.iter())
                            .all(|(x, y)| x.identity == y.identity)
                })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item(identity: IdentityHash, attrs: Option<IdentityHash>) -> ItemRecord {
        ItemRecord {
            identity,
            attributes: attrs,
        }
    }

    #[test]
    fn test_semantic_eq_ignores_captured_at() {
        let sections = vec![SectionRecord::new(1, vec![item(10, Some(100))])];
        let mut a = Snapshot::from_sections(sections.clone());
        let mut b = Snapshot::from_sections(sections);
        a.captured_at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        b.captured_at = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        assert!(a.semantic_eq(&b));
    }

    #[test]
    fn test_semantic_eq_sees_attribute_changes() {
        let a = Snapshot::from_sections(vec![SectionRecord::new(1, vec![item(10, Some(100))])]);
        let b = Snapshot::from_sections(vec![SectionRecord::new(1, vec![item(10, Some(200))])]);
        assert!(!a.semantic_eq(&b));
        assert!(a.structure_eq(&b));
    }

    #[test]
    fn test_structure_eq_sees_reordering() {
        let a = Snapshot::from_sections(vec![SectionRecord::new(
            1,
            vec![item(10, None), item(11, None)],
        )]);
        let b = Snapshot::from_sections(vec![SectionRecord::new(
            1,
            vec![item(11, None), item(10, None)],
        )]);
        assert!(!a.structure_eq(&b));
    }

    #[test]
    fn test_row_count_sums_sections() {
        let snap = Snapshot::from_sections(vec![
            SectionRecord::new(1, vec![item(10, None), item(11, None)]),
            SectionRecord::new(2, vec![item(20, None)]),
        ]);
        assert_eq!(snap.section_count(), 2);
        assert_eq!(snap.row_count(), 3);
    }
}
