//! Edit-script output types.
//!
//! Coordinate convention, which consumers depend on to avoid index-shift
//! bugs during batched application: deletes and move origins are
//! before-snapshot coordinates; inserts, move targets, and reloads are
//! after-snapshot coordinates. The canonical application order is all
//! deletes, then all inserts, then all moves, then all reloads.
//!
//! Collections serialize in their stored (deterministic) order.

use serde::{Deserialize, Serialize};

/// Address of one row: section position and row position within it.
///
/// Whether the coordinates refer to the before or the after snapshot
/// depends on the operation carrying the address (see module docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowAddress {
    pub section: usize,
    pub row: usize,
}

impl RowAddress {
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

impl std::fmt::Display for RowAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.section, self.row)
    }
}

/// A single edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditOp {
    /// Delete the row at `at` (before coordinates).
    RowDelete { at: RowAddress },
    /// Delete the section at `index` (before coordinates), rows included.
    SectionDelete { index: usize },
    /// Insert the section at `index` (after coordinates), rows included.
    SectionInsert { index: usize },
    /// Insert a row at `at` (after coordinates).
    RowInsert { at: RowAddress },
    /// Move the section at `from` (before) to `to` (after), rows riding along.
    SectionMove { from: usize, to: usize },
    /// Move the row at `from` (before) to `to` (after), possibly across
    /// sections.
    RowMove { from: RowAddress, to: RowAddress },
    /// Reload the row at `at` (after coordinates) in place: same
    /// identity, changed display attributes.
    RowReload { at: RowAddress },
}

/// The ordered sequence of edit operations produced by one diff.
///
/// Operations are stored grouped by kind; [`EditScript::ops`] and
/// [`EditScript::iter`] yield them in the canonical order deletes →
/// inserts → moves → reloads. Within the delete phase row deletes come
/// first (rows never shift section indices), each kind descending in
/// before coordinates; within the insert phase section inserts come
/// first, each kind ascending in after coordinates. A consumer applying
/// the flattened sequence one-by-one against a live list therefore never
/// sees an index invalidated by an earlier operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditScript {
    /// Row deletions, before coordinates, descending
    pub row_deletes: Vec<RowAddress>,
    /// Section deletions, before coordinates, descending
    pub section_deletes: Vec<usize>,
    /// Section insertions, after coordinates, ascending
    pub section_inserts: Vec<usize>,
    /// Row insertions, after coordinates, ascending
    pub row_inserts: Vec<RowAddress>,
    /// Section moves, before → after coordinates
    pub section_moves: Vec<(usize, usize)>,
    /// Row moves, before → after coordinates, possibly cross-section
    pub row_moves: Vec<(RowAddress, RowAddress)>,
    /// In-place row reloads, after coordinates, ascending
    pub row_reloads: Vec<RowAddress>,
}

impl EditScript {
    /// Total number of operations.
    pub fn len(&self) -> usize {
        self.row_deletes.len()
            + self.section_deletes.len()
            + self.section_inserts.len()
            + self.row_inserts.len()
            + self.section_moves.len()
            + self.row_moves.len()
            + self.row_reloads.len()
    }

    /// True when the diff found nothing to do.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the operations in canonical application order.
    pub fn iter(&self) -> impl Iterator<Item = EditOp> + '_ {
        let deletes = self
            .row_deletes
            .iter()
            .map(|&at| EditOp::RowDelete { at })
            .chain(
                self.section_deletes
                    .iter()
                    .map(|&index| EditOp::SectionDelete { index }),
            );
        let inserts = self
            .section_inserts
            .iter()
            .map(|&index| EditOp::SectionInsert { index })
            .chain(self.row_inserts.iter().map(|&at| EditOp::RowInsert { at }));
        let moves = self
            .section_moves
            .iter()
            .map(|&(from, to)| EditOp::SectionMove { from, to })
            .chain(
                self.row_moves
                    .iter()
                    .map(|&(from, to)| EditOp::RowMove { from, to }),
            );
        let reloads = self.row_reloads.iter().map(|&at| EditOp::RowReload { at });
        deletes.chain(inserts).chain(moves).chain(reloads)
    }

    /// The operations in canonical application order, collected.
    pub fn ops(&self) -> Vec<EditOp> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EditScript {
        EditScript {
            row_deletes: vec![RowAddress::new(0, 2)],
            section_deletes: vec![1],
            section_inserts: vec![0],
            row_inserts: vec![RowAddress::new(2, 0)],
            section_moves: vec![(2, 0)],
            row_moves: vec![(RowAddress::new(0, 0), RowAddress::new(2, 1))],
            row_reloads: vec![RowAddress::new(2, 2)],
        }
    }

    #[test]
    fn test_len_counts_all_groups() {
        assert_eq!(sample().len(), 7);
        assert!(EditScript::default().is_empty());
    }

    #[test]
    fn test_ops_follow_canonical_phase_order() {
        fn phase(op: &EditOp) -> u8 {
            match op {
                EditOp::RowDelete { .. } | EditOp::SectionDelete { .. } => 0,
                EditOp::SectionInsert { .. } | EditOp::RowInsert { .. } => 1,
                EditOp::SectionMove { .. } | EditOp::RowMove { .. } => 2,
                EditOp::RowReload { .. } => 3,
            }
        }
        let ops = sample().ops();
        assert_eq!(ops.len(), 7);
        for pair in ops.windows(2) {
            assert!(phase(&pair[0]) <= phase(&pair[1]));
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let script = sample();
        let json = serde_json::to_string(&script).unwrap();
        let back: EditScript = serde_json::from_str(&json).unwrap();
        assert_eq!(script, back);
    }
}
