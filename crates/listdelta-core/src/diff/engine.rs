//! Snapshot reconciliation computation.
//!
//! The core entry point is [`diff`], which accepts a before and an after
//! [`Snapshot`] and produces an [`EditScript`].
//!
//! Complexity: O((S + R) log R) for S sections and R total rows —
//! index building and the one-sided deltas are linear; anchor selection
//! is the patience longest-increasing-subsequence pass per scope.

use crate::diff::apply::apply_edit_script;
use crate::diff::lcs;
use crate::diff::model::{EditScript, RowAddress};
use crate::errors::{ListDeltaError, Result, Side};
use crate::model::{IdentityHash, SectionRecord, Snapshot};
use listdelta_core_types::RequestContext;
use std::collections::BTreeMap;
use std::time::Instant;

/// Compute the ordered edit script transforming `before` into `after`.
///
/// Identity matching is positional-independent: entities with equal
/// identity hashes are the same logical entity wherever they sit. The
/// returned script observes the canonical order deletes → inserts →
/// moves → reloads, with deletes in before coordinates and
/// inserts/moves-to/reloads in after coordinates.
///
/// # Errors
///
/// - `DuplicateSectionIdentity` / `DuplicateRowIdentity` — a snapshot
///   side violates the identity uniqueness contract; no script is
///   computable over an ambiguous index
/// - `InconsistentSnapshot` — a matched section vanished from a side's
///   index mid-computation (provider contract violation)
/// - `UnsoundEditScript` — the engine's self-check failed (should never
///   occur in correct builds)
pub fn diff(before: &Snapshot, after: &Snapshot) -> Result<EditScript> {
    diff_with_context(&RequestContext::new(), before, after)
}

/// [`diff`] with the caller's correlation context attached to the
/// emitted start/end/error log events.
///
/// # Errors
///
/// Same as [`diff`].
pub fn diff_with_context(
    ctx: &RequestContext,
    before: &Snapshot,
    after: &Snapshot,
) -> Result<EditScript> {
    let started = Instant::now();
    crate::log_op_start!(
        "diff",
        request_id = %ctx.request_id,
        before_sections = before.section_count(),
        after_sections = after.section_count(),
        before_rows = before.row_count(),
        after_rows = after.row_count()
    );

    match compute(before, after) {
        Ok(script) => {
            crate::log_op_end!(
                "diff",
                duration_ms = started.elapsed().as_millis() as u64,
                request_id = %ctx.request_id,
                op_count = script.len()
            );
            Ok(script)
        }
        Err(err) => {
            crate::log_op_error!(
                "diff",
                err,
                duration_ms = started.elapsed().as_millis() as u64,
                request_id = %ctx.request_id
            );
            Err(err)
        }
    }
}

/// Build the section-identity index for one side.
fn index_sections(snapshot: &Snapshot, side: Side) -> Result<BTreeMap<IdentityHash, usize>> {
    let mut index = BTreeMap::new();
    for (position, section) in snapshot.sections.iter().enumerate() {
        if index.insert(section.identity, position).is_some() {
            return Err(ListDeltaError::DuplicateSectionIdentity {
                side,
                identity: section.identity,
            });
        }
    }
    Ok(index)
}

/// Build the row-identity index for one section.
fn index_rows(section: &SectionRecord, side: Side) -> Result<BTreeMap<IdentityHash, usize>> {
    let mut index = BTreeMap::new();
    for (position, item) in section.items.iter().enumerate() {
        if index.insert(item.identity, position).is_some() {
            return Err(ListDeltaError::DuplicateRowIdentity {
                side,
                section: section.identity,
                identity: item.identity,
            });
        }
    }
    Ok(index)
}

/// Row-identity indices for every section of one side.
fn index_all_rows(snapshot: &Snapshot, side: Side) -> Result<Vec<BTreeMap<IdentityHash, usize>>> {
    snapshot
        .sections
        .iter()
        .map(|section| index_rows(section, side))
        .collect()
}

fn compute(before: &Snapshot, after: &Snapshot) -> Result<EditScript> {
    // Index both sides first: duplicate identities must fail loudly even
    // when the two snapshots are otherwise identical.
    let before_index = index_sections(before, Side::Before)?;
    let after_index = index_sections(after, Side::After)?;
    let before_rows = index_all_rows(before, Side::Before)?;
    let after_rows = index_all_rows(after, Side::After)?;

    // Fast path: semantically identical snapshots need no LCS run.
    if before.semantic_eq(after) {
        return Ok(EditScript::default());
    }

    // Sections present only in before, descending so earlier deletions
    // never shift a later delete's index in a single coordinate space.
    let section_deletes: Vec<usize> = before
        .sections
        .iter()
        .enumerate()
        .filter(|(_, s)| !after_index.contains_key(&s.identity))
        .map(|(position, _)| position)
        .rev()
        .collect();

    // Sections present only in after, ascending.
    let section_inserts: Vec<usize> = after
        .sections
        .iter()
        .enumerate()
        .filter(|(_, s)| !before_index.contains_key(&s.identity))
        .map(|(position, _)| position)
        .collect();

    // Surviving sections in before order, with their after positions.
    let survivors: Vec<(IdentityHash, usize, usize)> = before
        .sections
        .iter()
        .enumerate()
        .filter_map(|(b_idx, s)| after_index.get(&s.identity).map(|&a_idx| (s.identity, b_idx, a_idx)))
        .collect();

    // Survivors off the longest common subsequence of the two orderings
    // must move; members of it are stationary anchors.
    let after_positions: Vec<usize> = survivors.iter().map(|&(_, _, a_idx)| a_idx).collect();
    let section_anchored = lcs::stationary_flags(&after_positions);
    let mut section_moves: Vec<(usize, usize)> = Vec::new();
    for (&(_, from, to), &anchored) in survivors.iter().zip(section_anchored.iter()) {
        if !anchored {
            section_moves.push((from, to));
        }
    }

    // Row pass, surviving sections only: rows of inserted and deleted
    // sections ride along with their section operation. One-sided rows
    // stay candidates until cross-section pairing below. Candidates are
    // FIFO lists per identity because the uniqueness contract is scoped
    // to a single section, not the whole snapshot.
    let mut delete_candidates: BTreeMap<IdentityHash, Vec<RowAddress>> = BTreeMap::new();
    let mut insert_candidates: BTreeMap<IdentityHash, Vec<RowAddress>> = BTreeMap::new();
    let mut row_moves: Vec<(RowAddress, RowAddress)> = Vec::new();
    let mut row_reloads: Vec<RowAddress> = Vec::new();

    for &(identity, b_idx, a_idx) in &survivors {
        let b_section = before
            .sections
            .get(b_idx)
            .ok_or(ListDeltaError::InconsistentSnapshot {
                side: Side::Before,
                section: identity,
            })?;
        let a_section = after
            .sections
            .get(a_idx)
            .ok_or(ListDeltaError::InconsistentSnapshot {
                side: Side::After,
                section: identity,
            })?;
        let b_row_index = &before_rows[b_idx];
        let a_row_index = &after_rows[a_idx];

        for (row, item) in b_section.items.iter().enumerate() {
            if !a_row_index.contains_key(&item.identity) {
                delete_candidates
                    .entry(item.identity)
                    .or_default()
                    .push(RowAddress::new(b_idx, row));
            }
        }
        for (row, item) in a_section.items.iter().enumerate() {
            if !b_row_index.contains_key(&item.identity) {
                insert_candidates
                    .entry(item.identity)
                    .or_default()
                    .push(RowAddress::new(a_idx, row));
            }
        }

        // Surviving rows of this section pair, before order.
        let row_survivors: Vec<(usize, usize)> = b_section
            .items
            .iter()
            .enumerate()
            .filter_map(|(b_row, item)| a_row_index.get(&item.identity).map(|&a_row| (b_row, a_row)))
            .collect();
        let a_row_positions: Vec<usize> = row_survivors.iter().map(|&(_, a_row)| a_row).collect();
        let row_anchored = lcs::stationary_flags(&a_row_positions);

        for (&(b_row, a_row), &anchored) in row_survivors.iter().zip(row_anchored.iter()) {
            if !anchored {
                // A moved row is never also reloaded; the consumer
                // rebinds content when re-inserting the row.
                row_moves.push((RowAddress::new(b_idx, b_row), RowAddress::new(a_idx, a_row)));
            } else if let (Some(old), Some(new)) = (
                b_section.items[b_row].attributes,
                a_section.items[a_row].attributes,
            ) {
                if old != new {
                    row_reloads.push(RowAddress::new(a_idx, a_row));
                }
            }
        }
    }

    // Cross-section pairing: a deleted identity reappearing as an insert
    // in another section in the same pass becomes one spanning move.
    for (identity, deletes) in delete_candidates.iter_mut() {
        if let Some(inserts) = insert_candidates.get_mut(identity) {
            let paired = deletes.len().min(inserts.len());
            for (from, to) in deletes.drain(..paired).zip(inserts.drain(..paired)) {
                row_moves.push((from, to));
            }
        }
    }
    let mut row_deletes: Vec<RowAddress> = delete_candidates.into_values().flatten().collect();
    let mut row_inserts: Vec<RowAddress> = insert_candidates.into_values().flatten().collect();

    // Canonical intra-phase order (see diff::model docs).
    row_deletes.sort_unstable_by(|a, b| b.cmp(a));
    row_inserts.sort_unstable();
    row_moves.sort_unstable();
    row_reloads.sort_unstable();

    let script = EditScript {
        row_deletes,
        section_deletes,
        section_inserts,
        row_inserts,
        section_moves,
        row_moves,
        row_reloads,
    };

    // Self-check: replaying the freshly built script must reproduce the
    // after structure exactly. An unsound script is never returned.
    let rebuilt = apply_edit_script(before, after, &script)?;
    if !rebuilt.structure_eq(after) {
        return Err(ListDeltaError::UnsoundEditScript {
            detail: "replaying the script did not reproduce the after snapshot".to_string(),
        });
    }

    Ok(script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemRecord;

    fn item(identity: IdentityHash) -> ItemRecord {
        ItemRecord {
            identity,
            attributes: None,
        }
    }

    fn snap(sections: Vec<SectionRecord>) -> Snapshot {
        Snapshot::from_sections(sections)
    }

    #[test]
    fn test_index_sections_reports_duplicates() {
        let snapshot = snap(vec![
            SectionRecord::new(1, vec![]),
            SectionRecord::new(1, vec![]),
        ]);
        let err = index_sections(&snapshot, Side::Before).unwrap_err();
        assert_eq!(
            err,
            ListDeltaError::DuplicateSectionIdentity {
                side: Side::Before,
                identity: 1
            }
        );
    }

    #[test]
    fn test_index_rows_reports_duplicates_with_section() {
        let section = SectionRecord::new(9, vec![item(4), item(4)]);
        let err = index_rows(&section, Side::After).unwrap_err();
        assert_eq!(
            err,
            ListDeltaError::DuplicateRowIdentity {
                side: Side::After,
                section: 9,
                identity: 4
            }
        );
    }

    #[test]
    fn test_same_identity_in_two_sections_is_legal() {
        // Uniqueness is scoped per section, not per snapshot.
        let snapshot = snap(vec![
            SectionRecord::new(1, vec![item(4)]),
            SectionRecord::new(2, vec![item(4)]),
        ]);
        assert!(index_all_rows(&snapshot, Side::Before).is_ok());
    }
}
