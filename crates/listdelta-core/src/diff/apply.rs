//! Reference edit-script consumer.
//!
//! Replays an edit script against the before snapshot and returns the
//! rebuilt snapshot. Edit operations are payload-free, so content for
//! inserted sections and rows is resolved by address from the after
//! snapshot — which is exactly what a live list surface does when it
//! re-queries its data source for inserted index paths.
//!
//! This function serves three purposes: it is the engine's soundness
//! self-check, the completeness oracle in the test suite, and executable
//! documentation of the coordinate conventions a real consumer must
//! follow.

use crate::diff::model::{EditScript, RowAddress};
use crate::errors::{ListDeltaError, Result};
use crate::model::{ItemRecord, SectionRecord, Snapshot};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

fn oob(op: &'static str, index: usize, len: usize) -> ListDeltaError {
    ListDeltaError::IndexOutOfBounds { op, index, len }
}

/// Replay `script` against `before`, resolving inserted content from
/// `after`.
///
/// # Errors
///
/// - `IndexOutOfBounds` — an operation addresses a position outside the
///   snapshot it is indexed against
/// - `UnsoundEditScript` — the operations do not tile the target
///   structure exactly (leftover or missing sections, colliding row
///   targets)
pub fn apply_edit_script(
    before: &Snapshot,
    after: &Snapshot,
    script: &EditScript,
) -> Result<Snapshot> {
    let n_before = before.sections.len();
    let n_after = after.sections.len();

    // Sections leaving their before position: deletions and move origins.
    let mut removed_sections: BTreeSet<usize> = BTreeSet::new();
    for &index in &script.section_deletes {
        if index >= n_before {
            return Err(oob("section delete", index, n_before));
        }
        removed_sections.insert(index);
    }
    let mut moved_sections: BTreeMap<usize, usize> = BTreeMap::new();
    for &(from, to) in &script.section_moves {
        if from >= n_before {
            return Err(oob("section move", from, n_before));
        }
        if to >= n_after {
            return Err(oob("section move", to, n_after));
        }
        removed_sections.insert(from);
        moved_sections.insert(to, from);
    }

    // Rows leaving their before position, grouped per before section.
    let mut removed_rows: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();
    let mut remove_row = |at: RowAddress, op: &'static str| -> Result<()> {
        let section = before.sections.get(at.section).ok_or(oob(op, at.section, n_before))?;
        if at.row >= section.items.len() {
            return Err(oob(op, at.row, section.items.len()));
        }
        removed_rows.entry(at.section).or_default().insert(at.row);
        Ok(())
    };
    for &at in &script.row_deletes {
        remove_row(at, "row delete")?;
    }
    for &(from, _) in &script.row_moves {
        remove_row(from, "row move")?;
    }

    // Rows arriving at an after position: moves carry their before
    // payload, inserts resolve theirs from the after snapshot. The map
    // iterates ascending, so every insertion index is already settled.
    let mut arriving_rows: BTreeMap<RowAddress, ItemRecord> = BTreeMap::new();
    let arrive = |to: RowAddress, item: ItemRecord, arriving: &mut BTreeMap<RowAddress, ItemRecord>| -> Result<()> {
        if arriving.insert(to, item).is_some() {
            return Err(ListDeltaError::UnsoundEditScript {
                detail: format!("two rows target {to}"),
            });
        }
        Ok(())
    };
    for &(from, to) in &script.row_moves {
        if to.section >= n_after {
            return Err(oob("row move", to.section, n_after));
        }
        let item = before.sections[from.section].items[from.row];
        arrive(to, item, &mut arriving_rows)?;
    }
    for &at in &script.row_inserts {
        let section = after.sections.get(at.section).ok_or(oob("row insert", at.section, n_after))?;
        let item = *section
            .items
            .get(at.row)
            .ok_or(oob("row insert", at.row, section.items.len()))?;
        arrive(at, item, &mut arriving_rows)?;
    }

    // Strip departing rows out of every before section.
    let stripped: Vec<SectionRecord> = before
        .sections
        .iter()
        .enumerate()
        .map(|(position, section)| {
            let gone = removed_rows.get(&position);
            let items = section
                .items
                .iter()
                .enumerate()
                .filter(|&(row, _)| gone.map_or(true, |set| !set.contains(&row)))
                .map(|(_, item)| *item)
                .collect();
            SectionRecord::new(section.identity, items)
        })
        .collect();

    // Place sections at their after positions: inserted sections bring
    // their rows implicitly, moved sections carry their stripped rows,
    // and stationary survivors fill the remaining slots in order.
    let inserted: BTreeSet<usize> = script.section_inserts.iter().copied().collect();
    for &index in &inserted {
        if index >= n_after {
            return Err(oob("section insert", index, n_after));
        }
    }
    let mut stationary: VecDeque<&SectionRecord> = stripped
        .iter()
        .enumerate()
        .filter(|&(position, _)| !removed_sections.contains(&position))
        .map(|(_, section)| section)
        .collect();

    let mut result: Vec<SectionRecord> = Vec::with_capacity(n_after);
    for position in 0..n_after {
        if inserted.contains(&position) {
            result.push(after.sections[position].clone());
        } else if let Some(&from) = moved_sections.get(&position) {
            result.push(stripped[from].clone());
        } else if let Some(section) = stationary.pop_front() {
            result.push(section.clone());
        } else {
            return Err(ListDeltaError::UnsoundEditScript {
                detail: format!("no section available for target position {position}"),
            });
        }
    }
    if !stationary.is_empty() {
        return Err(ListDeltaError::UnsoundEditScript {
            detail: format!(
                "{} surviving sections left over after placement",
                stationary.len()
            ),
        });
    }

    for (&to, &item) in &arriving_rows {
        let section = result
            .get_mut(to.section)
            .ok_or(oob("row arrival", to.section, n_after))?;
        if to.row > section.items.len() {
            return Err(oob("row arrival", to.row, section.items.len()));
        }
        section.items.insert(to.row, item);
    }

    // Reloads refresh attributes in place from the after snapshot.
    for &at in &script.row_reloads {
        let fresh = after
            .sections
            .get(at.section)
            .and_then(|s| s.items.get(at.row))
            .copied()
            .ok_or(oob("row reload", at.row, n_after))?;
        let target = result
            .get_mut(at.section)
            .and_then(|s| s.items.get_mut(at.row))
            .ok_or(oob("row reload", at.row, n_after))?;
        *target = fresh;
    }

    Ok(Snapshot {
        captured_at: after.captured_at,
        sections: result,
    })
}
