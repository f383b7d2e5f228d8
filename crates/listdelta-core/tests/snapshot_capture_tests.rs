//! Snapshot capture tests: a source's enumeration order and signatures
//! survive capture, and back-to-back captures are semantically equal.

use listdelta_core::diff::diff;
use listdelta_core::{
    IdentityHash, ItemIdentity, SectionIdentity, Snapshot, SnapshotSource,
};

struct Section {
    id: IdentityHash,
}

impl SectionIdentity for Section {
    fn identity(&self) -> IdentityHash {
        self.id
    }
}

struct Row {
    id: IdentityHash,
    attrs: Option<IdentityHash>,
}

impl ItemIdentity for Row {
    fn identity(&self) -> IdentityHash {
        self.id
    }

    fn attributes_signature(&self) -> Option<IdentityHash> {
        self.attrs
    }
}

struct Board {
    lanes: Vec<(IdentityHash, Vec<(IdentityHash, Option<IdentityHash>)>)>,
}

impl SnapshotSource for Board {
    type Section = Section;
    type Item = Row;

    fn sections(&self) -> Vec<Section> {
        self.lanes.iter().map(|&(id, _)| Section { id }).collect()
    }

    fn items(&self, section: &Section) -> Vec<Row> {
        self.lanes
            .iter()
            .find(|&&(id, _)| id == section.id)
            .map(|(_, rows)| {
                rows.iter()
                    .map(|&(id, attrs)| Row { id, attrs })
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn board() -> Board {
    Board {
        lanes: vec![
            (1, vec![(10, Some(1)), (11, None)]),
            (2, vec![(20, Some(2))]),
            (3, vec![]),
        ],
    }
}

#[test]
fn test_capture_preserves_enumeration_order() {
    let snap = Snapshot::capture(&board());
    assert_eq!(snap.section_count(), 3);
    assert_eq!(snap.row_count(), 3);
    let identities: Vec<_> = snap.sections.iter().map(|s| s.identity).collect();
    assert_eq!(identities, vec![1, 2, 3]);
    assert_eq!(snap.sections[0].items[0].identity, 10);
    assert_eq!(snap.sections[0].items[0].attributes, Some(1));
    assert_eq!(snap.sections[0].items[1].attributes, None);
}

#[test]
fn test_back_to_back_captures_are_semantically_equal() {
    let source = board();
    let first = Snapshot::capture(&source);
    let second = Snapshot::capture(&source);
    // Timestamps may differ; the content may not.
    assert!(first.semantic_eq(&second));
    assert!(diff(&first, &second).unwrap().is_empty());
}

#[test]
fn test_capture_then_mutate_then_capture_diffs() {
    let mut source = board();
    let before = Snapshot::capture(&source);
    source.lanes[0].1.push((12, None));
    let after = Snapshot::capture(&source);
    let script = diff(&before, &after).unwrap();
    assert_eq!(script.len(), 1);
    assert_eq!(script.row_inserts.len(), 1);
}
