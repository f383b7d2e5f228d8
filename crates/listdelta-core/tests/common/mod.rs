use listdelta_core::{IdentityHash, ItemRecord, SectionRecord, Snapshot};
use sha2::{Digest, Sha256};

/// Stable identity hash for a test label
///
/// SHA-256-derived so fixtures keep the same hashes across runs and
/// platforms; the engine itself never sees the label.
#[allow(dead_code)]
pub fn ident(label: &str) -> IdentityHash {
    let digest = Sha256::digest(label.as_bytes());
    u64::from_be_bytes(digest[..8].try_into().unwrap())
}

/// Item record with no attributes signature (reload detection off)
#[allow(dead_code)]
pub fn item(label: &str) -> ItemRecord {
    ItemRecord {
        identity: ident(label),
        attributes: None,
    }
}

/// Item record with an attributes signature
#[allow(dead_code)]
pub fn item_with_attrs(label: &str, attrs: IdentityHash) -> ItemRecord {
    ItemRecord {
        identity: ident(label),
        attributes: Some(attrs),
    }
}

/// Section built from a label and its item records
#[allow(dead_code)]
pub fn section(label: &str, items: Vec<ItemRecord>) -> SectionRecord {
    SectionRecord::new(ident(label), items)
}

/// Snapshot built from section records, stamped now
#[allow(dead_code)]
pub fn snapshot(sections: Vec<SectionRecord>) -> Snapshot {
    Snapshot::from_sections(sections)
}
