pub mod identity;
pub mod snapshot;
pub mod source;

pub use identity::{IdentityHash, ItemIdentity, SectionIdentity};
pub use snapshot::{ItemRecord, SectionRecord, Snapshot};
pub use source::SnapshotSource;
