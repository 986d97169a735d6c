use std::path::Path;

use crate::entities::ArchiveEntry;
use crate::error::ArchiveError;

/// Packs named entries into a complete in-memory archive.
pub trait ArchiveEncoder: Send + Sync {
    fn encode(&self, entries: &[ArchiveEntry]) -> Result<Vec<u8>, ArchiveError>;
}

/// Persists an archive so that `path` either holds the complete archive
/// or is left untouched. Returns the size of the written file.
pub trait ArchiveStore: Send + Sync {
    fn persist(&self, path: &Path, entries: &[ArchiveEntry]) -> Result<u64, ArchiveError>;
}
