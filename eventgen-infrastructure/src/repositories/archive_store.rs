use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use tracing::debug;

use eventgen_domain::{ArchiveEntry, ArchiveError, ArchiveStore};

use crate::services::write_zip;

/// Writes weekly archives next to their final path and renames them into
/// place once complete, so a failed write never leaves a partial archive.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsArchiveStore;

impl FsArchiveStore {
    pub fn new() -> Self {
        Self
    }
}

impl ArchiveStore for FsArchiveStore {
    fn persist(&self, path: &Path, entries: &[ArchiveEntry]) -> Result<u64, ArchiveError> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let file_name = path
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or("archive");
        let mut temp = tempfile::Builder::new()
            .prefix(&format!(".{}.", file_name))
            .suffix(".tmp")
            .tempfile_in(dir)?;
        debug!("writing {} via {}", path.display(), temp.path().display());

        write_zip(temp.as_file_mut(), entries)?;
        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|err| ArchiveError::Io(err.error))?;

        Ok(fs::metadata(path)?.len())
    }
}
