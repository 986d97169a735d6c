use std::io::{Cursor, Seek, Write};

use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use eventgen_domain::{ArchiveEncoder, ArchiveEntry, ArchiveError};

/// Writes `entries` into a deflate-compressed zip, in order, and returns
/// the underlying writer once the central directory is written.
pub fn write_zip<W: Write + Seek>(writer: W, entries: &[ArchiveEntry]) -> Result<W, ArchiveError> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for entry in entries {
        zip.start_file(entry.name.as_str(), options)
            .map_err(map_zip_error)?;
        zip.write_all(&entry.bytes)?;
    }
    zip.finish().map_err(map_zip_error)
}

fn map_zip_error(err: ZipError) -> ArchiveError {
    match err {
        ZipError::Io(err) => ArchiveError::Io(err),
        other => ArchiveError::Encoding(other.to_string()),
    }
}

/// Builds daily archives fully in memory.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZipArchiveEncoder;

impl ArchiveEncoder for ZipArchiveEncoder {
    fn encode(&self, entries: &[ArchiveEntry]) -> Result<Vec<u8>, ArchiveError> {
        let cursor = write_zip(Cursor::new(Vec::new()), entries)?;
        Ok(cursor.into_inner())
    }
}
