// In-memory archive ports for command tests

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use eventgen_domain::{ArchiveEncoder, ArchiveEntry, ArchiveError, ArchiveStore, GenerationSettings};

use crate::{CancelFlag, GeneratorState};

/// Encodes entries as a JSON list of `[name, bytes]` pairs.
pub struct JsonEncoder;

impl ArchiveEncoder for JsonEncoder {
    fn encode(&self, entries: &[ArchiveEntry]) -> Result<Vec<u8>, ArchiveError> {
        let pairs: Vec<(&str, &[u8])> = entries
            .iter()
            .map(|entry| (entry.name.as_str(), entry.bytes.as_slice()))
            .collect();
        serde_json::to_vec(&pairs).map_err(|err| ArchiveError::Encoding(err.to_string()))
    }
}

/// Rejects every call, as a zip writer would on a corrupt entry.
pub struct FailingEncoder;

impl ArchiveEncoder for FailingEncoder {
    fn encode(&self, _entries: &[ArchiveEntry]) -> Result<Vec<u8>, ArchiveError> {
        Err(ArchiveError::Encoding("boom".to_string()))
    }
}

pub fn decode(bytes: &[u8]) -> Vec<(String, Vec<u8>)> {
    serde_json::from_slice(bytes).expect("decode test archive")
}

#[derive(Default)]
pub struct MemoryStore {
    pub written: Mutex<Vec<(PathBuf, Vec<ArchiveEntry>)>>,
    pub fail_at_call: Option<usize>,
    /// Raised after every successful write, like a Ctrl-C landing mid-run.
    pub cancel_after_write: Option<CancelFlag>,
    calls: AtomicUsize,
}

impl MemoryStore {
    pub fn failing_at(call: usize) -> Self {
        Self {
            fail_at_call: Some(call),
            ..Self::default()
        }
    }

    pub fn cancelling(flag: CancelFlag) -> Self {
        Self {
            cancel_after_write: Some(flag),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.written
            .lock()
            .expect("store lock")
            .iter()
            .map(|(path, _)| path.clone())
            .collect()
    }
}

impl ArchiveStore for MemoryStore {
    fn persist(&self, path: &Path, entries: &[ArchiveEntry]) -> Result<u64, ArchiveError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_at_call == Some(call) {
            return Err(ArchiveError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only output",
            )));
        }
        let size = entries.iter().map(|entry| entry.bytes.len() as u64).sum();
        self.written
            .lock()
            .expect("store lock")
            .push((path.to_path_buf(), entries.to_vec()));
        if let Some(flag) = &self.cancel_after_write {
            flag.cancel();
        }
        Ok(size)
    }
}

pub fn state_with(settings: GenerationSettings, store: Arc<MemoryStore>) -> GeneratorState {
    state_with_encoder(settings, Arc::new(JsonEncoder), store)
}

pub fn state_with_encoder(
    settings: GenerationSettings,
    encoder: Arc<dyn ArchiveEncoder>,
    store: Arc<MemoryStore>,
) -> GeneratorState {
    GeneratorState::new(settings, encoder, store).expect("state")
}
