use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{
    ContactInput, ContactRecord, ContactStore, StoreResult, next_id, sort_newest_first,
};

/// History persisted as a single JSON array, rewritten on every change
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by `path`; the file is created on first write
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty history
    fn load(&self) -> StoreResult<Vec<ContactRecord>> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(Vec::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, records: &[ContactRecord]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(records)?;
        // Replace the file atomically through a sibling temp file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), records = records.len(), "saved history");
        Ok(())
    }
}

impl ContactStore for JsonFileStore {
    fn create(&mut self, input: ContactInput) -> StoreResult<ContactRecord> {
        let mut records = self.load()?;
        let record = ContactRecord::from_input(next_id(&records), input)?;
        records.push(record.clone());
        self.save(&records)?;
        Ok(record)
    }

    fn list(&self) -> StoreResult<Vec<ContactRecord>> {
        let mut records = self.load()?;
        sort_newest_first(&mut records);
        Ok(records)
    }

    fn delete(&mut self, id: u64) -> StoreResult<bool> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Ok(false);
        }
        self.save(&records)?;
        Ok(true)
    }
}
