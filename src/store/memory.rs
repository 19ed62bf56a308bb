use super::{
    ContactInput, ContactRecord, ContactStore, StoreResult, next_id, sort_newest_first,
};

/// Process-local store
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<ContactRecord>,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of saved records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing is saved
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ContactStore for MemoryStore {
    fn create(&mut self, input: ContactInput) -> StoreResult<ContactRecord> {
        let record = ContactRecord::from_input(next_id(&self.records), input)?;
        self.records.push(record.clone());
        Ok(record)
    }

    fn list(&self) -> StoreResult<Vec<ContactRecord>> {
        let mut records = self.records.clone();
        sort_newest_first(&mut records);
        Ok(records)
    }

    fn delete(&mut self, id: u64) -> StoreResult<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        Ok(self.records.len() != before)
    }
}
