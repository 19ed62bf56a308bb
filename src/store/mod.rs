//! Contact-record persistence for the generation history.
//!
//! Two backends implement [`ContactStore`]: [`MemoryStore`] for tests and
//! embedding, and [`JsonFileStore`], which keeps the whole history as one
//! JSON array on disk.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vcard::Contact;

/// JSON file backend
pub mod json_file;
/// In-memory backend
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Errors raised by history stores
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("store i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file holds malformed JSON
    #[error("store data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The record name was blank
    #[error("a saved QR code needs a name")]
    EmptyName,
}

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// What the caller supplies when saving a generated code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInput {
    /// Label shown in the history list
    pub name: String,
    /// Contact fields behind the payload
    pub contact: Contact,
    /// Dark module color, `#rrggbb`
    pub foreground_color: String,
    /// Light module color, `#rrggbb`
    pub background_color: String,
}

impl ContactInput {
    /// Input with the default black-on-white colors
    pub fn new(name: impl Into<String>, contact: Contact) -> Self {
        Self {
            name: name.into(),
            contact,
            foreground_color: "#000000".to_string(),
            background_color: "#ffffff".to_string(),
        }
    }

    /// Replace both colors
    pub fn with_colors(mut self, foreground: impl Into<String>, background: impl Into<String>) -> Self {
        self.foreground_color = foreground.into();
        self.background_color = background.into();
        self
    }
}

/// A saved history entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Unique within one store
    pub id: u64,
    /// Label shown in the history list
    pub name: String,
    /// Contact fields behind the payload
    pub contact: Contact,
    /// Dark module color, `#rrggbb`
    pub foreground_color: String,
    /// Light module color, `#rrggbb`
    pub background_color: String,
    /// vCard payload that was encoded
    pub vcard: String,
    /// Unix seconds
    pub created_at: u64,
}

impl ContactRecord {
    pub(crate) fn from_input(id: u64, input: ContactInput) -> StoreResult<Self> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        let vcard = input.contact.to_vcard();
        Ok(Self {
            id,
            name,
            contact: input.contact,
            foreground_color: input.foreground_color,
            background_color: input.background_color,
            vcard,
            created_at: unix_now(),
        })
    }

    /// UTC calendar date of `created_at` as `YYYY-MM-DD`
    pub fn created_date(&self) -> String {
        let (year, month, day) = civil_from_days(self.created_at / 86_400);
        format!("{year:04}-{month:02}-{day:02}")
    }
}

/// Days since 1970-01-01 to a proleptic Gregorian (year, month, day)
fn civil_from_days(days: u64) -> (u64, u64, u64) {
    // Shift the epoch to 0000-03-01 so leap days fall at the end of a year
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z % 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + u64::from(month <= 2);
    (year, month, day)
}

/// Create/list/delete interface over saved codes
pub trait ContactStore {
    /// Persist a new record and return it with its assigned id
    fn create(&mut self, input: ContactInput) -> StoreResult<ContactRecord>;

    /// All records, newest first
    fn list(&self) -> StoreResult<Vec<ContactRecord>>;

    /// Remove a record; `false` if no record had that id
    fn delete(&mut self, id: u64) -> StoreResult<bool>;
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Next id after the largest one in `records`
pub(crate) fn next_id(records: &[ContactRecord]) -> u64 {
    records.iter().map(|r| r.id).max().map_or(1, |id| id + 1)
}

/// Newest first; ids break ties within the same second
pub(crate) fn sort_newest_first(records: &mut [ContactRecord]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}
