//! Encoder error types.

use thiserror::Error;

use crate::models::ECLevel;

/// Errors that abort an encode call. No partial symbol is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Input does not fit the largest allowed version at the requested level.
    #[error("{len} bytes exceed the {capacity}-byte capacity at EC level {ec_level}")]
    CapacityExceeded {
        /// Payload length in bytes
        len: usize,
        /// Largest payload the allowed versions hold at this level
        capacity: usize,
        /// Requested level
        ec_level: ECLevel,
    },

    /// The block tables have no entry for this version/level pair.
    #[error("no block layout for version {version} at EC level {ec_level}")]
    UnsupportedVersionLevelCombination {
        /// Version number
        version: u8,
        /// Level that has no entry
        ec_level: ECLevel,
    },

    /// Caller-supplied options or data cannot be encoded.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result alias for encoder operations
pub type EncodeResult<T> = Result<T, EncodeError>;
