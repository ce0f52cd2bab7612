//! Flat-file persistence for restaurant records.
//!
//! # Responsibility
//! - Define the record store contract used by services.
//! - Keep file layout and I/O details inside the store boundary.
//!
//! # Invariants
//! - The store is append-only: no update or delete operation exists.
//! - Every I/O failure surfaces as `StoreError`, never as a panic.
//! - File handles are scoped to a single call.

use crate::model::restaurant::{Restaurant, RestaurantValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

mod file_store;
mod open;

pub use file_store::FileRestaurantStore;
pub use open::{open_store, Startup, StoreOrigin};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for record store operations.
#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Encode(serde_json::Error),
    Validation(RestaurantValidationError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "restaurant file `{}`: {source}", path.display())
            }
            Self::Encode(err) => write!(f, "failed to encode restaurant: {err}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<RestaurantValidationError> for StoreError {
    fn from(value: RestaurantValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Result of a bulk load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Valid records in file order.
    pub restaurants: Vec<Restaurant>,
    /// Count of non-blank lines that could not be decoded or validated.
    pub skipped: usize,
}

/// Record store contract.
pub trait RestaurantStore {
    /// Returns whether the backing file exists and can be read and appended.
    fn file_usable(&self) -> bool;
    /// Creates the backing file if it is missing. Never truncates.
    fn create_file(&self) -> StoreResult<()>;
    /// Loads every valid record, skipping malformed lines.
    fn load_all(&self) -> StoreResult<LoadReport>;
    /// Validates and appends one record.
    fn append(&self, restaurant: &Restaurant) -> StoreResult<()>;
}
