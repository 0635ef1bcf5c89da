pub mod rest;
pub mod sqlite;

pub use rest::RestListingStore;
pub use sqlite::SqliteListingStore;

use crate::domain::ListingRecord;
use crate::errors::StoreError;
use crate::share::ShareIdentifier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the `properties` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredListing {
    pub slug: String,
    pub data: ListingRecord,
    /// Copy of `data.address` kept for searching on the backend.
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Durable, append-only listing persistence.
///
/// Rows are only ever created and read. Identifier uniqueness is the
/// backend's job: a duplicate must come back as `StoreError::Conflict`,
/// never overwrite the existing row.
pub trait ListingStore: Send + Sync {
    fn create(
        &self,
        id: &ShareIdentifier,
        record: &ListingRecord,
        display_address: &str,
    ) -> Result<StoredListing, StoreError>;

    /// `Ok(None)` when no row carries this identifier.
    fn find_by_identifier(&self, id: &ShareIdentifier)
        -> Result<Option<StoredListing>, StoreError>;
}

impl<S: ListingStore + ?Sized> ListingStore for Box<S> {
    fn create(
        &self,
        id: &ShareIdentifier,
        record: &ListingRecord,
        display_address: &str,
    ) -> Result<StoredListing, StoreError> {
        (**self).create(id, record, display_address)
    }

    fn find_by_identifier(
        &self,
        id: &ShareIdentifier,
    ) -> Result<Option<StoredListing>, StoreError> {
        (**self).find_by_identifier(id)
    }
}
