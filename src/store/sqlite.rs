use crate::db::properties::{find_property_by_slug, insert_property};
use crate::db::Database;
use crate::domain::ListingRecord;
use crate::errors::StoreError;
use crate::share::ShareIdentifier;
use crate::store::{ListingStore, StoredListing};
use chrono::Utc;

/// Listings kept in a local SQLite file.
#[derive(Clone, Debug)]
pub struct SqliteListingStore {
    db: Database,
}

impl SqliteListingStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl ListingStore for SqliteListingStore {
    fn create(
        &self,
        id: &ShareIdentifier,
        record: &ListingRecord,
        display_address: &str,
    ) -> Result<StoredListing, StoreError> {
        self.db.with_conn(|conn| {
            insert_property(conn, id.as_str(), record, display_address, Utc::now())
        })
    }

    fn find_by_identifier(
        &self,
        id: &ShareIdentifier,
    ) -> Result<Option<StoredListing>, StoreError> {
        self.db
            .with_conn(|conn| find_property_by_slug(conn, id.as_str()))
    }
}
