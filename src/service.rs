// src/service.rs
use crate::domain::ListingRecord;
use crate::errors::ServiceError;
use crate::share::{self, ShareIdentifier};
use crate::store::ListingStore;
use serde::Serialize;
use url::Url;

type IdSource = Box<dyn Fn() -> ShareIdentifier + Send + Sync>;

/// What a creator gets back after saving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareReference {
    pub identifier: ShareIdentifier,
    pub url: Url,
}

/// A saved listing looked up through its share link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedListing {
    pub identifier: ShareIdentifier,
    pub share_url: Url,
    pub record: ListingRecord,
}

/// Sits between the pages and the store.
///
/// Holds no per-user state: the record being edited belongs to the caller
/// and is passed in on every save.
pub struct ListingService {
    store: Box<dyn ListingStore>,
    next_id: IdSource,
}

impl ListingService {
    pub fn new<S: ListingStore + 'static>(store: S) -> Self {
        Self {
            store: Box::new(store),
            next_id: Box::new(share::generate),
        }
    }

    /// Replaces the identifier source. Tests use this to force collisions.
    #[cfg(test)]
    pub fn with_id_source<F>(mut self, next_id: F) -> Self
    where
        F: Fn() -> ShareIdentifier + Send + Sync + 'static,
    {
        self.next_id = Box::new(next_id);
        self
    }

    /// Persists `record` under a fresh identifier and returns its share link.
    ///
    /// A store failure, an identifier collision included, is reported as
    /// `SaveFailed`. Nothing is retried.
    pub fn save_and_share(
        &self,
        record: &ListingRecord,
        page: &Url,
    ) -> Result<ShareReference, ServiceError> {
        record.validate()?;

        let identifier = (self.next_id)();
        match self
            .store
            .create(&identifier, record, record.display_address())
        {
            Ok(_) => {
                let url = share::share_url(page, &identifier);
                tracing::info!(id = %identifier, address = %record.address, "listing saved");
                Ok(ShareReference { identifier, url })
            }
            Err(err) => {
                tracing::error!(id = %identifier, error = %err, "listing save failed");
                Err(ServiceError::SaveFailed(err))
            }
        }
    }

    /// Looks up a shared listing. `page` is the location the request arrived
    /// at; it already carries the identifier and is returned as the share URL.
    pub fn resolve(&self, raw_id: &str, page: &Url) -> Result<ResolvedListing, ServiceError> {
        let Some(identifier) = ShareIdentifier::parse(raw_id) else {
            tracing::warn!(id = raw_id, "rejected malformed share identifier");
            return Err(ServiceError::NotFound);
        };

        match self.store.find_by_identifier(&identifier) {
            Ok(Some(stored)) => {
                tracing::info!(id = %identifier, "listing resolved");
                Ok(ResolvedListing {
                    identifier,
                    share_url: page.clone(),
                    record: stored.data,
                })
            }
            Ok(None) => {
                tracing::warn!(id = %identifier, "listing not found");
                Err(ServiceError::NotFound)
            }
            Err(err) => {
                tracing::error!(id = %identifier, error = %err, "listing load failed");
                Err(ServiceError::LoadFailed(err))
            }
        }
    }
}
