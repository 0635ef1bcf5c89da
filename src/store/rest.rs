// src/store/rest.rs
use crate::domain::ListingRecord;
use crate::errors::StoreError;
use crate::share::ShareIdentifier;
use crate::store::{ListingStore, StoredListing};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

const COLLECTION_PATH: &str = "rest/v1/properties";

/// Postgres unique_violation, reported in PostgREST error bodies.
const UNIQUE_VIOLATION: &str = "23505";

/// Listings kept behind a PostgREST-style HTTP API.
///
/// Every request carries the same static key, both as `apikey` and as a
/// bearer token.
pub struct RestListingStore {
    endpoint: Url,
    api_key: String,
    client: Client,
}

/// The error object PostgREST returns on a failed request.
#[derive(Deserialize)]
struct ErrorBody {
    code: Option<String>,
}

#[derive(Serialize)]
struct NewRow<'a> {
    slug: &'a str,
    data: &'a ListingRecord,
    address: &'a str,
}

impl RestListingStore {
    pub fn new(base_url: &str, api_key: String, timeout: Duration) -> Result<Self, StoreError> {
        let mut base = Url::parse(base_url)
            .map_err(|e| StoreError::Unavailable(format!("invalid REST url {base_url}: {e}")))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base
            .join(COLLECTION_PATH)
            .map_err(|e| StoreError::Unavailable(format!("invalid REST url {base_url}: {e}")))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(Self {
            endpoint,
            api_key,
            client,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn authorized(&self, req: reqwest::blocking::RequestBuilder) -> reqwest::blocking::RequestBuilder {
        req.header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
    }
}

impl ListingStore for RestListingStore {
    fn create(
        &self,
        id: &ShareIdentifier,
        record: &ListingRecord,
        display_address: &str,
    ) -> Result<StoredListing, StoreError> {
        let row = NewRow {
            slug: id.as_str(),
            data: record,
            address: display_address,
        };

        let resp = self
            .authorized(self.client.post(self.endpoint.clone()))
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .map_err(|e| StoreError::Unavailable(format!("insert request failed: {e}")))?;

        let status = resp.status();
        let body = read_body(resp)?;

        if !status.is_success() && is_unique_violation(status, &body) {
            return Err(StoreError::Conflict(id.to_string()));
        }
        if !status.is_success() {
            return Err(StoreError::Unavailable(format!("insert rejected: {status} - {body}")));
        }

        first_row(&body)?.ok_or_else(|| {
            StoreError::Malformed(format!("insert of {id} returned no representation"))
        })
    }

    fn find_by_identifier(
        &self,
        id: &ShareIdentifier,
    ) -> Result<Option<StoredListing>, StoreError> {
        let resp = self
            .authorized(self.client.get(self.endpoint.clone()))
            .query(&[("slug", format!("eq.{id}")), ("select", "*".to_string())])
            .send()
            .map_err(|e| StoreError::Unavailable(format!("lookup request failed: {e}")))?;

        let status = resp.status();
        let body = read_body(resp)?;

        if !status.is_success() {
            return Err(StoreError::Unavailable(format!("lookup rejected: {status} - {body}")));
        }

        first_row(&body)
    }
}

/// A failed insert is a duplicate slug when the decoded error code is
/// `23505`. A bare 409 without a readable code counts as one too.
fn is_unique_violation(status: StatusCode, body: &str) -> bool {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { code: Some(code) }) => code == UNIQUE_VIOLATION,
        _ => status == StatusCode::CONFLICT,
    }
}

fn read_body(resp: Response) -> Result<String, StoreError> {
    resp.text()
        .map_err(|e| StoreError::Unavailable(format!("reading response failed: {e}")))
}

/// Decodes a JSON array of rows and returns the first one.
fn first_row(body: &str) -> Result<Option<StoredListing>, StoreError> {
    let rows: Vec<serde_json::Value> = serde_json::from_str(body)
        .map_err(|e| StoreError::Malformed(format!("expected a JSON array of rows: {e}")))?;

    rows.into_iter()
        .next()
        .map(|row| {
            serde_json::from_value(row).map_err(|e| StoreError::Malformed(e.to_string()))
        })
        .transpose()
}
