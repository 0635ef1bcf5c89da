use crate::db::{init_db, Database};
use crate::router::App;
use crate::service::ListingService;
use crate::store::SqliteListingStore;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use tempfile::TempDir;
use url::{form_urlencoded, Url};

pub const PUBLIC_URL: &str = "http://localhost:3000/";

/// An app backed by a fresh SQLite file. Keep it alive for the duration of
/// the test; dropping it removes the database.
pub struct TestApp {
    pub app: App,
    _dir: TempDir,
}

/// Initialize a fresh test DB using the production schema
pub fn init_test_store() -> (TempDir, SqliteListingStore) {
    let dir = TempDir::new().expect("create temp dir");
    let db = Database::new(dir.path().join("test_listings.sqlite3"));
    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    (dir, SqliteListingStore::new(db))
}

pub fn init_test_app() -> TestApp {
    let (dir, store) = init_test_store();
    TestApp {
        app: App::new(ListingService::new(store), public_url()),
        _dir: dir,
    }
}

pub fn public_url() -> Url {
    Url::parse(PUBLIC_URL).unwrap()
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request {
    let body = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish();

    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.into_bytes()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
