use crate::db::Database;
use crate::domain::listing::Comp;
use crate::domain::ListingRecord;
use crate::router::{handle, App};
use crate::service::ListingService;
use crate::store::SqliteListingStore;
use crate::tests::utils::{body_string, get, init_test_app, public_url, TestApp};
use tempfile::TempDir;

fn save(t: &TestApp, record: &ListingRecord) -> String {
    t.app
        .service
        .save_and_share(record, &public_url())
        .expect("save failed")
        .identifier
        .to_string()
}

fn shared_page(t: &TestApp, id: &str) -> (u16, String) {
    let resp = handle(get(&format!("/?p={id}")), &t.app).expect("Failed to handle request");
    let status = resp.status().as_u16();
    (status, body_string(resp))
}

#[test]
fn shared_link_renders_read_only_preview() {
    let t = init_test_app();
    let mut record = ListingRecord::default();
    record.address = "39 Crompton Pl, Palm Coast, FL 32137".into();
    record.rehab_estimate = "Light".into();
    record.email = "jane@example.com".into();
    let id = save(&t, &record);

    let (status, body) = shared_page(&t, &id);
    assert_eq!(status, 200);
    assert!(body.contains("39 Crompton Pl, Palm Coast, FL 32137"));
    assert!(body.contains("Light"));
    assert!(body.contains("JANE@EXAMPLE.COM"));
    assert!(body.contains("mailto:jane@example.com"));
    // Blank figures fall back to $0 and dashes.
    assert!(body.contains("$0"));
    assert!(body.contains("Beds: —"));
    // No way back to the form from a shared link.
    assert!(!body.contains("Copy Link"));
    assert!(!body.contains(r#"action="/edit""#));
}

#[test]
fn only_filled_comps_are_rendered() {
    let t = init_test_app();
    let mut record = ListingRecord::default();
    record.address = "1 Main St".into();
    record.comps[0] = Comp::new("16 Courtney Pl", "SOLD FOR $352,500 ON 10/29/2025");
    let id = save(&t, &record);

    let (_, body) = shared_page(&t, &id);
    assert_eq!(body.matches(r#"class="comp""#).count(), 1);
    assert!(body.contains("16 Courtney Pl"));
    assert!(!body.contains("No comps entered"));
}

#[test]
fn no_comps_shows_placeholder() {
    let t = init_test_app();
    let mut record = ListingRecord::default();
    record.address = "1 Main St".into();
    let id = save(&t, &record);

    let (_, body) = shared_page(&t, &id);
    assert_eq!(body.matches(r#"class="comp""#).count(), 0);
    assert!(body.contains("No comps entered"));
    assert!(body.contains("No map image"));
}

#[test]
fn features_follow_the_toggle() {
    let t = init_test_app();
    let mut record = ListingRecord::default();
    record.address = "1 Main St".into();
    record.features[0] = "New roof".into();

    record.show_features = true;
    let shown = save(&t, &record);
    let (_, body) = shared_page(&t, &shown);
    assert!(body.contains("Additional Features"));
    assert_eq!(body.matches(r#"class="feature""#).count(), 1);

    record.show_features = false;
    let hidden = save(&t, &record);
    let (_, body) = shared_page(&t, &hidden);
    assert!(!body.contains("Additional Features"));
    assert_eq!(body.matches(r#"class="feature""#).count(), 0);
}

#[test]
fn unknown_link_falls_back_to_form() {
    let t = init_test_app();

    let (status, body) = shared_page(&t, "neverMade");
    assert_eq!(status, 404);
    assert!(body.contains("Property not found."));
    assert!(body.contains(r#"action="/listings""#));

    let (status, body) = shared_page(&t, "bad%2Did");
    assert_eq!(status, 404);
    assert!(body.contains("Property not found."));
}

#[test]
fn empty_identifier_shows_plain_form() {
    let t = init_test_app();
    let resp = handle(get("/?p="), &t.app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(!body.contains(r#"class="notice""#));
}

#[test]
fn broken_store_falls_back_to_form_with_notice() {
    let dir = TempDir::new().unwrap();
    let db = Database::new(dir.path().join("missing/dir/listings.sqlite3"));
    let app = App::new(
        ListingService::new(SqliteListingStore::new(db)),
        public_url(),
    );

    let resp = handle(get("/?p=abc12345"), &app).unwrap();
    assert_eq!(resp.status(), 502);
    let body = body_string(resp);
    assert!(body.contains("Failed to load property."));
    assert!(body.contains(r#"action="/listings""#));
}

#[test]
fn broken_store_keeps_form_on_save() {
    let dir = TempDir::new().unwrap();
    let db = Database::new(dir.path().join("missing/dir/listings.sqlite3"));
    let app = App::new(
        ListingService::new(SqliteListingStore::new(db)),
        public_url(),
    );

    let req = crate::tests::utils::post_form("/listings", &[("address", "1 Main St")]);
    let resp = handle(req, &app).unwrap();
    assert_eq!(resp.status(), 502);
    let body = body_string(resp);
    assert!(body.contains("Save failed:"));
    assert!(body.contains(r#"value="1 Main St""#));
    // Save failures stay on screen until the next action.
    assert!(!body.contains("Dismiss"));
}
