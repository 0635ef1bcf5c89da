use crate::domain::ListingRecord;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_app, public_url};
use serde_json::Value;

#[test]
fn api_returns_resolved_listing() {
    let t = init_test_app();
    let mut record = ListingRecord::default();
    record.address = "39 Crompton Pl".into();
    record.arv = "325000".into();
    record.comps[1].address = "16 Courtney Pl".into();

    let shared = t.app.service.save_and_share(&record, &public_url()).unwrap();
    let id = shared.identifier.to_string();

    let resp = handle(get(&format!("/api/listing?p={id}")), &t.app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["identifier"], id.as_str());
    assert_eq!(json["record"]["address"], "39 Crompton Pl");
    assert_eq!(json["record"]["arv"], "325000");
    assert_eq!(json["record"]["comps"].as_array().unwrap().len(), 4);
    assert_eq!(json["record"]["comps"][1]["address"], "16 Courtney Pl");
    assert_eq!(json["record"]["features"].as_array().unwrap().len(), 5);
    assert_eq!(json["record"]["showFeatures"], false);
}

#[test]
fn api_unknown_identifier_is_404() {
    let t = init_test_app();

    let resp = handle(get("/api/listing?p=neverMade"), &t.app).unwrap();
    assert_eq!(resp.status(), 404);

    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["error"], "Property not found.");
}

#[test]
fn api_without_identifier_is_400() {
    let t = init_test_app();

    for uri in ["/api/listing", "/api/listing?p="] {
        let resp = handle(get(uri), &t.app).unwrap();
        assert_eq!(resp.status(), 400, "{uri}");
    }
}

#[test]
fn health_check_responds_ok() {
    let t = init_test_app();
    let resp = handle(get("/health"), &t.app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "ok");
}
