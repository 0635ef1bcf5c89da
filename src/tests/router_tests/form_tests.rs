use crate::domain::ListingRecord;
use crate::errors::{ServerError, ServiceError};
use crate::router::{handle, App, MAX_FORM_BYTES};
use crate::service::ListingService;
use crate::share::ShareIdentifier;
use crate::tests::utils::{
    body_string, get, init_test_app, init_test_store, post_form, public_url,
};

#[test]
fn form_page_loads_successfully() {
    let t = init_test_app();

    let resp = handle(get("/"), &t.app).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Property Listing Generator"));
    assert!(body.contains(r#"action="/listings""#));
    assert!(body.contains(r#"name="comp4Address""#));
    assert!(!body.contains(r#"name="comp5Address""#));
    assert!(body.contains(r#"name="feature5""#));
    assert!(!body.contains(r#"class="notice""#));
}

#[test]
fn saving_shows_creator_preview() {
    let t = init_test_app();

    let req = post_form(
        "/listings",
        &[
            ("address", "39 Crompton Pl, Palm Coast, FL 32137"),
            ("askingPrice", "$199,900"),
            ("arv", "325000"),
            ("monthlyRent", "2,000"),
            ("comp1Address", "16 Courtney Pl, Palm Coast, FL"),
            ("comp1Details", "SOLD FOR $352,500"),
        ],
    );
    let resp = handle(req, &t.app).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("39 Crompton Pl, Palm Coast, FL 32137"));
    assert!(body.contains("$325,000"));
    assert!(body.contains("$2,000"));
    assert!(body.contains("Copy Link"));
    assert!(body.contains(r#"action="/edit""#));
    assert!(body.contains("http://localhost:3000/?p="));
    assert_eq!(body.matches(r#"class="comp""#).count(), 1);
}

#[test]
fn missing_address_keeps_form_and_values() {
    let t = init_test_app();

    let req = post_form(
        "/listings",
        &[("address", "   "), ("beds", "3"), ("feature2", "Pool")],
    );
    let resp = handle(req, &t.app).expect("Failed to handle request");
    assert_eq!(resp.status(), 422);

    let body = body_string(resp);
    assert!(body.contains(r#"class="notice""#));
    assert!(body.contains("A property address is required."));
    assert!(body.contains(r#"value="3""#));
    assert!(body.contains(r#"value="Pool""#));
    assert!(!body.contains("Copy Link"));
}

#[test]
fn edit_returns_prefilled_form() {
    let t = init_test_app();

    let mut record = ListingRecord::default();
    record.address = "16 Courtney Pl".into();
    record.show_features = true;
    record.features[0] = "New roof".into();
    let payload = serde_json::to_string(&record).unwrap();

    let resp = handle(post_form("/edit", &[("record", payload.as_str())]), &t.app)
        .expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(r#"value="16 Courtney Pl""#));
    assert!(body.contains(r#"value="New roof""#));
    assert!(body.contains("checked"));
}

#[test]
fn edit_without_record_is_bad_request() {
    let t = init_test_app();

    let err = handle(post_form("/edit", &[]), &t.app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));

    let err = handle(post_form("/edit", &[("record", "{not json")]), &t.app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn unknown_route_is_not_found() {
    let t = init_test_app();
    let err = handle(get("/admin"), &t.app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn oversized_form_is_rejected_and_not_saved() {
    let (_dir, store) = init_test_store();
    let service = ListingService::new(store)
        .with_id_source(|| ShareIdentifier::parse("Oversize1").unwrap());
    let app = App::new(service, public_url());

    let description = "x".repeat(MAX_FORM_BYTES as usize + 1024);
    let req = post_form(
        "/listings",
        &[
            ("address", "1 Main St"),
            ("shortDescription", description.as_str()),
            ("email", "a@b.co"),
        ],
    );

    let err = handle(req, &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)), "got {err:?}");
    assert_eq!(
        app.service.resolve("Oversize1", &public_url()).unwrap_err(),
        ServiceError::NotFound
    );
}

#[test]
fn large_form_under_limit_is_saved_whole() {
    let (_dir, store) = init_test_store();
    let service = ListingService::new(store)
        .with_id_source(|| ShareIdentifier::parse("Biggish1").unwrap());
    let app = App::new(service, public_url());

    let description = "x".repeat(MAX_FORM_BYTES as usize - 4096);
    let req = post_form(
        "/listings",
        &[
            ("address", "1 Main St"),
            ("shortDescription", description.as_str()),
            ("email", "a@b.co"),
        ],
    );
    let resp = handle(req, &app).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let resolved = app.service.resolve("Biggish1", &public_url()).unwrap();
    assert_eq!(resolved.record.short_description.len(), description.len());
    assert_eq!(resolved.record.email, "a@b.co");
}

#[test]
fn oversized_edit_is_rejected() {
    let t = init_test_app();
    let payload = "x".repeat(MAX_FORM_BYTES as usize + 1);

    let err = handle(post_form("/edit", &[("record", payload.as_str())]), &t.app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)), "got {err:?}");
}
