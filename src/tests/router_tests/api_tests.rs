use crate::router::handle;
use crate::tests::utils::{body_string, get, sample_dataset};
use serde_json::Value;

#[test]
fn api_returns_filtered_listings_with_derived_fields() {
    let ds = sample_dataset();

    let resp = handle(get("/api/listings?beds_min=3&beds_max=3"), &ds).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json"
    );

    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["count"], 2);

    let first = &json["listings"][0];
    assert_eq!(first["address"], "202 Oak Ave");
    assert_eq!(first["price"], 249_999.0);
    assert_eq!(first["price_bin"], 200_000.0);
    assert_eq!(first["marker_size"], 124.9995);
}

#[test]
fn api_with_no_params_returns_everything() {
    let ds = sample_dataset();

    let json: Value =
        serde_json::from_str(&body_string(handle(get("/api/listings"), &ds).unwrap())).unwrap();

    assert_eq!(json["count"], 5);
    assert_eq!(json["listings"].as_array().unwrap().len(), 5);
}
