// src/tests/router_tests/dashboard_tests.rs

use crate::errors::ServerError;
use crate::responses::html_error_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, sample_dataset};
use astra::Body;
use http::{Method, Request};

#[test]
fn dashboard_shows_every_listing_by_default() {
    let ds = sample_dataset();

    let resp = handle(get("/"), &ds).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Filtered Results (5 listings)"));
    assert!(body.contains("101 Main St"));
    assert!(body.contains("505 Birch Blvd"));
    assert!(!body.contains("Filters active"));
    // The sidebar exposes all four sliders.
    for name in ["price_min", "beds_max", "baths_min", "sqft_max"] {
        assert!(body.contains(&format!("name=\"{name}\"")), "missing slider {name}");
    }
}

#[test]
fn dashboard_reports_dropped_rows() {
    let ds = sample_dataset();
    let body = body_string(handle(get("/"), &ds).unwrap());

    assert!(body.contains("8 rows read"));
    assert!(body.contains("2 without valid coordinates"));
}

#[test]
fn price_filter_narrows_results() {
    let ds = sample_dataset();

    let resp = handle(get("/?price_min=200000&price_max=350000"), &ds).unwrap();
    let body = body_string(resp);

    assert!(body.contains("Filtered Results (2 listings)"));
    assert!(body.contains("Filters active"));
    assert!(body.contains("202 Oak Ave"));
    assert!(body.contains("303 Pine Rd"));
    // Still listed in the overview, but not among the plotted points.
    assert_eq!(body.matches("class=\"point\"").count(), 2);
}

#[test]
fn empty_result_renders_headers_and_empty_charts() {
    let ds = sample_dataset();

    let resp = handle(get("/?price_min=1000000&price_max=2000000"), &ds).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Filtered Results (0 listings)"));
    assert!(body.contains("No listings match the current filters"));
    assert!(body.contains("nothing to summarize"));
    assert_eq!(body.matches("class=\"bar\"").count(), 0);
}

#[test]
fn crossed_sidebar_thumbs_are_put_back_in_order() {
    let ds = sample_dataset();
    // Every slider submits; the price thumbs were dragged past each other.
    let query = "source=sidebar\
                 &price_min=500000&price_max=400000\
                 &beds_min=2&beds_max=5\
                 &baths_min=1&baths_max=4\
                 &sqft_min=800&sqft_max=3200";

    let resp = handle(get(&format!("/?{query}")), &ds).expect("sidebar submit must not fail");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Filtered Results (1 listings)"));
    assert_eq!(body.matches("class=\"point\"").count(), 1);

    // The same crossed range typed into an API URL is still rejected.
    let err = handle(get("/api/listings?price_min=500000&price_max=400000"), &ds).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn invalid_filter_value_is_bad_request() {
    let ds = sample_dataset();

    let err = handle(get("/?beds_min=many"), &ds).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));

    let resp = html_error_response(err);
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("beds_min"));
}

#[test]
fn unknown_path_is_not_found() {
    let ds = sample_dataset();

    let err = handle(get("/admin"), &ds).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(html_error_response(err).status(), 404);
}

#[test]
fn post_to_dashboard_is_not_found() {
    let ds = sample_dataset();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    assert!(matches!(handle(req, &ds), Err(ServerError::NotFound)));
}

#[test]
fn health_check_responds_ok() {
    let ds = sample_dataset();
    let resp = handle(get("/health"), &ds).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "ok");
}
