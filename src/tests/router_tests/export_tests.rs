use crate::router::handle;
use crate::tests::utils::{body_bytes, body_string, get, sample_dataset};

#[test]
fn csv_export_contains_filtered_rows_and_derived_columns() {
    let ds = sample_dataset();

    let resp = handle(get("/export.csv?beds_min=3&beds_max=3"), &ds).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("filtered_listings.csv"));

    let body = body_string(resp);
    let lines: Vec<&str> = body.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "Address,Price,Bedrooms,Bathrooms,SquareFeet,Latitude,Longitude,PriceBin,MarkerSize"
    );
    assert!(lines[1].starts_with("202 Oak Ave,249999,3,2,1200,"));
    assert!(lines[2].ends_with(",300000,150"));
}

#[test]
fn csv_export_of_empty_selection_is_header_only() {
    let ds = sample_dataset();

    let body = body_string(handle(get("/export.csv?sqft_min=9000&sqft_max=9999"), &ds).unwrap());

    assert_eq!(body.lines().count(), 1);
}

#[test]
fn xlsx_export_is_a_workbook() {
    let ds = sample_dataset();

    let resp = handle(get("/export.xlsx"), &ds).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );

    // XLSX files are zip archives.
    let bytes = body_bytes(resp);
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn export_rejects_bad_filters() {
    let ds = sample_dataset();

    assert!(handle(get("/export.xlsx?price_max=cheap"), &ds).is_err());
}
