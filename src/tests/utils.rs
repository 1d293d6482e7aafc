use crate::data::loader::load_listings_from_reader;
use crate::data::Dataset;
use astra::{Body, Request, Response};
use std::io::{Read, Write};
use tempfile::NamedTempFile;

/// Eight rows: five valid, two with bad coordinates, one with a bad price.
/// Headers carry stray whitespace on purpose.
pub const SAMPLE_CSV: &str = "\
 Address , Price ,Bedrooms, Bathrooms ,SquareFeet, Latitude , Longitude
101 Main St,150000,2,1,850,49.2827,-123.1207
202 Oak Ave,249999,3,2,1200,49.2500,-123.1000
303 Pine Rd,300000,3,2.5,1500,49.2600,-123.1400
404 Cedar Ln,455000,4,3,2100,49.3000,-123.0500
505 Birch Blvd,899000,5,4,3200,49.2700,-123.2000
606 Elm St,320000,2,1,900,not-a-number,-123.1100
707 Fir Way,380000,3,2,1400,49.2650,
808 Maple Ct,abc,3,2,1300,49.2400,-123.0900
";

pub fn sample_dataset() -> Dataset {
    load_listings_from_reader(SAMPLE_CSV.as_bytes()).expect("sample CSV should load")
}

pub fn write_temp_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp CSV");
    file
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(http::Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut bytes = Vec::new();
    resp.into_body().reader().read_to_end(&mut bytes).unwrap();
    bytes
}

pub fn body_string(resp: Response) -> String {
    String::from_utf8(body_bytes(resp)).expect("body should be UTF-8")
}
