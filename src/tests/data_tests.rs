use crate::data::loader::{load_listings, load_listings_from_reader};
use crate::data::DatasetCache;
use crate::errors::LoadError;
use crate::tests::utils::{sample_dataset, write_temp_csv, SAMPLE_CSV};
use std::path::Path;

#[test]
fn loads_valid_rows_and_counts_dropped_ones() {
    let ds = sample_dataset();

    assert_eq!(ds.len(), 5);
    let report = ds.report();
    assert_eq!(report.rows_read, 8);
    assert_eq!(report.dropped_missing_coordinates, 2);
    assert_eq!(report.dropped_invalid_fields, 1);
    assert_eq!(report.dropped(), 3);
}

#[test]
fn trims_whitespace_around_headers_and_values() {
    let ds = sample_dataset();
    let first = &ds.listings()[0];

    assert_eq!(first.address, "101 Main St");
    assert_eq!(first.price, 150_000.0);
    assert_eq!(first.bedrooms, 2);
    assert_eq!(first.bathrooms, 1.0);
    assert_eq!(first.square_feet, 850.0);
    assert_eq!(first.latitude, 49.2827);
    assert_eq!(first.longitude, -123.1207);
}

#[test]
fn rows_without_valid_coordinates_never_load() {
    let ds = sample_dataset();
    let addresses: Vec<&str> = ds.listings().iter().map(|l| l.address.as_str()).collect();

    assert!(!addresses.contains(&"606 Elm St"), "non-numeric latitude must be dropped");
    assert!(!addresses.contains(&"707 Fir Way"), "missing longitude must be dropped");
    assert!(!addresses.contains(&"808 Maple Ct"), "non-numeric price must be dropped");

    // Even the widest possible filter cannot bring them back.
    let everything = ds.filter(&ds.default_filter());
    assert!(everything.iter().all(|l| l.listing.address != "606 Elm St"));
}

#[test]
fn nan_coordinates_count_as_missing() {
    let csv = "Address,Price,Bedrooms,Bathrooms,SquareFeet,Latitude,Longitude\n\
               A,100000,1,1,500,NaN,-123.1\n\
               B,200000,2,1,700,49.2,-123.2\n";
    let ds = load_listings_from_reader(csv.as_bytes()).unwrap();

    assert_eq!(ds.len(), 1);
    assert_eq!(ds.report().dropped_missing_coordinates, 1);
}

#[test]
fn bedrooms_must_be_a_whole_count() {
    let csv = "Address,Price,Bedrooms,Bathrooms,SquareFeet,Latitude,Longitude\n\
               A,100000,3.0,1,500,49.1,-123.1\n\
               B,200000,2.5,1,700,49.2,-123.2\n\
               C,300000,-1,1,700,49.3,-123.3\n";
    let ds = load_listings_from_reader(csv.as_bytes()).unwrap();

    assert_eq!(ds.len(), 1);
    assert_eq!(ds.listings()[0].bedrooms, 3);
    assert_eq!(ds.report().dropped_invalid_fields, 2);
}

#[test]
fn strips_byte_order_mark_from_first_header() {
    let csv = "\u{feff}Address,Price,Bedrooms,Bathrooms,SquareFeet,Latitude,Longitude\n\
               A,100000,1,1,500,49.1,-123.1\n";
    let ds = load_listings_from_reader(csv.as_bytes()).unwrap();

    assert_eq!(ds.listings()[0].address, "A");
}

#[test]
fn missing_required_column_is_an_error() {
    let csv = "Address,Price,Bedrooms,Bathrooms,Latitude,Longitude\n\
               A,100000,1,1,49.1,-123.1\n";
    let err = load_listings_from_reader(csv.as_bytes()).unwrap_err();

    assert!(matches!(err, LoadError::MissingColumn("SquareFeet")), "got {err:?}");
}

#[test]
fn all_rows_invalid_is_an_error() {
    let csv = "Address,Price,Bedrooms,Bathrooms,SquareFeet,Latitude,Longitude\n\
               A,100000,1,1,500,,\n\
               B,x,1,1,500,49.1,-123.1\n";
    let err = load_listings_from_reader(csv.as_bytes()).unwrap_err();

    assert!(matches!(err, LoadError::NoValidRows { dropped: 2 }), "got {err:?}");
}

#[test]
fn short_rows_are_dropped_instead_of_failing_the_load() {
    let csv = "Address,Price,Bedrooms,Bathrooms,SquareFeet,Latitude,Longitude\n\
               A,100000,1,1,500,49.1,-123.1\n\
               B,200000,2\n";
    let ds = load_listings_from_reader(csv.as_bytes()).unwrap();

    assert_eq!(ds.len(), 1);
    assert_eq!(ds.report().dropped(), 1);
}

#[test]
fn head_is_capped_at_dataset_size() {
    let ds = sample_dataset();

    assert_eq!(ds.head(3).len(), 3);
    assert_eq!(ds.head(50).len(), 5);
}

#[test]
fn loads_from_file_on_disk() {
    let file = write_temp_csv(SAMPLE_CSV);
    let ds = load_listings(file.path()).unwrap();

    assert_eq!(ds.len(), 5);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_listings(Path::new("/definitely/not/here.csv")).unwrap_err();

    assert!(matches!(err, LoadError::Io { .. }), "got {err:?}");
}

#[test]
fn cache_loads_once_and_reuses_the_result() {
    let file = write_temp_csv(SAMPLE_CSV);
    let cache = DatasetCache::new();

    let first = cache.get_or_load(file.path()).unwrap() as *const _;
    // A second call, even with a bogus path, returns the cached copy.
    let second = cache
        .get_or_load(Path::new("/definitely/not/here.csv"))
        .unwrap() as *const _;

    assert_eq!(first, second);
}

#[test]
fn failed_load_leaves_cache_empty() {
    let cache = DatasetCache::new();
    assert!(cache.get_or_load(Path::new("/definitely/not/here.csv")).is_err());

    let file = write_temp_csv(SAMPLE_CSV);
    let ds = cache.get_or_load(file.path()).unwrap();
    assert_eq!(ds.len(), 5);
}
