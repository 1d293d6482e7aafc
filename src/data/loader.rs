//! CSV ingest for the listings file.
//!
//! Rows with unusable coordinates are dropped, as are rows whose price,
//! bedroom, bathroom or area values do not parse. Both kinds are counted
//! in the [`LoadReport`] so the dashboard can say how much was discarded.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::{debug, info, warn};

use crate::data::dataset::{Dataset, LoadReport};
use crate::domain::listing::Listing;
use crate::errors::LoadError;

pub const COL_ADDRESS: &str = "Address";
pub const COL_PRICE: &str = "Price";
pub const COL_BEDROOMS: &str = "Bedrooms";
pub const COL_BATHROOMS: &str = "Bathrooms";
pub const COL_SQUARE_FEET: &str = "SquareFeet";
pub const COL_LATITUDE: &str = "Latitude";
pub const COL_LONGITUDE: &str = "Longitude";

const REQUIRED_COLUMNS: [&str; 7] = [
    COL_ADDRESS,
    COL_PRICE,
    COL_BEDROOMS,
    COL_BATHROOMS,
    COL_SQUARE_FEET,
    COL_LATITUDE,
    COL_LONGITUDE,
];

/// Column positions resolved from the (trimmed) header row.
struct Columns {
    address: usize,
    price: usize,
    bedrooms: usize,
    bathrooms: usize,
    square_feet: usize,
    latitude: usize,
    longitude: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let map = build_header_map(headers);

        for name in REQUIRED_COLUMNS {
            if !map.contains_key(name) {
                return Err(LoadError::MissingColumn(name));
            }
        }

        Ok(Self {
            address: map[COL_ADDRESS],
            price: map[COL_PRICE],
            bedrooms: map[COL_BEDROOMS],
            bathrooms: map[COL_BATHROOMS],
            square_feet: map[COL_SQUARE_FEET],
            latitude: map[COL_LATITUDE],
            longitude: map[COL_LONGITUDE],
        })
    }
}

/// Why a single row was rejected.
#[derive(Debug, PartialEq)]
enum RowRejection {
    MissingCoordinates,
    InvalidField(&'static str),
}

pub fn load_listings(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    info!("Loading listings from {}", path.display());
    load_listings_from_reader(file)
}

pub fn load_listings_from_reader<R: Read>(reader: R) -> Result<Dataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = Columns::resolve(&headers)?;

    let mut listings = Vec::new();
    let mut report = LoadReport::default();

    for (idx, result) in reader.records().enumerate() {
        // records() starts after the header, and lines are 1-based
        let line = idx + 2;
        report.rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                warn!("Skipping line {line}: CSV parse error: {e}");
                report.dropped_invalid_fields += 1;
                continue;
            }
        };

        match parse_row(&record, &columns) {
            Ok(listing) => listings.push(listing),
            Err(RowRejection::MissingCoordinates) => {
                debug!("Dropping line {line}: missing or non-numeric coordinates");
                report.dropped_missing_coordinates += 1;
            }
            Err(RowRejection::InvalidField(column)) => {
                warn!("Dropping line {line}: missing or invalid {column}");
                report.dropped_invalid_fields += 1;
            }
        }
    }

    info!(
        rows_read = report.rows_read,
        kept = listings.len(),
        dropped_missing_coordinates = report.dropped_missing_coordinates,
        dropped_invalid_fields = report.dropped_invalid_fields,
        "Listings loaded"
    );

    let dropped = report.dropped();
    Dataset::new(listings, report).ok_or(LoadError::NoValidRows { dropped })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes prefix the first header with a BOM.
    name.trim_start_matches('\u{feff}').trim().to_string()
}

fn parse_row(record: &StringRecord, columns: &Columns) -> Result<Listing, RowRejection> {
    // Coordinates are checked first so a row missing both kinds of data
    // is reported the same way every time.
    let latitude = parse_f64(record.get(columns.latitude)).ok_or(RowRejection::MissingCoordinates)?;
    let longitude =
        parse_f64(record.get(columns.longitude)).ok_or(RowRejection::MissingCoordinates)?;

    let price =
        parse_f64(record.get(columns.price)).ok_or(RowRejection::InvalidField(COL_PRICE))?;
    let bedrooms =
        parse_count(record.get(columns.bedrooms)).ok_or(RowRejection::InvalidField(COL_BEDROOMS))?;
    let bathrooms = parse_f64(record.get(columns.bathrooms))
        .ok_or(RowRejection::InvalidField(COL_BATHROOMS))?;
    let square_feet = parse_f64(record.get(columns.square_feet))
        .ok_or(RowRejection::InvalidField(COL_SQUARE_FEET))?;

    Ok(Listing {
        address: record.get(columns.address).unwrap_or("").to_string(),
        price,
        bedrooms,
        bathrooms,
        square_feet,
        latitude,
        longitude,
    })
}

/// Finite number, or `None`. `NaN` and empty cells count as missing.
fn parse_f64(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Whole, non-negative count. Accepts `3` and `3.0` but not `2.5`.
fn parse_count(raw: Option<&str>) -> Option<u32> {
    parse_f64(raw)
        .filter(|v| *v >= 0.0 && v.fract() == 0.0 && *v <= f64::from(u32::MAX))
        .map(|v| v as u32)
}
