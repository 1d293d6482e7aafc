// src/domain/listing.rs

use serde::Serialize;

/// Width of one histogram bucket, in currency units.
pub const PRICE_BIN_WIDTH: f64 = 100_000.0;

/// Divisor turning a price into a map marker size.
pub const MARKER_SIZE_DIVISOR: f64 = 2_000.0;

/// One row of the listings dataset, already validated at load time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub address: String,
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub square_feet: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// A listing that survived the current filter, plus the two values
/// derived from it for charting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredListing<'a> {
    #[serde(flatten)]
    pub listing: &'a Listing,
    pub price_bin: f64,
    pub marker_size: f64,
}

impl<'a> FilteredListing<'a> {
    pub fn new(listing: &'a Listing) -> Self {
        Self {
            listing,
            price_bin: price_bin(listing.price),
            marker_size: marker_size(listing.price),
        }
    }
}

/// Lower edge of the $100k bucket `price` falls into.
pub fn price_bin(price: f64) -> f64 {
    (price / PRICE_BIN_WIDTH).floor() * PRICE_BIN_WIDTH
}

pub fn marker_size(price: f64) -> f64 {
    price / MARKER_SIZE_DIVISOR
}

/// Formats a price the way the tables show it, e.g. `$349,900`.
pub fn format_price(price: f64) -> String {
    let rounded = price.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
