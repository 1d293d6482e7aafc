use crate::domain::listing::FilteredListing;
use crate::errors::ServerError;
use crate::responses::{csv_response, ResultResp};

use super::EXPORT_HEADERS;

pub fn export_listings_csv(listings: &[FilteredListing<'_>], filename: &str) -> ResultResp {
    let buffer = build_listings_csv(listings)?;
    csv_response(buffer, filename)
}

pub fn build_listings_csv(listings: &[FilteredListing<'_>]) -> Result<Vec<u8>, ServerError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(EXPORT_HEADERS)
        .map_err(|e| ServerError::ExportError(format!("Failed to write CSV header: {e}")))?;

    for l in listings {
        let listing = l.listing;
        writer
            .write_record([
                listing.address.clone(),
                listing.price.to_string(),
                listing.bedrooms.to_string(),
                listing.bathrooms.to_string(),
                listing.square_feet.to_string(),
                listing.latitude.to_string(),
                listing.longitude.to_string(),
                l.price_bin.to_string(),
                l.marker_size.to_string(),
            ])
            .map_err(|e| ServerError::ExportError(format!("Failed to write CSV row: {e}")))?;
    }

    writer
        .into_inner()
        .map_err(|e| ServerError::ExportError(format!("Failed to flush CSV: {e}")))
}
