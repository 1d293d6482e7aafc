use crate::domain::listing::FilteredListing;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Format, Workbook};

use super::EXPORT_HEADERS;

pub fn export_listings_xlsx(listings: &[FilteredListing<'_>], filename: &str) -> ResultResp {
    let buffer = build_listings_workbook(listings)?;
    xlsx_response(buffer, filename)
}

pub fn build_listings_workbook(listings: &[FilteredListing<'_>]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Filtered Listings")
        .map_err(|e| ServerError::ExportError(format!("Failed to name worksheet: {e}")))?;

    let bold = Format::new().set_bold();
    let currency = Format::new().set_num_format("$#,##0");

    // Headers
    for (col, header) in EXPORT_HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| {
                ServerError::ExportError(format!("Failed to write header '{header}': {e}"))
            })?;
    }

    // Rows
    for (i, l) in listings.iter().enumerate() {
        let r = (i + 1) as u32;
        let listing = l.listing;

        worksheet
            .write_string(r, 0, &listing.address)
            .map_err(|e| ServerError::ExportError(format!("Failed to write address: {e}")))?;

        worksheet
            .write_number_with_format(r, 1, listing.price, &currency)
            .map_err(|e| ServerError::ExportError(format!("Failed to write price: {e}")))?;

        worksheet
            .write_number(r, 2, f64::from(listing.bedrooms))
            .map_err(|e| ServerError::ExportError(format!("Failed to write bedrooms: {e}")))?;

        worksheet
            .write_number(r, 3, listing.bathrooms)
            .map_err(|e| ServerError::ExportError(format!("Failed to write bathrooms: {e}")))?;

        worksheet
            .write_number(r, 4, listing.square_feet)
            .map_err(|e| ServerError::ExportError(format!("Failed to write square feet: {e}")))?;

        worksheet
            .write_number(r, 5, listing.latitude)
            .map_err(|e| ServerError::ExportError(format!("Failed to write latitude: {e}")))?;

        worksheet
            .write_number(r, 6, listing.longitude)
            .map_err(|e| ServerError::ExportError(format!("Failed to write longitude: {e}")))?;

        worksheet
            .write_number_with_format(r, 7, l.price_bin, &currency)
            .map_err(|e| ServerError::ExportError(format!("Failed to write price bin: {e}")))?;

        worksheet
            .write_number(r, 8, l.marker_size)
            .map_err(|e| ServerError::ExportError(format!("Failed to write marker size: {e}")))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::ExportError(format!("Failed to save workbook: {e}")))
}
