pub mod export_csv;
pub mod export_xlsx;

pub use export_csv::export_listings_csv;
pub use export_xlsx::export_listings_xlsx;

/// Column order shared by every export format.
pub const EXPORT_HEADERS: [&str; 9] = [
    "Address",
    "Price",
    "Bedrooms",
    "Bathrooms",
    "SquareFeet",
    "Latitude",
    "Longitude",
    "PriceBin",
    "MarkerSize",
];
