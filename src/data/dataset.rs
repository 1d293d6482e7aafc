use crate::domain::filter::ListingFilter;
use crate::domain::listing::{FilteredListing, Listing};
use crate::domain::stats::DatasetBounds;

/// What happened to the rows of the source file during loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub rows_read: usize,
    pub dropped_missing_coordinates: usize,
    pub dropped_invalid_fields: usize,
}

impl LoadReport {
    pub fn dropped(&self) -> usize {
        self.dropped_missing_coordinates + self.dropped_invalid_fields
    }
}

/// The validated listing set. Built once and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    listings: Vec<Listing>,
    bounds: DatasetBounds,
    report: LoadReport,
}

impl Dataset {
    /// Returns `None` when `listings` is empty, since an empty set has no bounds.
    pub fn new(listings: Vec<Listing>, report: LoadReport) -> Option<Self> {
        let bounds = DatasetBounds::from_listings(&listings)?;
        Some(Self {
            listings,
            bounds,
            report,
        })
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn bounds(&self) -> &DatasetBounds {
        &self.bounds
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// The leading rows, as shown in the data overview.
    pub fn head(&self, n: usize) -> &[Listing] {
        let listings = self.listings();
        &listings[..n.min(listings.len())]
    }

    #[cfg(test)]
    pub fn default_filter(&self) -> ListingFilter {
        ListingFilter::full(&self.bounds)
    }

    pub fn filter(&self, filter: &ListingFilter) -> Vec<FilteredListing<'_>> {
        filter.apply(self.listings())
    }
}
