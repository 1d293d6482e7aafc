// src/domain/filter.rs

use crate::domain::listing::{FilteredListing, Listing};
use crate::domain::stats::DatasetBounds;

/// A closed interval `[min, max]`. Both ends are inclusive, so a
/// degenerate range (`min == max`) still matches that single value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The four independent range predicates the sidebar controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListingFilter {
    pub price: NumericRange,
    pub bedrooms: NumericRange,
    pub bathrooms: NumericRange,
    pub square_feet: NumericRange,
}

impl ListingFilter {
    /// The unfiltered state: every range spans the observed min/max.
    pub fn full(bounds: &DatasetBounds) -> Self {
        Self {
            price: bounds.price,
            bedrooms: bounds.bedrooms,
            bathrooms: bounds.bathrooms,
            square_feet: bounds.square_feet,
        }
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        self.price.contains(listing.price)
            && self.bedrooms.contains(f64::from(listing.bedrooms))
            && self.bathrooms.contains(listing.bathrooms)
            && self.square_feet.contains(listing.square_feet)
    }

    /// Reduces `listings` to the matching subset and attaches the derived
    /// price bin and marker size to each survivor. Input order is kept.
    pub fn apply<'a>(&self, listings: &'a [Listing]) -> Vec<FilteredListing<'a>> {
        listings
            .iter()
            .filter(|l| self.matches(l))
            .map(FilteredListing::new)
            .collect()
    }

    /// True when no range is narrower than the dataset's own bounds.
    pub fn is_unfiltered(&self, bounds: &DatasetBounds) -> bool {
        let covers = |r: &NumericRange, b: &NumericRange| r.min <= b.min && r.max >= b.max;

        covers(&self.price, &bounds.price)
            && covers(&self.bedrooms, &bounds.bedrooms)
            && covers(&self.bathrooms, &bounds.bathrooms)
            && covers(&self.square_feet, &bounds.square_feet)
    }
}
