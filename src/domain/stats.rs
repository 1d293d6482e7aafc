// src/domain/stats.rs

use std::collections::BTreeMap;

use crate::domain::filter::NumericRange;
use crate::domain::listing::{FilteredListing, Listing};

/// Observed min/max of every filterable field. These become the
/// default slider positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetBounds {
    pub price: NumericRange,
    pub bedrooms: NumericRange,
    pub bathrooms: NumericRange,
    pub square_feet: NumericRange,
}

impl DatasetBounds {
    /// Returns `None` for an empty slice, since there is nothing to bound.
    pub fn from_listings(listings: &[Listing]) -> Option<Self> {
        let first = listings.first()?;

        let seed = |v: f64| NumericRange::new(v, v);
        let widen = |r: &mut NumericRange, v: f64| {
            r.min = r.min.min(v);
            r.max = r.max.max(v);
        };

        let mut bounds = DatasetBounds {
            price: seed(first.price),
            bedrooms: seed(f64::from(first.bedrooms)),
            bathrooms: seed(first.bathrooms),
            square_feet: seed(first.square_feet),
        };

        for l in &listings[1..] {
            widen(&mut bounds.price, l.price);
            widen(&mut bounds.bedrooms, f64::from(l.bedrooms));
            widen(&mut bounds.bathrooms, l.bathrooms);
            widen(&mut bounds.square_feet, l.square_feet);
        }

        Some(bounds)
    }
}

/// One histogram bar: listings whose price bin equals `bin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBucket {
    pub bin: f64,
    pub count: usize,
}

/// Counts listings per price bin, lowest bin first. Bins with no
/// listings are left out, matching a `count()` aggregation.
pub fn price_histogram(listings: &[FilteredListing<'_>]) -> Vec<PriceBucket> {
    // Bins are whole multiples of 100k, so the integer key is exact.
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for l in listings {
        *counts.entry(l.price_bin as i64).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(bin, count)| PriceBucket {
            bin: bin as f64,
            count,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Mean of price / square feet over listings with a positive area.
    pub mean_price_per_sqft: Option<f64>,
}

/// Summary figures for the filtered result. `None` when it is empty.
pub fn summary(listings: &[FilteredListing<'_>]) -> Option<PriceSummary> {
    if listings.is_empty() {
        return None;
    }

    let count = listings.len();
    let mut prices: Vec<f64> = listings.iter().map(|l| l.listing.price).collect();
    prices.sort_by(|a, b| a.total_cmp(b));

    let sum: f64 = prices.iter().sum();
    let mean = sum / count as f64;
    let median = if count % 2 == 0 {
        (prices[count / 2 - 1] + prices[count / 2]) / 2.0
    } else {
        prices[count / 2]
    };

    let per_sqft: Vec<f64> = listings
        .iter()
        .filter(|l| l.listing.square_feet > 0.0)
        .map(|l| l.listing.price / l.listing.square_feet)
        .collect();
    let mean_price_per_sqft = if per_sqft.is_empty() {
        None
    } else {
        Some(per_sqft.iter().sum::<f64>() / per_sqft.len() as f64)
    };

    Some(PriceSummary {
        count,
        mean,
        median,
        min: prices[0],
        max: prices[count - 1],
        mean_price_per_sqft,
    })
}

/// Figures behind the dashboard's "Insight" card.
#[derive(Debug, Clone, PartialEq)]
pub struct Insights {
    pub busiest_bucket: Option<PriceBucket>,
    pub price_range: Option<NumericRange>,
    pub sqft_price_correlation: Option<f64>,
}

pub fn insights(listings: &[FilteredListing<'_>]) -> Insights {
    let histogram = price_histogram(listings);

    // max_by_key keeps the last maximum, so walk in reverse to prefer the lower bin on ties
    let busiest_bucket = histogram.iter().rev().max_by_key(|b| b.count).copied();

    let price_range = summary(listings).map(|s| NumericRange::new(s.min, s.max));

    let xs: Vec<f64> = listings.iter().map(|l| l.listing.square_feet).collect();
    let ys: Vec<f64> = listings.iter().map(|l| l.listing.price).collect();

    Insights {
        busiest_bucket,
        price_range,
        sqft_price_correlation: pearson(&xs, &ys),
    }
}

/// Pearson correlation coefficient. `None` with fewer than two points
/// or when either series has zero variance.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return None;
    }

    let mean_x = xs[..n].iter().sum::<f64>() / n as f64;
    let mean_y = ys[..n].iter().sum::<f64>() / n as f64;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in xs[..n].iter().zip(&ys[..n]) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}

/// Rough wording for a correlation coefficient, used in the insight text.
pub fn describe_correlation(r: f64) -> &'static str {
    match r.abs() {
        a if a < 0.1 => "almost no",
        a if a < 0.3 => "a weak",
        a if a < 0.7 => "a moderate",
        _ => "a strong",
    }
}
