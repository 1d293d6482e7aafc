// query.rs
//
// Filter state lives in the query string so every slider change is a
// plain GET that recomputes the page from scratch.

use std::collections::HashMap;

use crate::domain::filter::{ListingFilter, NumericRange};
use crate::domain::stats::DatasetBounds;
use crate::errors::ServerError;

/// Hidden field the sidebar form submits. Its presence marks the request
/// as coming from the sliders rather than a hand-written URL.
pub const SOURCE_PARAM: &str = "source";
pub const SIDEBAR_SOURCE: &str = "sidebar";

/// One of the four sliders in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Price,
    Bedrooms,
    Bathrooms,
    SquareFeet,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [
        FilterField::Price,
        FilterField::Bedrooms,
        FilterField::Bathrooms,
        FilterField::SquareFeet,
    ];

    /// Query-string prefix; the params are `<key>_min` and `<key>_max`.
    pub fn key(self) -> &'static str {
        match self {
            FilterField::Price => "price",
            FilterField::Bedrooms => "beds",
            FilterField::Bathrooms => "baths",
            FilterField::SquareFeet => "sqft",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterField::Price => "Price Range",
            FilterField::Bedrooms => "Bedrooms",
            FilterField::Bathrooms => "Bathrooms",
            FilterField::SquareFeet => "SquareFeet Range",
        }
    }

    pub fn step(self) -> f64 {
        match self {
            FilterField::Price => 10_000.0,
            FilterField::Bedrooms | FilterField::Bathrooms => 1.0,
            FilterField::SquareFeet => 100.0,
        }
    }

    pub fn range(self, filter: &ListingFilter) -> NumericRange {
        match self {
            FilterField::Price => filter.price,
            FilterField::Bedrooms => filter.bedrooms,
            FilterField::Bathrooms => filter.bathrooms,
            FilterField::SquareFeet => filter.square_feet,
        }
    }

    pub fn bounds(self, bounds: &DatasetBounds) -> NumericRange {
        match self {
            FilterField::Price => bounds.price,
            FilterField::Bedrooms => bounds.bedrooms,
            FilterField::Bathrooms => bounds.bathrooms,
            FilterField::SquareFeet => bounds.square_feet,
        }
    }

    fn range_mut(self, filter: &mut ListingFilter) -> &mut NumericRange {
        match self {
            FilterField::Price => &mut filter.price,
            FilterField::Bedrooms => &mut filter.bedrooms,
            FilterField::Bathrooms => &mut filter.bathrooms,
            FilterField::SquareFeet => &mut filter.square_feet,
        }
    }

    pub fn min_param(self) -> String {
        format!("{}_min", self.key())
    }

    pub fn max_param(self) -> String {
        format!("{}_max", self.key())
    }
}

/// Decodes a raw query string (`a=1&b=2`) into a map. Later keys win.
pub fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    query
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}

/// Builds the filter from query params. A missing or empty bound falls
/// back to the dataset's own bound for that field.
///
/// `min > max` is rejected, except for a sidebar submission where the
/// crossed thumbs are swapped back into order.
pub fn parse_filter(
    params: &HashMap<String, String>,
    bounds: &DatasetBounds,
) -> Result<ListingFilter, ServerError> {
    let mut filter = ListingFilter::full(bounds);
    let from_sidebar = params.get(SOURCE_PARAM).map(String::as_str) == Some(SIDEBAR_SOURCE);

    for field in FilterField::ALL {
        let default = field.bounds(bounds);
        let mut min = parse_bound(params, &field.min_param())?.unwrap_or(default.min);
        let mut max = parse_bound(params, &field.max_param())?.unwrap_or(default.max);

        if min > max && from_sidebar {
            std::mem::swap(&mut min, &mut max);
        } else if min > max {
            return Err(ServerError::BadRequest(format!(
                "{} minimum ({min}) is greater than its maximum ({max})",
                field.label()
            )));
        }

        *field.range_mut(&mut filter) = NumericRange::new(min, max);
    }

    Ok(filter)
}

fn parse_bound(params: &HashMap<String, String>, name: &str) -> Result<Option<f64>, ServerError> {
    let Some(raw) = params.get(name).map(|s| s.trim()).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or_else(|| ServerError::BadRequest(format!("'{name}' must be a number, got '{raw}'")))
}

/// Encodes the filter back into a query string, for export links.
pub fn filter_query_string(filter: &ListingFilter) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for field in FilterField::ALL {
        let range = field.range(filter);
        serializer.append_pair(&field.min_param(), &range.min.to_string());
        serializer.append_pair(&field.max_param(), &range.max.to_string());
    }
    serializer.finish()
}
