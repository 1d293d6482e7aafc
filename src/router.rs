use crate::data::Dataset;
use crate::domain::filter::ListingFilter;
use crate::domain::listing::FilteredListing;
use crate::domain::stats::insights;
use crate::errors::ServerError;
use crate::query::{filter_query_string, parse_filter, parse_query};
use crate::responses::{html_response, json_response, text_response, ResultResp};
use crate::spreadsheets::{export_listings_csv, export_listings_xlsx};
use crate::templates::pages::dashboard::OVERVIEW_ROWS;
use crate::templates::pages::{dashboard_page, DashboardVm};
use astra::Request;
use serde::Serialize;
use tracing::debug;

pub fn handle(req: Request, dataset: &Dataset) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    debug!("{method} {}", req.uri());

    match (method, path) {
        ("GET", "/") => dashboard(&req, dataset),
        ("GET", "/api/listings") => listings_json(&req, dataset),
        ("GET", "/export.csv") => {
            let (_, filtered) = filtered_view(&req, dataset)?;
            export_listings_csv(&filtered, "filtered_listings.csv")
        }
        ("GET", "/export.xlsx") => {
            let (_, filtered) = filtered_view(&req, dataset)?;
            export_listings_xlsx(&filtered, "filtered_listings.xlsx")
        }
        ("GET", "/health") => text_response(200, "ok"),
        _ => Err(ServerError::NotFound),
    }
}

/// Parses the filter from the request and applies it. Shared by every
/// route that shows or exports the filtered view.
fn filtered_view<'a>(
    req: &Request,
    dataset: &'a Dataset,
) -> Result<(ListingFilter, Vec<FilteredListing<'a>>), ServerError> {
    let params = parse_query(req.uri().query());
    let filter = parse_filter(&params, dataset.bounds())?;
    let filtered = dataset.filter(&filter);

    debug!(
        matched = filtered.len(),
        total = dataset.len(),
        "Applied listing filter"
    );

    Ok((filter, filtered))
}

fn dashboard(req: &Request, dataset: &Dataset) -> ResultResp {
    let (filter, filtered) = filtered_view(req, dataset)?;

    let vm = DashboardVm {
        overview: dataset.head(OVERVIEW_ROWS),
        total_listings: dataset.len(),
        report: dataset.report(),
        bounds: dataset.bounds(),
        filter,
        is_filtered: !filter.is_unfiltered(dataset.bounds()),
        insights: insights(&filtered),
        filter_query: filter_query_string(&filter),
        filtered,
    };

    html_response(dashboard_page(&vm))
}

#[derive(Serialize)]
struct ListingsPayload<'a> {
    count: usize,
    listings: &'a [FilteredListing<'a>],
}

fn listings_json(req: &Request, dataset: &Dataset) -> ResultResp {
    let (_, filtered) = filtered_view(req, dataset)?;

    json_response(&ListingsPayload {
        count: filtered.len(),
        listings: &filtered,
    })
}
