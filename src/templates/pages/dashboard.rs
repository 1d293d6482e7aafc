use crate::data::LoadReport;
use crate::domain::filter::ListingFilter;
use crate::domain::listing::{format_price, FilteredListing, Listing, PRICE_BIN_WIDTH};
use crate::domain::stats::{
    describe_correlation, price_histogram, summary, DatasetBounds, Insights,
};
use crate::templates::components::{
    card, filter_sidebar, listings_map, listings_table, price_histogram_chart, scatter_chart, tile,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Rows shown in the data overview, like a dataframe `head()`.
pub const OVERVIEW_ROWS: usize = 5;

/// The filtered table stops here; the exports carry the full result.
pub const TABLE_ROW_LIMIT: usize = 500;

pub struct DashboardVm<'a> {
    pub overview: &'a [Listing],
    pub total_listings: usize,
    pub report: &'a LoadReport,
    pub bounds: &'a DatasetBounds,
    pub filter: ListingFilter,
    /// False when every slider still spans the whole dataset.
    pub is_filtered: bool,
    pub filtered: Vec<FilteredListing<'a>>,
    pub insights: Insights,
    /// Query string reproducing `filter`, appended to export links.
    pub filter_query: String,
}

pub fn dashboard_page(vm: &DashboardVm<'_>) -> Markup {
    desktop_layout(
        "Real Estate Price Analysis Dashboard",
        Some(filter_sidebar(vm.bounds, &vm.filter)),
        html! {
            h1 { "🏠 Real Estate Price Analysis Dashboard" }
            p class="muted" {
                "Explore how price, bedrooms, bathrooms and floor area relate across the listings. "
                "Move the sliders to narrow the set; every chart below follows the filter."
            }

            (overview_card(vm))
            (results_card(vm))

            (card("📈 Price Distribution", price_histogram_chart(&price_histogram(&vm.filtered))))
            (card("📉 SquareFeet vs Price", scatter_chart(&vm.filtered)))
            (card("🗺️ Price vs Property Locations on Map", listings_map(&vm.filtered)))

            (card("✍️ Insight", insight_body(&vm.insights, vm.filtered.len())))
        },
    )
}

fn overview_card(vm: &DashboardVm<'_>) -> Markup {
    card(
        "📊 Data Overview",
        html! {
            p {
                strong { (vm.total_listings) } " listings loaded"
                @if vm.report.dropped() > 0 {
                    " (" (vm.report.rows_read) " rows read; "
                    (vm.report.dropped_missing_coordinates) " without valid coordinates, "
                    (vm.report.dropped_invalid_fields) " with invalid values were dropped)"
                }
                "."
            }
            (listings_table(vm.overview))
        },
    )
}

fn results_card(vm: &DashboardVm<'_>) -> Markup {
    let title = format!("🔎 Filtered Results ({} listings)", vm.filtered.len());
    let stats = summary(&vm.filtered);

    card(
        &title,
        html! {
            @if vm.is_filtered {
                p class="muted" {
                    "Filters active: " (vm.filtered.len()) " of " (vm.total_listings) " listings match. "
                    a href="/" { "Clear" }
                }
            }

            @if let Some(s) = &stats {
                div class="tiles" {
                    (tile("Median price", &format_price(s.median)))
                    (tile("Mean price", &format_price(s.mean)))
                    (tile("Lowest", &format_price(s.min)))
                    (tile("Highest", &format_price(s.max)))
                    @if let Some(ppsf) = s.mean_price_per_sqft {
                        (tile("Mean $/sqft", &format!("${ppsf:.0}")))
                    }
                }
            }

            (listings_table(vm.filtered.iter().take(TABLE_ROW_LIMIT).map(|l| l.listing)))

            @if vm.filtered.len() > TABLE_ROW_LIMIT {
                p class="muted" {
                    "Showing the first " (TABLE_ROW_LIMIT) " of " (vm.filtered.len())
                    " listings. Download the export for the full set."
                }
            }

            p class="actions" {
                a href=(format!("/export.csv?{}", vm.filter_query)) { "Download CSV" }
                a href=(format!("/export.xlsx?{}", vm.filter_query)) { "Download XLSX" }
                a href=(format!("/api/listings?{}", vm.filter_query)) { "JSON" }
            }
        },
    )
}

fn insight_body(insights: &Insights, count: usize) -> Markup {
    html! {
        @if count == 0 {
            p { "No listings match the current filters, so there is nothing to summarize." }
        } @else {
            ul {
                @if let Some(range) = &insights.price_range {
                    li {
                        "Prices in this selection range from "
                        strong { (format_price(range.min)) } " to " strong { (format_price(range.max)) } "."
                    }
                }
                @if let Some(bucket) = &insights.busiest_bucket {
                    li {
                        "Most homes (" (bucket.count) ") fall in the "
                        strong { (format_price(bucket.bin)) " – " (format_price(bucket.bin + PRICE_BIN_WIDTH)) }
                        " price range."
                    }
                }
                li {
                    @match insights.sqft_price_correlation {
                        Some(r) => {
                            "There is " (describe_correlation(r)) " correlation between floor area and price "
                            "(r = " (format!("{r:.2}")) ")."
                        }
                        None => "There is not enough variation to correlate floor area with price.",
                    }
                }
            }
        }
    }
}
