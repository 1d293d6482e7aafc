//! Inline SVG charts for the dashboard.
//!
//! Everything is rendered server-side; hover text comes from SVG
//! `<title>` elements so no client script is required.

use maud::{html, Markup};

use crate::domain::listing::{format_price, FilteredListing};
use crate::domain::stats::PriceBucket;

pub const CHART_WIDTH: f64 = 700.0;
pub const CHART_HEIGHT: f64 = 320.0;

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 50.0;

/// Maps a data interval onto a pixel interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// A zero-width domain maps everything to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// `n` evenly spaced domain values from start to end inclusive.
    pub fn ticks(&self, n: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if n < 2 || d0 == d1 {
            return vec![d0];
        }
        (0..n)
            .map(|i| d0 + (d1 - d0) * i as f64 / (n - 1) as f64)
            .collect()
    }
}

/// Min/max of `values`, or `None` when empty.
pub fn extent<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Formats a coordinate for an SVG attribute.
pub fn px(v: f64) -> String {
    format!("{v:.1}")
}

fn plot_area() -> (f64, f64, f64, f64) {
    (
        MARGIN_LEFT,
        CHART_WIDTH - MARGIN_RIGHT,
        MARGIN_TOP,
        CHART_HEIGHT - MARGIN_BOTTOM,
    )
}

fn short_price(v: f64) -> String {
    if v.abs() >= 1_000_000.0 {
        format!("${:.1}M", v / 1_000_000.0)
    } else {
        format!("${:.0}k", v / 1_000.0)
    }
}

fn empty_notice() -> Markup {
    html! {
        text
            x=(px(CHART_WIDTH / 2.0))
            y=(px(CHART_HEIGHT / 2.0))
            text-anchor="middle"
            fill="#9ca3af"
        { "No listings match the current filters" }
    }
}

/// Bar chart of listing counts per $100k price bin.
pub fn price_histogram_chart(buckets: &[PriceBucket]) -> Markup {
    let (left, right, top, bottom) = plot_area();
    let max_count = buckets.iter().map(|b| b.count).max().unwrap_or(0);
    let y = LinearScale::new((0.0, max_count.max(1) as f64), (bottom, top));

    let slot = if buckets.is_empty() {
        0.0
    } else {
        (right - left) / buckets.len() as f64
    };
    let bar_width = (slot * 0.8).max(1.0);

    let y_ticks: Vec<usize> = count_ticks(max_count);

    html! {
        svg class="chart" xmlns="http://www.w3.org/2000/svg"
            viewBox=(format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}"))
            role="img" aria-label="Price distribution"
        {
            @for t in y_ticks.iter().copied() {
                line x1=(px(left)) x2=(px(right)) y1=(px(y.map(t as f64))) y2=(px(y.map(t as f64)))
                    stroke="#f3f4f6" {}
                text x=(px(left - 8.0)) y=(px(y.map(t as f64) + 4.0)) text-anchor="end"
                    font-size="11" fill="#6b7280" { (t) }
            }
            line x1=(px(left)) x2=(px(right)) y1=(px(bottom)) y2=(px(bottom)) stroke="#9ca3af" {}

            @for (i, b) in buckets.iter().enumerate() {
                @let x = left + slot * i as f64 + (slot - bar_width) / 2.0;
                @let bar_top = y.map(b.count as f64);
                rect class="bar" x=(px(x)) y=(px(bar_top)) width=(px(bar_width))
                    height=(px(bottom - bar_top)) fill="#4f46e5"
                {
                    title { (format_price(b.bin)) ": " (b.count) " listings" }
                }
                text x=(px(x + bar_width / 2.0)) y=(px(bottom + 16.0)) text-anchor="middle"
                    font-size="11" fill="#374151" { (short_price(b.bin)) }
            }

            text x=(px((left + right) / 2.0)) y=(px(CHART_HEIGHT - 8.0)) text-anchor="middle"
                font-size="12" fill="#374151" { "Price Bin ($100k each)" }
            text x="14" y=(px((top + bottom) / 2.0)) text-anchor="middle" font-size="12" fill="#374151"
                transform=(format!("rotate(-90 14 {})", px((top + bottom) / 2.0)))
            { "Number of Listings" }

            @if buckets.is_empty() {
                (empty_notice())
            }
        }
    }
}

/// Whole-number y ticks from zero to at least `max`, about five of them.
fn count_ticks(max: usize) -> Vec<usize> {
    let step = max.div_ceil(4).max(1);
    (0..=max.max(1)).step_by(step).collect()
}

/// Square feet (x) against price (y), one dot per listing.
pub fn scatter_chart(listings: &[FilteredListing<'_>]) -> Markup {
    let (left, right, top, bottom) = plot_area();

    let x_extent = extent(listings.iter().map(|l| l.listing.square_feet)).unwrap_or((0.0, 0.0));
    let y_extent = extent(listings.iter().map(|l| l.listing.price)).unwrap_or((0.0, 0.0));

    let x = LinearScale::new(x_extent, (left, right));
    let y = LinearScale::new(y_extent, (bottom, top));

    html! {
        svg class="chart" xmlns="http://www.w3.org/2000/svg"
            viewBox=(format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}"))
            role="img" aria-label="SquareFeet vs Price"
        {
            line x1=(px(left)) x2=(px(right)) y1=(px(bottom)) y2=(px(bottom)) stroke="#9ca3af" {}
            line x1=(px(left)) x2=(px(left)) y1=(px(top)) y2=(px(bottom)) stroke="#9ca3af" {}

            @if !listings.is_empty() {
                @for t in x.ticks(5) {
                    text x=(px(x.map(t))) y=(px(bottom + 16.0)) text-anchor="middle"
                        font-size="11" fill="#374151" { (format!("{t:.0}")) }
                }
                @for t in y.ticks(5) {
                    text x=(px(left - 8.0)) y=(px(y.map(t) + 4.0)) text-anchor="end"
                        font-size="11" fill="#374151" { (short_price(t)) }
                }
            }

            @for l in listings {
                circle class="point" cx=(px(x.map(l.listing.square_feet))) cy=(px(y.map(l.listing.price)))
                    r="5" fill="#0ea5e9" fill-opacity="0.6"
                {
                    title {
                        (l.listing.address) " | "
                        (l.listing.square_feet) " sqft | "
                        (format_price(l.listing.price)) " | "
                        (l.listing.bedrooms) " bd / " (l.listing.bathrooms) " ba"
                    }
                }
            }

            text x=(px((left + right) / 2.0)) y=(px(CHART_HEIGHT - 8.0)) text-anchor="middle"
                font-size="12" fill="#374151" { "Area (sqft)" }
            text x="14" y=(px((top + bottom) / 2.0)) text-anchor="middle" font-size="12" fill="#374151"
                transform=(format!("rotate(-90 14 {})", px((top + bottom) / 2.0)))
            { "Price ($)" }

            @if listings.is_empty() {
                (empty_notice())
            }
        }
    }
}
