use maud::{html, Markup};

use crate::domain::listing::{format_price, FilteredListing};
use crate::templates::components::charts::{extent, px, LinearScale};

pub const MAP_WIDTH: f64 = 700.0;
pub const MAP_HEIGHT: f64 = 440.0;

const PADDING: f64 = 24.0;
const MIN_RADIUS: f64 = 3.0;
const MAX_RADIUS: f64 = 14.0;

/// Circle radius for a marker, linear in its marker size relative to the
/// largest marker on the map.
pub fn marker_radius(marker_size: f64, largest: f64) -> f64 {
    if largest <= 0.0 {
        return MIN_RADIUS;
    }
    MIN_RADIUS + (marker_size / largest).clamp(0.0, 1.0) * (MAX_RADIUS - MIN_RADIUS)
}

/// Plots listings by latitude/longitude, sized by price.
///
/// Longitudes are shrunk by cos(mid-latitude) so a city-sized area keeps
/// roughly the right aspect ratio without a tile server.
pub fn listings_map(listings: &[FilteredListing<'_>]) -> Markup {
    let lon_extent = extent(listings.iter().map(|l| l.listing.longitude)).unwrap_or((0.0, 0.0));
    let lat_extent = extent(listings.iter().map(|l| l.listing.latitude)).unwrap_or((0.0, 0.0));
    let largest = listings.iter().map(|l| l.marker_size).fold(0.0_f64, f64::max);

    let mid_lat = (lat_extent.0 + lat_extent.1) / 2.0;
    let lon_factor = mid_lat.to_radians().cos().abs().max(0.01);

    let span_x = (lon_extent.1 - lon_extent.0) * lon_factor;
    let span_y = lat_extent.1 - lat_extent.0;
    let inner_w = MAP_WIDTH - 2.0 * PADDING;
    let inner_h = MAP_HEIGHT - 2.0 * PADDING;

    // One scale factor for both axes keeps distances comparable.
    let scale = match (span_x > 0.0, span_y > 0.0) {
        (true, true) => (inner_w / span_x).min(inner_h / span_y),
        (true, false) => inner_w / span_x,
        (false, true) => inner_h / span_y,
        (false, false) => 0.0,
    };
    let half_w = span_x * scale / 2.0;
    let half_h = span_y * scale / 2.0;

    let x = LinearScale::new(
        lon_extent,
        (MAP_WIDTH / 2.0 - half_w, MAP_WIDTH / 2.0 + half_w),
    );
    let y = LinearScale::new(
        lat_extent,
        (MAP_HEIGHT / 2.0 + half_h, MAP_HEIGHT / 2.0 - half_h),
    );

    // Largest first so small markers stay clickable on top.
    let mut ordered: Vec<&FilteredListing<'_>> = listings.iter().collect();
    ordered.sort_by(|a, b| b.marker_size.total_cmp(&a.marker_size));

    html! {
        svg class="chart" xmlns="http://www.w3.org/2000/svg"
            viewBox=(format!("0 0 {MAP_WIDTH} {MAP_HEIGHT}"))
            role="img" aria-label="Property locations"
        {
            rect x="0" y="0" width=(MAP_WIDTH) height=(MAP_HEIGHT) fill="#eef2f7" rx="6" {}

            @for l in ordered {
                circle class="marker"
                    cx=(px(x.map(l.listing.longitude)))
                    cy=(px(y.map(l.listing.latitude)))
                    r=(px(marker_radius(l.marker_size, largest)))
                    fill="#dc2626" fill-opacity="0.45" stroke="#991b1b" stroke-width="0.5"
                {
                    title { (l.listing.address) " | " (format_price(l.listing.price)) }
                }
            }

            @if listings.is_empty() {
                text x=(px(MAP_WIDTH / 2.0)) y=(px(MAP_HEIGHT / 2.0)) text-anchor="middle" fill="#9ca3af" {
                    "No listings match the current filters"
                }
            } @else {
                text x="8" y=(px(MAP_HEIGHT - 8.0)) font-size="11" fill="#6b7280" {
                    (format!("{:.4}, {:.4}", lat_extent.0, lon_extent.0))
                }
                text x=(px(MAP_WIDTH - 8.0)) y="16" font-size="11" fill="#6b7280" text-anchor="end" {
                    (format!("{:.4}, {:.4}", lat_extent.1, lon_extent.1))
                }
            }
        }
    }
}
