use maud::{html, Markup};

use crate::domain::listing::{format_price, Listing};

/// Renders listings as a scrollable table. Headers are always emitted,
/// so an empty result shows an empty table rather than nothing.
pub fn listings_table<'a, I>(rows: I) -> Markup
where
    I: IntoIterator<Item = &'a Listing>,
{
    html! {
        div class="table-wrap" {
            table {
                thead {
                    tr {
                        th { "Address" }
                        th class="num" { "Price" }
                        th class="num" { "Bedrooms" }
                        th class="num" { "Bathrooms" }
                        th class="num" { "SquareFeet" }
                        th class="num" { "Latitude" }
                        th class="num" { "Longitude" }
                    }
                }
                tbody {
                    @for l in rows {
                        tr {
                            td { (l.address) }
                            td class="num" { (format_price(l.price)) }
                            td class="num" { (l.bedrooms) }
                            td class="num" { (l.bathrooms) }
                            td class="num" { (l.square_feet) }
                            td class="num" { (format!("{:.5}", l.latitude)) }
                            td class="num" { (format!("{:.5}", l.longitude)) }
                        }
                    }
                }
            }
        }
    }
}
