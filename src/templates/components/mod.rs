use maud::{html, Markup};

pub mod charts;
pub mod error;
pub mod map;
pub mod sliders;
pub mod table;

pub use charts::{price_histogram_chart, scatter_chart};
pub use error::error_page;
pub use map::listings_map;
pub use sliders::filter_sidebar;
pub use table::listings_table;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// A small labelled figure, used for the summary row.
pub fn tile(label: &str, value: &str) -> Markup {
    html! {
        div class="tile" {
            div class="label" { (label) }
            div class="value" { (value) }
        }
    }
}
