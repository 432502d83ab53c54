//! Ready screen — search box, status buttons, facet checkboxes, results table.

mod facets;
mod search_box;
mod status_filter;
mod table;

use dioxus::prelude::*;
use facets::FacetFilters;
use search_box::SearchBox;
use status_filter::StatusFilterBar;
use table::ResultsTable;

#[component]
pub fn TrademarkResults() -> Element {
    rsx! {
        div {
            class: "trademark-results",
            h2 { "Trademarkia" }
            SearchBox {}
            div {
                class: "filter-container",
                StatusFilterBar {}
                FacetFilters {}
            }
            ResultsTable {}
        }
    }
}
