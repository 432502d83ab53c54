//! Results table — one row per filtered hit, or a single empty-result row.

use dioxus::prelude::*;
use trademarks_core::present::{keyed_rows, RowView, COLUMN_HEADERS, EMPTY_RESULTS_MESSAGE};

use crate::state::*;

static MARK_PLACEHOLDER: Asset = asset!("/assets/images/mark-placeholder.svg");

#[component]
pub fn ResultsTable() -> Element {
    let rows = keyed_rows(STORE.read().filtered_hits());

    rsx! {
        div {
            class: "table-container",
            table {
                thead {
                    tr {
                        for header in COLUMN_HEADERS {
                            th { key: "{header}", "{header}" }
                        }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td {
                                colspan: "4",
                                class: "no-results",
                                "{EMPTY_RESULTS_MESSAGE}"
                            }
                        }
                    }
                    for (key, row) in rows {
                        ResultRow { key: "{key}", row }
                    }
                }
            }
        }
    }
}

#[component]
fn ResultRow(row: RowView) -> Element {
    let badge_class = match &row.status_class {
        Some(modifier) => format!("status-badge {modifier}"),
        None => "status-badge".to_string(),
    };

    rsx! {
        tr {
            td {
                img { src: MARK_PLACEHOLDER, alt: "Trademark", class: "trademark-image" }
                div { class: "mark-name", "{row.mark_name}" }
            }
            td {
                for detail in [&row.law_firm, &row.current_owner, &row.registration_number, &row.registration_date] {
                    div {
                        class: "detail-item",
                        span { class: "detail-label" }
                        "{detail}"
                    }
                }
            }
            td {
                div {
                    class: "status-container",
                    span { class: "{badge_class}", "{row.status}" }
                    span { class: "status-date", "{row.status_date}" }
                }
            }
            td {
                div { class: "description", "{row.description}" }
                div {
                    class: "class-codes",
                    for (key, code) in row.keyed_class_codes() {
                        span { key: "{key}", class: "class-code", "{code}" }
                    }
                }
            }
        }
    }
}
