//! Owner / law firm / attorney checkbox groups. Options come from the raw
//! hits, so checking a box never makes other options disappear.

use dioxus::prelude::*;
use trademarks_core::{Action, FacetKind};

use crate::state::*;

#[component]
pub fn FacetFilters() -> Element {
    rsx! {
        div {
            class: "checkbox-filters",
            for kind in FacetKind::ALL {
                FacetGroup { key: "{kind:?}", kind }
            }
        }
    }
}

#[component]
fn FacetGroup(kind: FacetKind) -> Element {
    let store = STORE.read();
    let options = store.facet_options(kind);
    let filters = store.filters();
    let title = kind.title();

    rsx! {
        div {
            class: "filter-group",
            h3 { "Filter by {title}" }
            for option in options {
                label {
                    key: "{option}",
                    input {
                        r#type: "checkbox",
                        checked: filters.is_selected(kind, &option),
                        onchange: {
                            let value = option.clone();
                            move |_| dispatch(Action::ToggleFacet(kind, value.clone()))
                        },
                    }
                    "{option}"
                }
            }
        }
    }
}
