//! Free-text search input. Every keystroke refilters; no debounce.

use dioxus::prelude::*;
use trademarks_core::present::SEARCH_PLACEHOLDER;
use trademarks_core::Action;

use crate::state::*;

#[component]
pub fn SearchBox() -> Element {
    let store = STORE.read();
    let term = &store.filters().search_term;

    rsx! {
        div {
            class: "search-container",
            input {
                class: "search-input",
                r#type: "text",
                placeholder: SEARCH_PLACEHOLDER,
                value: "{term}",
                autofocus: true,
                oninput: move |e: Event<FormData>| {
                    dispatch(Action::SetSearch(e.value()));
                },
            }
        }
    }
}
