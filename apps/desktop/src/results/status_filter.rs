//! Status button group: All, Registered, Pending, Abandoned. Exactly one is
//! marked active.

use dioxus::prelude::*;
use trademarks_core::{Action, StatusFilter};

use crate::state::*;

/// Button group; exactly one button carries the `active` class.
#[component]
pub fn StatusFilterBar() -> Element {
    let current = STORE.read().filters().status;

    rsx! {
        div {
            class: "status-filter",
            h3 { "Filter by Status:" }
            for status in StatusFilter::ALL {
                button {
                    key: "{status}",
                    class: if status == current { "active" } else { "" },
                    onclick: move |_| dispatch(Action::SetStatus(status)),
                    "{status}"
                }
            }
        }
    }
}
