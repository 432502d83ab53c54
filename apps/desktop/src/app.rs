//! Root application component — fetch on mount, then one of three screens.

use dioxus::prelude::*;

use trademarks_core::present::{ERROR_HEADING, LOADING_MESSAGE, RETRY_LABEL};
use trademarks_core::{Action, TrademarkClient, ViewState};

use crate::results::TrademarkResults;
use crate::state::*;

static RESULTS_CSS: Asset = asset!("/assets/styles/results.css");

/// Owned copy of the view state, so filter edits in `Ready` don't re-render
/// the root.
#[derive(Debug, Clone, PartialEq)]
enum Screen {
    Loading,
    Error(String),
    Ready,
}

impl From<ViewState<'_>> for Screen {
    fn from(view: ViewState<'_>) -> Self {
        match view {
            ViewState::Loading => Screen::Loading,
            ViewState::Error(message) => Screen::Error(message.to_string()),
            ViewState::Ready => Screen::Ready,
        }
    }
}

#[component]
pub fn App() -> Element {
    // Runs on mount, and again only when the retry button restarts it.
    let mut fetch = use_future(|| async move {
        let config = initial_config();
        let result = match TrademarkClient::new(&config) {
            Ok(client) => client.fetch_hits().await,
            Err(e) => Err(e),
        };
        dispatch(Action::FetchSettled(result));
    });

    let screen = use_memo(|| Screen::from(STORE.read().view()));

    let body = match screen() {
        Screen::Loading => rsx! {
            div {
                class: "loading",
                div { class: "spinner" }
                p { "{LOADING_MESSAGE}" }
            }
        },
        Screen::Error(message) => rsx! {
            div {
                class: "error",
                h3 { "{ERROR_HEADING}" }
                p { "{message}" }
                button {
                    onclick: move |_| retry(&mut fetch),
                    "{RETRY_LABEL}"
                }
            }
        },
        Screen::Ready => rsx! { TrademarkResults {} },
    };

    rsx! {
        document::Stylesheet { href: RESULTS_CSS }
        {body}
    }
}

/// Back to Loading and fetch again. A webview reload would keep the
/// process-wide store in Error, so the desktop build restarts the task.
#[cfg(not(feature = "web"))]
fn retry(fetch: &mut UseFuture) {
    dispatch(Action::Reset);
    fetch.restart();
}

/// Full page reload; the fresh page starts from an empty store.
#[cfg(feature = "web")]
fn retry(_fetch: &mut UseFuture) {
    let _ = document::eval("window.location.reload();");
}
