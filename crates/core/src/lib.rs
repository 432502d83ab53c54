//! Trademark results core — everything behind the results table.
//!
//! # Modules
//!
//! - [`types`] — Hit records with lenient field decoding
//! - [`fetch`] — One-shot POST to the search backend
//! - [`filter`] — Free-text, status, and facet filtering
//! - [`store`] — Reducer-style state container driving the view
//! - [`present`] — Row display strings and their fallbacks
//! - [`config`] — `trademarks.toml` loading

pub mod config;
pub mod fetch;
pub mod filter;
pub mod present;
pub mod store;
pub mod types;

pub use config::{load_config, load_config_file, ClientConfig};
pub use fetch::{FetchError, SearchRequest, TrademarkClient};
pub use filter::{FacetKind, FilterState, StatusFilter};
pub use present::RowView;
pub use store::{Action, Store, ViewState};
pub use types::Hit;
