//! Results state container.
//!
//! All mutation goes through [`Store::dispatch`]; after every action the
//! filtered list is rebuilt from the raw hits with [`recompute`].

use tracing::{debug, warn};

use crate::fetch::FetchError;
use crate::filter::{facet_options, recompute, FacetKind, FilterState, StatusFilter};
use crate::types::Hit;

/// Load progress plus raw and filtered hits.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState {
    pub hits: Vec<Hit>,
    pub filtered_hits: Vec<Hit>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for FetchState {
    fn default() -> Self {
        Self {
            hits: Vec::new(),
            filtered_hits: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

/// One event per user interaction, plus the fetch result.
#[derive(Debug, Clone)]
pub enum Action {
    FetchSettled(Result<Vec<Hit>, FetchError>),
    SetSearch(String),
    SetStatus(StatusFilter),
    ToggleFacet(FacetKind, String),
    /// Drop hits, error and filters; back to loading for a fresh fetch.
    Reset,
}

/// Which of the three mutually exclusive screens to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState<'a> {
    Loading,
    Error(&'a str),
    Ready,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    fetch: FetchState,
    filters: FilterState,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::FetchSettled(result) => {
                if !self.fetch.loading {
                    warn!("Ignoring second fetch result, hits are already loaded");
                    return;
                }
                self.fetch.loading = false;
                match result {
                    Ok(hits) => {
                        debug!(count = hits.len(), "Fetch settled");
                        self.fetch.hits = hits;
                    }
                    Err(e) => {
                        warn!("Fetch failed: {e}");
                        self.fetch.error = Some(e.to_string());
                    }
                }
            }
            Action::SetSearch(term) => self.filters.search_term = term,
            Action::SetStatus(status) => self.filters.status = status,
            Action::ToggleFacet(kind, value) => self.filters.toggle(kind, &value),
            Action::Reset => {
                debug!("Store reset");
                *self = Store::new();
                return;
            }
        }
        self.fetch.filtered_hits = recompute(&self.fetch.hits, &self.filters);
    }

    pub fn view(&self) -> ViewState<'_> {
        if self.fetch.loading {
            ViewState::Loading
        } else if let Some(error) = self.fetch.error.as_deref() {
            ViewState::Error(error)
        } else {
            ViewState::Ready
        }
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn hits(&self) -> &[Hit] {
        &self.fetch.hits
    }

    pub fn filtered_hits(&self) -> &[Hit] {
        &self.fetch.filtered_hits
    }

    /// Checkbox options for a facet, taken from the raw hits.
    pub fn facet_options(&self, kind: FacetKind) -> Vec<String> {
        facet_options(&self.fetch.hits, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::present::{rows, EMPTY_RESULTS_MESSAGE};
    use crate::types::Source;

    fn hit(id: &str, owner: &str, status: &str) -> Hit {
        Hit {
            id: Some(id.into()),
            source: Some(Source {
                mark_name: Some(format!("MARK {id}")),
                current_owner: Some(owner.into()),
                status_type: Some(status.into()),
                ..Default::default()
            }),
        }
    }

    fn loaded(hits: Vec<Hit>) -> Store {
        let mut store = Store::new();
        store.dispatch(Action::FetchSettled(Ok(hits)));
        store
    }

    #[test]
    fn starts_loading() {
        let store = Store::new();
        assert_eq!(store.view(), ViewState::Loading);
        assert!(store.hits().is_empty());
    }

    #[test]
    fn successful_fetch_fills_both_lists() {
        let store = loaded(vec![hit("1", "O1", "Registered"), hit("2", "O2", "Pending")]);
        assert_eq!(store.view(), ViewState::Ready);
        assert_eq!(store.hits().len(), 2);
        assert_eq!(store.filtered_hits(), store.hits());
    }

    #[test]
    fn http_500_shows_error_view() {
        let mut store = Store::new();
        store.dispatch(Action::FetchSettled(Err(FetchError::Status(500))));
        assert_eq!(store.view(), ViewState::Error("HTTP error! status: 500"));
        assert!(!store.fetch_state().loading);
    }

    #[test]
    fn empty_fetch_has_no_facets_and_empty_rows() {
        let store = loaded(vec![]);
        assert_eq!(store.view(), ViewState::Ready);
        for kind in FacetKind::ALL {
            assert!(store.facet_options(kind).is_empty());
        }
        assert!(rows(store.filtered_hits()).is_empty());
        assert_eq!(
            EMPTY_RESULTS_MESSAGE,
            "No matching results found. Try adjusting your filters."
        );
    }

    #[test]
    fn each_action_recomputes() {
        let mut store = loaded(vec![
            hit("1", "O1", "Registered"),
            hit("2", "O2", "Pending"),
            hit("3", "O3", "Registered"),
        ]);

        store.dispatch(Action::SetStatus(StatusFilter::Registered));
        assert_eq!(store.filtered_hits().len(), 2);

        store.dispatch(Action::ToggleFacet(FacetKind::Owner, "O3".into()));
        assert_eq!(store.filtered_hits().len(), 1);

        store.dispatch(Action::SetSearch("mark 1".into()));
        assert!(store.filtered_hits().is_empty());

        store.dispatch(Action::SetSearch(String::new()));
        store.dispatch(Action::ToggleFacet(FacetKind::Owner, "O3".into()));
        store.dispatch(Action::SetStatus(StatusFilter::All));
        assert_eq!(store.filtered_hits(), store.hits());
    }

    #[test]
    fn two_owners_then_clear() {
        let mut store = loaded(vec![
            hit("1", "O1", "Registered"),
            hit("2", "O2", "Pending"),
            hit("3", "O3", "Abandoned"),
        ]);
        store.dispatch(Action::ToggleFacet(FacetKind::Owner, "O1".into()));
        store.dispatch(Action::ToggleFacet(FacetKind::Owner, "O2".into()));
        let ids: Vec<_> = store.filtered_hits().iter().filter_map(|h| h.id.as_deref()).collect();
        assert_eq!(ids, vec!["1", "2"]);

        store.dispatch(Action::ToggleFacet(FacetKind::Owner, "O1".into()));
        store.dispatch(Action::ToggleFacet(FacetKind::Owner, "O2".into()));
        assert_eq!(store.filtered_hits().len(), 3);
    }

    #[test]
    fn facets_come_from_raw_hits() {
        let mut store = loaded(vec![hit("1", "O1", "Registered"), hit("2", "O2", "Pending")]);
        store.dispatch(Action::SetStatus(StatusFilter::Pending));
        assert_eq!(store.facet_options(FacetKind::Owner), vec!["O1", "O2"]);
    }

    #[test]
    fn reset_after_error_accepts_a_new_fetch() {
        let mut store = Store::new();
        store.dispatch(Action::FetchSettled(Err(FetchError::Status(500))));
        store.dispatch(Action::SetSearch("stale".into()));

        store.dispatch(Action::Reset);
        assert_eq!(store.view(), ViewState::Loading);
        assert_eq!(store.filters(), &FilterState::new());

        store.dispatch(Action::FetchSettled(Ok(vec![hit("1", "O1", "Registered")])));
        assert_eq!(store.view(), ViewState::Ready);
        assert_eq!(store.filtered_hits().len(), 1);
    }

    #[test]
    fn second_fetch_result_is_ignored() {
        let mut store = loaded(vec![hit("1", "O1", "Registered")]);
        store.dispatch(Action::FetchSettled(Err(FetchError::Status(503))));
        assert_eq!(store.view(), ViewState::Ready);
        assert_eq!(store.hits().len(), 1);
    }
}
