//! Client-side filter engine: free-text search, status, and three
//! multi-select facets (owner, law firm, attorney).
//!
//! Filtering is a full recomputation over the raw hit list every time;
//! surviving hits keep their original order.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::types::{Field, Hit, SEARCHABLE_FIELDS};

// ---------------------------------------------------------------------------
// Status filter
// ---------------------------------------------------------------------------

/// Single-select status filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Registered,
    Pending,
    Abandoned,
}

impl StatusFilter {
    /// Button order in the view.
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Registered,
        StatusFilter::Pending,
        StatusFilter::Abandoned,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Registered => "Registered",
            StatusFilter::Pending => "Pending",
            StatusFilter::Abandoned => "Abandoned",
        }
    }

    /// `All` accepts everything; otherwise a case-insensitive equality on the status.
    pub fn matches(self, status: Option<&str>) -> bool {
        match self {
            StatusFilter::All => true,
            _ => status
                .map(|s| s.to_lowercase() == self.label().to_lowercase())
                .unwrap_or(false),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusFilter::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown status '{s}' (expected all, registered, pending or abandoned)")
            })
    }
}

// ---------------------------------------------------------------------------
// Facets
// ---------------------------------------------------------------------------

/// Multi-select facet dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetKind {
    Owner,
    LawFirm,
    Attorney,
}

impl FacetKind {
    pub const ALL: [FacetKind; 3] = [FacetKind::Owner, FacetKind::LawFirm, FacetKind::Attorney];

    /// The hit field this facet selects on.
    pub fn field(self) -> Field {
        match self {
            FacetKind::Owner => Field::CurrentOwner,
            FacetKind::LawFirm => Field::LawFirm,
            FacetKind::Attorney => Field::AttorneyName,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FacetKind::Owner => "Owner",
            FacetKind::LawFirm => "Law Firm",
            FacetKind::Attorney => "Attorney",
        }
    }
}

/// Distinct non-empty values of `kind` across `hits`, in first-occurrence order.
pub fn facet_options(hits: &[Hit], kind: FacetKind) -> Vec<String> {
    let mut seen = HashSet::new();
    hits.iter()
        .filter_map(|hit| hit.field(kind.field()))
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Filter state
// ---------------------------------------------------------------------------

/// Everything the user can set. Selected facet values are kept in toggle order
/// and never repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub status: StatusFilter,
    selected_owners: Vec<String>,
    selected_law_firms: Vec<String>,
    selected_attorneys: Vec<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self, kind: FacetKind) -> &[String] {
        match kind {
            FacetKind::Owner => &self.selected_owners,
            FacetKind::LawFirm => &self.selected_law_firms,
            FacetKind::Attorney => &self.selected_attorneys,
        }
    }

    fn selected_mut(&mut self, kind: FacetKind) -> &mut Vec<String> {
        match kind {
            FacetKind::Owner => &mut self.selected_owners,
            FacetKind::LawFirm => &mut self.selected_law_firms,
            FacetKind::Attorney => &mut self.selected_attorneys,
        }
    }

    pub fn is_selected(&self, kind: FacetKind, value: &str) -> bool {
        self.selected(kind).iter().any(|v| v == value)
    }

    /// Remove `value` from the facet selection if present, otherwise add it.
    pub fn toggle(&mut self, kind: FacetKind, value: &str) {
        let selected = self.selected_mut(kind);
        match selected.iter().position(|v| v == value) {
            Some(idx) => {
                selected.remove(idx);
            }
            None => selected.push(value.to_string()),
        }
    }

    /// True when `hit` passes every active predicate. `term_lower` is the
    /// already lower-cased search term.
    fn matches_with_term(&self, hit: &Hit, term_lower: &str) -> bool {
        matches_text(hit, term_lower)
            && self.status.matches(hit.field(Field::StatusType))
            && FacetKind::ALL
                .into_iter()
                .all(|kind| self.matches_facet(hit, kind))
    }

    fn matches_facet(&self, hit: &Hit, kind: FacetKind) -> bool {
        let selected = self.selected(kind);
        if selected.is_empty() {
            return true;
        }
        match hit.field(kind.field()) {
            Some(value) => selected.iter().any(|v| v == value),
            None => false,
        }
    }
}

/// Case-insensitive substring match against any searchable field.
/// Missing fields behave as the empty string, so an empty term matches all.
fn matches_text(hit: &Hit, term_lower: &str) -> bool {
    SEARCHABLE_FIELDS.iter().any(|&field| {
        hit.field(field)
            .unwrap_or("")
            .to_lowercase()
            .contains(term_lower)
    })
}

/// Recompute the filtered view from scratch.
pub fn recompute(hits: &[Hit], filters: &FilterState) -> Vec<Hit> {
    let term = filters.search_term.to_lowercase();
    hits.iter()
        .filter(|hit| filters.matches_with_term(hit, &term))
        .cloned()
        .collect()
}
