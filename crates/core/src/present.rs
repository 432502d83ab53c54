//! Row presentation: turns a hit into the display strings of one table row.
//!
//! Every fallback ("N/A", "No description", empty status date) is decided
//! here once, so the CLI table and the desktop view cannot drift apart.

use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;
use std::fmt;

use crate::types::{Description, Field, Hit};

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_DESCRIPTION: &str = "No description";
pub const ELLIPSIS: &str = "...";
pub const DESCRIPTION_LIMIT: usize = 100;

pub const LOADING_MESSAGE: &str = "Loading trademark data...";
pub const ERROR_HEADING: &str = "Error Loading Data";
pub const RETRY_LABEL: &str = "Try Again";
pub const SEARCH_PLACEHOLDER: &str =
    "Search by Trademark Name, Owner, Law Firm, Attorney, or Status...";
pub const EMPTY_RESULTS_MESSAGE: &str = "No matching results found. Try adjusting your filters.";
pub const COLUMN_HEADERS: [&str; 4] = ["Mark", "Details", "Status", "Class/Description"];

/// Display strings for one result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub id: Option<String>,
    pub mark_name: String,
    pub law_firm: String,
    pub current_owner: String,
    pub registration_number: String,
    pub registration_date: String,
    pub status: String,
    /// Lower-cased status, used as the badge style modifier.
    pub status_class: Option<String>,
    /// `"on <date>"`, or empty without a registration date.
    pub status_date: String,
    pub description: String,
    pub class_codes: Vec<String>,
}

impl RowView {
    /// Row with dates in the local time zone.
    pub fn new(hit: &Hit) -> Self {
        Self::with_timezone(hit, &Local)
    }

    pub fn with_timezone<Tz>(hit: &Hit, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let or_na = |field: Field| hit.field(field).unwrap_or(NOT_AVAILABLE).to_string();
        let date = hit
            .registration_date()
            .and_then(|secs| format_date_in(secs, tz));

        Self {
            id: hit.id.clone(),
            mark_name: or_na(Field::MarkName),
            law_firm: or_na(Field::LawFirm),
            current_owner: or_na(Field::CurrentOwner),
            registration_number: or_na(Field::RegistrationNumber),
            registration_date: date.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            status: or_na(Field::StatusType),
            status_class: hit.field(Field::StatusType).map(str::to_lowercase),
            status_date: date.map(|d| format!("on {d}")).unwrap_or_default(),
            description: describe(hit.description()),
            class_codes: hit
                .class_codes()
                .unwrap_or_default()
                .iter()
                .map(|code| format!("Class {code}"))
                .collect(),
        }
    }

    /// Class tags with position-prefixed keys; codes may repeat.
    pub fn keyed_class_codes(&self) -> Vec<(String, &str)> {
        self.class_codes
            .iter()
            .enumerate()
            .map(|(i, code)| (format!("{i}-{code}"), code.as_str()))
            .collect()
    }
}

/// Rows for a filtered list, local time zone.
pub fn rows(hits: &[Hit]) -> Vec<RowView> {
    hits.iter().map(RowView::new).collect()
}

/// Rows paired with list keys that stay unique among siblings even when
/// two hits share an id.
pub fn keyed_rows(hits: &[Hit]) -> Vec<(String, RowView)> {
    rows(hits)
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let key = match &row.id {
                Some(id) => format!("{i}-{id}"),
                None => format!("{i}"),
            };
            (key, row)
        })
        .collect()
}

/// Short date (`M/D/YYYY`) for unix `seconds` in `tz`.
pub fn format_date_in<Tz>(seconds: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let millis = seconds.checked_mul(1000)?;
    let utc = DateTime::from_timestamp_millis(millis)?;
    Some(utc.with_timezone(tz).format("%-m/%-d/%Y").to_string())
}

/// First description entry (or the bare string), cut to the limit, always
/// followed by an ellipsis.
pub fn describe(description: Option<&Description>) -> String {
    match description {
        Some(Description::Many(items)) => {
            truncate_with_ellipsis(items.first().map(String::as_str).unwrap_or(""))
        }
        Some(Description::One(text)) => truncate_with_ellipsis(text),
        None => NO_DESCRIPTION.to_string(),
    }
}

/// Keep at most [`DESCRIPTION_LIMIT`] characters and append the ellipsis,
/// even when nothing was cut.
pub fn truncate_with_ellipsis(text: &str) -> String {
    let mut out: String = text.chars().take(DESCRIPTION_LIMIT).collect();
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Source;
    use chrono::{FixedOffset, Utc};

    fn hit_with(source: Source) -> Hit {
        Hit { id: Some("id-1".into()), source: Some(source) }
    }

    #[test]
    fn registration_date_is_seconds() {
        // 1609459200 s == 1609459200000 ms == 2021-01-01T00:00:00Z
        assert_eq!(format_date_in(1609459200, &Utc).as_deref(), Some("1/1/2021"));
        let ms_reference = DateTime::from_timestamp_millis(1609459200000).unwrap();
        assert_eq!(
            format_date_in(1609459200, &Utc).unwrap(),
            ms_reference.format("%-m/%-d/%Y").to_string()
        );
    }

    #[test]
    fn date_follows_time_zone() {
        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(format_date_in(1609459200, &new_york).as_deref(), Some("12/31/2020"));
    }

    #[test]
    fn out_of_range_dates_are_unavailable() {
        assert_eq!(format_date_in(i64::MAX, &Utc), None);
    }

    #[test]
    fn short_description_still_gets_ellipsis() {
        let d = Description::Many(vec!["A very short text".into()]);
        assert_eq!(describe(Some(&d)), "A very short text...");
    }

    #[test]
    fn description_fallbacks() {
        assert_eq!(describe(Some(&Description::Many(vec![]))), "...");
        assert_eq!(describe(None), "No description");
        assert_eq!(describe(Some(&Description::One("Bare".into()))), "Bare...");
    }

    #[test]
    fn long_description_cut_at_limit() {
        let long = "é".repeat(150);
        let out = truncate_with_ellipsis(&long);
        assert_eq!(out.chars().count(), DESCRIPTION_LIMIT + ELLIPSIS.len());
        assert!(out.ends_with("é..."));
    }

    #[test]
    fn full_row() {
        let hit = hit_with(Source {
            mark_name: Some("CHECKMATE".into()),
            current_owner: Some("Acme Corp".into()),
            law_firm: Some("Smith LLP".into()),
            status_type: Some("Registered".into()),
            registration_number: Some("6123456".into()),
            registration_date: Some(1609459200),
            mark_description_description: Some(Description::Many(vec!["Software".into()])),
            class_codes: Some(vec!["009".into(), "042".into()]),
            ..Default::default()
        });
        let row = RowView::with_timezone(&hit, &Utc);

        assert_eq!(row.mark_name, "CHECKMATE");
        assert_eq!(row.law_firm, "Smith LLP");
        assert_eq!(row.current_owner, "Acme Corp");
        assert_eq!(row.registration_number, "6123456");
        assert_eq!(row.registration_date, "1/1/2021");
        assert_eq!(row.status, "Registered");
        assert_eq!(row.status_class.as_deref(), Some("registered"));
        assert_eq!(row.status_date, "on 1/1/2021");
        assert_eq!(row.description, "Software...");
        assert_eq!(row.class_codes, vec!["Class 009", "Class 042"]);
    }

    #[test]
    fn fixed_ui_strings() {
        assert_eq!(LOADING_MESSAGE, "Loading trademark data...");
        assert_eq!(ERROR_HEADING, "Error Loading Data");
        assert_eq!(RETRY_LABEL, "Try Again");
        assert_eq!(
            EMPTY_RESULTS_MESSAGE,
            "No matching results found. Try adjusting your filters."
        );
    }

    #[test]
    fn duplicate_ids_and_codes_get_distinct_keys() {
        let dup = hit_with(Source {
            class_codes: Some(vec!["009".into(), "009".into()]),
            ..Default::default()
        });
        let keyed = keyed_rows(&[dup.clone(), dup, Hit::default()]);
        let keys: Vec<&str> = keyed.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["0-id-1", "1-id-1", "2"]);

        let row = &keyed[0].1;
        assert_eq!(row.class_codes, vec!["Class 009", "Class 009"]);
        let code_keys: Vec<String> = row.keyed_class_codes().into_iter().map(|(k, _)| k).collect();
        assert_eq!(code_keys, vec!["0-Class 009", "1-Class 009"]);
    }

    #[test]
    fn empty_row_falls_back_everywhere() {
        let hit = Hit::default();
        let row = RowView::with_timezone(&hit, &Utc);

        assert_eq!(row.mark_name, NOT_AVAILABLE);
        assert_eq!(row.law_firm, NOT_AVAILABLE);
        assert_eq!(row.current_owner, NOT_AVAILABLE);
        assert_eq!(row.registration_number, NOT_AVAILABLE);
        assert_eq!(row.registration_date, NOT_AVAILABLE);
        assert_eq!(row.status, NOT_AVAILABLE);
        assert_eq!(row.status_class, None);
        assert_eq!(row.status_date, "");
        assert_eq!(row.description, NO_DESCRIPTION);
        assert!(row.class_codes.is_empty());
    }
}
