//! Trademark record types as returned by the search backend.
//!
//! Decoding is lenient: a field holding an unexpected JSON type decodes as
//! absent instead of failing the whole record, so one malformed hit never
//! takes down a fetch.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One backend hit: an id plus the nested trademark payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    #[serde(rename = "_id", default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(rename = "_source", default, deserialize_with = "lenient_source")]
    pub source: Option<Source>,
}

/// The `_source` payload of a hit. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default, deserialize_with = "lenient_text")]
    pub mark_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub current_owner: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub law_firm: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub attorney_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub status_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub registration_number: Option<String>,
    /// Unix seconds.
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub registration_date: Option<i64>,
    #[serde(default, deserialize_with = "lenient_description")]
    pub mark_description_description: Option<Description>,
    #[serde(default, deserialize_with = "lenient_codes")]
    pub class_codes: Option<Vec<String>>,
}

/// Goods/services description: the backend sends either a list or a bare string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Many(Vec<String>),
    One(String),
}

/// Text fields of a hit addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    MarkName,
    CurrentOwner,
    LawFirm,
    AttorneyName,
    StatusType,
    RegistrationNumber,
}

/// Fields the free-text search looks at.
pub const SEARCHABLE_FIELDS: [Field; 5] = [
    Field::MarkName,
    Field::CurrentOwner,
    Field::LawFirm,
    Field::AttorneyName,
    Field::StatusType,
];

impl Hit {
    /// Text value of `field`, or `None` when the source, the field, or its
    /// content is missing. Empty strings count as missing.
    pub fn field(&self, field: Field) -> Option<&str> {
        let source = self.source.as_ref()?;
        let value = match field {
            Field::MarkName => &source.mark_name,
            Field::CurrentOwner => &source.current_owner,
            Field::LawFirm => &source.law_firm,
            Field::AttorneyName => &source.attorney_name,
            Field::StatusType => &source.status_type,
            Field::RegistrationNumber => &source.registration_number,
        };
        value.as_deref().filter(|s| !s.is_empty())
    }

    /// Registration date in unix seconds. Zero is treated as missing.
    pub fn registration_date(&self) -> Option<i64> {
        self.source
            .as_ref()?
            .registration_date
            .filter(|secs| *secs != 0)
    }

    pub fn description(&self) -> Option<&Description> {
        self.source.as_ref()?.mark_description_description.as_ref()
    }

    pub fn class_codes(&self) -> Option<&[String]> {
        self.source.as_ref()?.class_codes.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Lenient decoders
// ---------------------------------------------------------------------------

/// Scalar JSON → string. Objects, arrays and null yield `None`.
fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(&value))
}

fn lenient_seconds<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<f64>().ok().map(|f| f as i64),
        _ => None,
    })
}

fn lenient_description<'de, D>(deserializer: D) -> Result<Option<Description>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        // Non-text elements keep their slot so that element 0 stays element 0.
        Value::Array(items) => Some(Description::Many(
            items.iter().map(|v| value_to_text(v).unwrap_or_default()).collect(),
        )),
        Value::Null => None,
        other => value_to_text(&other).map(Description::One),
    })
}

fn lenient_codes<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => Some(items.iter().filter_map(value_to_text).collect()),
        _ => None,
    })
}

fn lenient_source<'de, D>(deserializer: D) -> Result<Option<Source>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Object(_) => Ok(Source::deserialize(value).ok()),
        _ => Ok(None),
    }
}
