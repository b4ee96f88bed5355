// src/domain/vacancy.rs

use serde_json::Value;
use url::Url;

// vacancy.json
//  └── <hotel id>
//       └── <YYYY-MM-DD>
//            └── [ { hotelName?, planName?, url?, available, ... } ]

/// Read-only snapshot of the vacancy document.
///
/// Kept as the raw JSON tree: the document is produced by an external job
/// and any part of it may be missing or of an unexpected type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VacancyTable {
    root: Value,
}

impl VacancyTable {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Plan entries for one hotel on one day, if that cell is an array.
    pub fn entries(&self, hotel_id: &str, ymd: &str) -> Option<&[Value]> {
        self.root
            .get(hotel_id)?
            .get(ymd)?
            .as_array()
            .map(Vec::as_slice)
    }

    pub fn hotel_count(&self) -> usize {
        self.root.as_object().map(|m| m.len()).unwrap_or(0)
    }
}

/// Lenient view of one plan object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry<'a> {
    pub hotel_name: Option<&'a str>,
    pub plan_name: Option<&'a str>,
    pub url: Option<&'a str>,
    pub available: bool,
}

impl<'a> PlanEntry<'a> {
    /// Only JSON `true` counts as available; non-objects read as unavailable.
    pub fn from_value(v: &'a Value) -> Self {
        let text = |key: &str| v.get(key).and_then(Value::as_str).filter(|s| !s.is_empty());

        Self {
            hotel_name: text("hotelName"),
            plan_name: text("planName"),
            url: text("url").filter(|u| is_web_url(u)),
            available: v.get("available").and_then(Value::as_bool) == Some(true),
        }
    }
}

/// Booking links are only followed when they are plain http(s) URLs.
fn is_web_url(raw: &str) -> bool {
    Url::parse(raw)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}
