//! LivingApps record envelope and relation-field normalization.

use serde::{Deserialize, Serialize};

/// One record as returned by the LivingApps API: an opaque id plus the
/// app-specific field payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record<F> {
    pub record_id: String,
    pub fields: F,
}

/// A relation field's raw value. The API returns either a bare record id
/// or a wrapped object carrying the id under `record_id` (older app
/// versions used `id`); anything else resolves to no id.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecordRef {
    Id(String),
    Wrapped(WrappedRef),
    Other(serde_json::Value),
}

/// Wrapped relation value.
#[derive(Debug, Clone, Deserialize)]
pub struct WrappedRef {
    #[serde(default, alias = "id")]
    pub record_id: Option<String>,
}

impl RecordRef {
    /// Normalize the relation value to a bare record id, if it carries one.
    /// This is the single resolution point for all reference fields.
    pub fn record_id(&self) -> Option<&str> {
        match self {
            RecordRef::Id(id) => Some(id.as_str()),
            RecordRef::Wrapped(w) => w.record_id.as_deref(),
            RecordRef::Other(_) => None,
        }
    }
}

/// Resolve an optional relation field to a bare record id.
pub fn resolve_reference(field: Option<&RecordRef>) -> Option<&str> {
    field.and_then(RecordRef::record_id)
}

pub(crate) mod lenient_date {
    //! Deserialize LivingApps date fields at day granularity.
    //!
    //! Values arrive as ISO strings, sometimes with a time-of-day suffix.
    //! The time part is truncated; empty, null or unparsable values
    //! degrade to `None` instead of failing the whole record.

    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_day))
    }

    /// Parse the leading `YYYY-MM-DD` of an ISO date or datetime string.
    pub(crate) fn parse_day(raw: &str) -> Option<NaiveDate> {
        let day = raw.trim();
        let day = day.get(..10).unwrap_or(day);
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn bare_id_resolves() {
        let r: RecordRef = serde_json::from_str("\"rec123\"").unwrap();
        assert_eq!(r.record_id(), Some("rec123"));
    }

    #[test]
    fn wrapped_id_resolves() {
        let r: RecordRef = serde_json::from_str(r#"{"record_id": "rec456"}"#).unwrap();
        assert_eq!(r.record_id(), Some("rec456"));
    }

    #[test]
    fn wrapped_id_alias_resolves() {
        let r: RecordRef = serde_json::from_str(r#"{"id": "rec789"}"#).unwrap();
        assert_eq!(r.record_id(), Some("rec789"));
    }

    #[test]
    fn malformed_reference_resolves_to_none() {
        let r: RecordRef = serde_json::from_str("42").unwrap();
        assert_eq!(r.record_id(), None);

        let r: RecordRef = serde_json::from_str(r#"{"label": "dangling"}"#).unwrap();
        assert_eq!(r.record_id(), None);
    }

    #[test]
    fn resolve_reference_handles_absent_field() {
        assert_eq!(resolve_reference(None), None);
        let r = RecordRef::Id("rec1".to_string());
        assert_eq!(resolve_reference(Some(&r)), Some("rec1"));
    }

    #[test]
    fn parse_day_truncates_time() {
        assert_eq!(
            lenient_date::parse_day("2024-01-15T09:30:00"),
            Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        );
        assert_eq!(
            lenient_date::parse_day("2024-01-15"),
            Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        );
    }

    #[test]
    fn parse_day_degrades_on_garbage() {
        assert_eq!(lenient_date::parse_day(""), None);
        assert_eq!(lenient_date::parse_day("not-a-date"), None);
        assert_eq!(lenient_date::parse_day("15.01.2024"), None);
    }
}
