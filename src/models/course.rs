//! Course records ("Kurse" in the LivingApps app).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::{lenient_date, Record, RecordRef};

pub type Course = Record<CourseFields>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseFields {
    #[serde(default, rename = "titel")]
    pub title: Option<String>,
    #[serde(default, rename = "startdatum", deserialize_with = "lenient_date::deserialize")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, rename = "enddatum", deserialize_with = "lenient_date::deserialize")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, rename = "preis")]
    pub price: Option<f64>,
    #[serde(default, rename = "dozent", skip_serializing)]
    pub instructor: Option<RecordRef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn deserializes_full_record() {
        let json = r#"{
            "record_id": "k1",
            "fields": {
                "titel": "Rust Basics",
                "startdatum": "2024-01-01",
                "enddatum": "2024-01-31T18:00:00",
                "preis": 249.5,
                "dozent": {"record_id": "d1"}
            }
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.record_id, "k1");
        assert_eq!(course.fields.title.as_deref(), Some("Rust Basics"));
        assert_eq!(
            course.fields.start_date,
            Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );
        assert_eq!(
            course.fields.end_date,
            Some(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
        );
        assert_eq!(course.fields.price, Some(249.5));
        assert_eq!(
            course.fields.instructor.as_ref().and_then(|r| r.record_id()),
            Some("d1")
        );
    }

    #[test]
    fn deserializes_sparse_record() {
        let json = r#"{"record_id": "k2", "fields": {"startdatum": null}}"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert!(course.fields.title.is_none());
        assert!(course.fields.start_date.is_none());
        assert!(course.fields.end_date.is_none());
        assert!(course.fields.price.is_none());
        assert!(course.fields.instructor.is_none());
    }
}
