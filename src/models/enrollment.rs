//! Enrollment records ("Anmeldungen" in the LivingApps app).

use serde::{Deserialize, Serialize};

use super::record::{Record, RecordRef};

pub type Enrollment = Record<EnrollmentFields>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentFields {
    #[serde(default, rename = "bezahlt")]
    pub paid: bool,
    #[serde(default, rename = "kurs", skip_serializing)]
    pub course: Option<RecordRef>,
    #[serde(default, rename = "teilnehmer", skip_serializing)]
    pub participant: Option<RecordRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paid_defaults_to_false() {
        let json = r#"{"record_id": "a1", "fields": {"kurs": "k1"}}"#;
        let e: Enrollment = serde_json::from_str(json).unwrap();
        assert!(!e.fields.paid);
        assert_eq!(e.fields.course.as_ref().and_then(|r| r.record_id()), Some("k1"));
    }
}
