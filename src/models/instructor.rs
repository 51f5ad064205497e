//! Instructor records ("Dozenten" in the LivingApps app).

use serde::{Deserialize, Serialize};

use super::record::Record;

pub type Instructor = Record<InstructorFields>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructorFields {
    #[serde(default)]
    pub name: Option<String>,
}

impl InstructorFields {
    /// First whitespace-delimited token of the name, used as a chart label.
    pub fn first_name(&self) -> Option<&str> {
        self.name.as_deref().and_then(|n| n.split_whitespace().next())
    }
}
