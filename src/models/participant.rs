//! Participant records ("Teilnehmer" in the LivingApps app). Only the
//! headline count is derived from these.

use serde::{Deserialize, Serialize};

use super::record::Record;

pub type Participant = Record<ParticipantFields>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantFields {
    #[serde(default)]
    pub name: Option<String>,
}
