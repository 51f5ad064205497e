//! Room records ("Raeume" in the LivingApps app).

use serde::{Deserialize, Serialize};

use super::record::Record;

pub type Room = Record<RoomFields>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomFields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "kapazitaet")]
    pub capacity: Option<i64>,
}
