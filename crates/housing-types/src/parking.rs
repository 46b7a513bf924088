//! Parking space types

use crate::patch;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Parking {
    pub id: i64,
    pub parking_number: String,
    pub status: String,
    pub resident_id: Option<i64>,
    pub building_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewParking {
    pub parking_number: String,
    /// Defaults to `available`
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub resident_id: Option<i64>,
    #[serde(default)]
    pub building_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParkingPatch {
    pub parking_number: Option<String>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub resident_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub building_id: Option<Option<i64>>,
}
