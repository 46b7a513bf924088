//! Resident types

use crate::patch;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Resident {
    pub id: i64,
    pub name: String,
    pub national_id: Option<String>,
    pub phone: Option<String>,
    pub unit_number: Option<String>,
    pub building_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewResident {
    pub name: String,
    #[serde(default)]
    pub national_id: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub unit_number: Option<String>,
    #[serde(default)]
    pub building_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResidentPatch {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub national_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub unit_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub building_id: Option<Option<i64>>,
}
