//! Building types

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Building {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "type"))]
    pub kind: String,
    pub location: String,
    pub units_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBuilding {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    #[serde(default)]
    pub units_count: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildingPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub location: Option<String>,
    pub units_count: Option<i64>,
}
