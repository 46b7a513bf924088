//! Violation types

use crate::{datetime, patch};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Violation {
    pub id: i64,
    pub resident_id: Option<i64>,
    pub violation_type: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub status: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewViolation {
    #[serde(default)]
    pub resident_id: Option<i64>,
    pub violation_type: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Defaults to the time of creation
    #[serde(default, deserialize_with = "datetime::lenient_option")]
    pub date: Option<DateTime<Utc>>,
    /// Defaults to `open`
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub amount: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViolationPatch {
    #[serde(default, deserialize_with = "patch::nullable")]
    pub resident_id: Option<Option<i64>>,
    pub violation_type: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "datetime::lenient_option")]
    pub date: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub amount: Option<f64>,
}
