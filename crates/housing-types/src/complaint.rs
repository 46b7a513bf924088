//! Complaint types

use crate::{patch, Priority};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Complaint {
    pub id: i64,
    pub resident_id: Option<i64>,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub status: String,
    /// One of `low`, `medium`, `high`
    pub priority: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComplaint {
    #[serde(default)]
    pub resident_id: Option<i64>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Defaults to `pending`
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Priority,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComplaintPatch {
    #[serde(default, deserialize_with = "patch::nullable")]
    pub resident_id: Option<Option<i64>>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub category: Option<Option<String>>,
    pub status: Option<String>,
    pub priority: Option<Priority>,
}
