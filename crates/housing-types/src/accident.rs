//! Traffic accident report types

use crate::{datetime, patch};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct TrafficAccident {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub location: String,
    pub reporter_name: String,
    pub reporter_phone: String,
    pub involved_parties: Option<String>,
    pub severity: String,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTrafficAccident {
    #[serde(deserialize_with = "datetime::lenient")]
    pub date: DateTime<Utc>,
    pub location: String,
    pub reporter_name: String,
    pub reporter_phone: String,
    #[serde(default)]
    pub involved_parties: Option<String>,
    pub severity: String,
    pub description: String,
    /// Defaults to `investigating`
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrafficAccidentPatch {
    #[serde(default, deserialize_with = "datetime::lenient_option")]
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub reporter_name: Option<String>,
    pub reporter_phone: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub involved_parties: Option<Option<String>>,
    pub severity: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}
