//! Housing Types - Pure type definitions shared by the server and its clients
//!
//! This crate contains only data types and parsing helpers with no async
//! runtime dependencies. Enable the `sqlx` feature to derive row mapping on
//! the models.

pub mod accident;
pub mod building;
pub mod complaint;
pub mod datetime;
pub mod parking;
pub mod patch;
pub mod resident;
pub mod user;
pub mod violation;

pub use accident::*;
pub use building::*;
pub use complaint::*;
pub use parking::*;
pub use resident::*;
pub use user::*;
pub use violation::*;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Well-known status values. Statuses are stored as free-form strings.
pub mod status {
    pub const AVAILABLE: &str = "available";
    pub const OCCUPIED: &str = "occupied";
    pub const RESERVED: &str = "reserved";
    pub const OPEN: &str = "open";
    pub const CLOSED: &str = "closed";
    pub const PENDING: &str = "pending";
    pub const RESOLVED: &str = "resolved";
    pub const INVESTIGATING: &str = "investigating";
}

/// Complaint priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown priority: {0}")]
pub struct UnknownPriority(pub String);

impl FromStr for Priority {
    type Err = UnknownPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(UnknownPriority(other.to_string())),
        }
    }
}

/// Export artifact format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Excel,
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Pdf => write!(f, "pdf"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported export format: {0}")]
pub struct UnsupportedFormat(pub String);

impl FromStr for ExportFormat {
    type Err = UnsupportedFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "excel" => Ok(ExportFormat::Excel),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(UnsupportedFormat(other.to_string())),
        }
    }
}

/// Dashboard aggregate counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub buildings_count: i64,
    pub residents_count: i64,
    pub parking_count: i64,
    /// Violations with status `open`
    pub violations_count: i64,
    /// Complaints with status `pending`
    pub complaints_count: i64,
    pub accidents_count: i64,
}

/// Uniform response shape for mutations and errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
}

impl Envelope {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Optional filter for list queries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilter {
    pub status: Option<String>,
}

impl ListFilter {
    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_format_accepts_only_excel_and_pdf() {
        assert_eq!("excel".parse::<ExportFormat>(), Ok(ExportFormat::Excel));
        assert_eq!("pdf".parse::<ExportFormat>(), Ok(ExportFormat::Pdf));
        for bad in ["csv", "xlsx", "PDF", ""] {
            assert_eq!(
                bad.parse::<ExportFormat>(),
                Err(UnsupportedFormat(bad.to_string()))
            );
        }
    }

    #[test]
    fn priority_defaults_to_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn priority_rejects_unknown_values_in_json() {
        let parsed: Result<Priority, _> = serde_json::from_str("\"urgent\"");
        assert!(parsed.is_err());
        let parsed: Priority = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(parsed, Priority::Low);
    }

    #[test]
    fn stats_serializes_with_count_keys() {
        let json = serde_json::to_value(Stats::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "buildings_count": 0,
                "residents_count": 0,
                "parking_count": 0,
                "violations_count": 0,
                "complaints_count": 0,
                "accidents_count": 0
            })
        );
    }
}
