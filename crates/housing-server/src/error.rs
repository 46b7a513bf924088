//! Error types for the housing server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use housing_types::Envelope;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HousingError>;

/// Message shown to clients for bad credentials
pub const LOGIN_FAILED_MESSAGE: &str = "اسم المستخدم أو كلمة المرور غير صحيحة";

/// Message shown to clients for an unknown export format
pub const UNSUPPORTED_FORMAT_MESSAGE: &str = "صيغة التصدير غير مدعومة";

#[derive(Error, Debug)]
pub enum HousingError {
    #[error("{0}")]
    Validation(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("{}", LOGIN_FAILED_MESSAGE)]
    Auth,

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Password hashing error: {0}")]
    Password(String),

    #[error("Report error: {0}")]
    Report(String),
}

impl HousingError {
    pub fn validation(message: impl Into<String>) -> Self {
        HousingError::Validation(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            HousingError::Validation(_) => StatusCode::BAD_REQUEST,
            HousingError::NotFound { .. } => StatusCode::NOT_FOUND,
            HousingError::Auth => StatusCode::UNAUTHORIZED,
            HousingError::Database(_) | HousingError::Password(_) | HousingError::Report(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<sqlx::Error> for HousingError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.is_unique_violation() {
                return HousingError::Validation(format!(
                    "Duplicate value: {}",
                    constraint_target(db.message())
                ));
            }
            if db.is_foreign_key_violation() {
                return HousingError::Validation("Referenced record does not exist".to_string());
            }
            if db.is_check_violation() {
                return HousingError::Validation(format!(
                    "Invalid value: {}",
                    constraint_target(db.message())
                ));
            }
        }
        HousingError::Database(e)
    }
}

impl From<housing_types::UnsupportedFormat> for HousingError {
    fn from(e: housing_types::UnsupportedFormat) -> Self {
        HousingError::Validation(format!("{}: {}", UNSUPPORTED_FORMAT_MESSAGE, e.0))
    }
}

impl From<rust_xlsxwriter::XlsxError> for HousingError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        HousingError::Report(e.to_string())
    }
}

/// SQLite reports constraint failures as "UNIQUE constraint failed: users.username"
fn constraint_target(message: &str) -> &str {
    message
        .split_once("failed: ")
        .map(|(_, target)| target)
        .unwrap_or(message)
}

impl IntoResponse for HousingError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
            "Internal server error".to_string()
        } else {
            tracing::warn!("Request rejected ({}): {}", status.as_u16(), self);
            self.to_string()
        };
        (status, Json(Envelope::failure(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(
            HousingError::validation("missing").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            HousingError::NotFound {
                entity: "resident",
                id: 9
            }
            .status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(HousingError::Auth.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            HousingError::Report("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn unsupported_format_is_a_validation_error() {
        let err: HousingError = "csv".parse::<housing_types::ExportFormat>().unwrap_err().into();
        assert!(matches!(err, HousingError::Validation(_)));
        assert!(err.to_string().starts_with(UNSUPPORTED_FORMAT_MESSAGE));
    }

    #[test]
    fn constraint_target_extracts_column() {
        assert_eq!(
            constraint_target("UNIQUE constraint failed: users.username"),
            "users.username"
        );
        assert_eq!(constraint_target("something else"), "something else");
    }
}
