//! Housing Management Server
//!
//! CRUD HTTP API over buildings, residents, parking, violations, complaints
//! and traffic accident reports, with spreadsheet and PDF export.
//!
//! Uses SQLite (embedded) for persistence.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod report;
pub mod repository;
pub mod services;
pub mod storage;
pub mod telemetry;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use report::Reports;
use repository::{Accidents, Buildings, Complaints, ParkingSpaces, Residents, Users, Violations};
use storage::Database;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub reports: Arc<Reports>,
}

impl AppState {
    pub fn new(db: Arc<Database>, reports: Reports) -> Self {
        Self {
            db,
            reports: Arc::new(reports),
        }
    }
}

/// Full HTTP surface with CORS and request tracing
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        .merge(api_routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/login", post(handlers::auth::login))
        .route("/api/stats", get(handlers::stats::stats))
        .merge(handlers::crud::routes::<Users>())
        .merge(handlers::crud::routes::<Buildings>())
        .merge(handlers::crud::routes::<Residents>())
        .merge(handlers::crud::routes::<ParkingSpaces>())
        .merge(handlers::crud::routes::<Violations>())
        .merge(handlers::crud::routes::<Complaints>())
        .merge(handlers::crud::routes::<Accidents>())
}
