//! Authentication handlers

use crate::error::Result;
use crate::extractors::ApiJson;
use crate::services::AuthService;
use crate::AppState;
use axum::{extract::State, Json};
use housing_types::{LoginRequest, LoginResponse};
use tracing::info;

pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    info!("Login attempt for: {}", req.username);

    let user = AuthService::new(&state.db)
        .login(&req.username, &req.password)
        .await?;

    info!("Login successful for: {} ({})", user.username, user.role);
    Ok(Json(LoginResponse {
        success: true,
        user,
    }))
}
