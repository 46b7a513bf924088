//! Generic CRUD and export handlers
//!
//! [`routes`] wires the same five handlers for every [`Reportable`] entity,
//! so adding a table only needs its `Entity` and `Reportable` impls.

use crate::error::Result;
use crate::extractors::{ApiJson, ApiPath};
use crate::report::{Reportable, Table};
use crate::repository::{Entity, Repository};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use housing_types::{Envelope, ExportFormat, ListFilter};
use serde::Serialize;

/// Mutation envelope, with the new id on create
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    #[serde(flatten)]
    envelope: Envelope,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
}

impl MutationResponse {
    fn ok(message: &str) -> Json<Self> {
        Json(Self {
            envelope: Envelope::ok(message),
            id: None,
        })
    }

    fn created(message: &str, id: i64) -> Json<Self> {
        Json(Self {
            envelope: Envelope::ok(message),
            id: Some(id),
        })
    }
}

pub fn routes<E: Reportable>() -> Router<AppState> {
    let collection = format!("/api/{}", E::ROUTE);

    Router::new()
        .route(&collection, get(list::<E>).post(create::<E>))
        .route(
            &format!("{}/:id", collection),
            get(show::<E>).put(update::<E>).delete(destroy::<E>),
        )
        .route(&format!("{}/export/:format", collection), get(export::<E>))
}

pub async fn list<E: Entity>(
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> Result<Json<Vec<E::View>>> {
    let records = Repository::<E>::new(&state.db).list(&filter).await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

pub async fn show<E: Entity>(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<E::View>> {
    let record = Repository::<E>::new(&state.db).get(id).await?;
    Ok(Json(record.into()))
}

pub async fn create<E: Entity>(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<E::Create>,
) -> Result<Json<MutationResponse>> {
    let record = Repository::<E>::new(&state.db).create(input).await?;
    Ok(MutationResponse::created(E::MESSAGES.created, E::id(&record)))
}

pub async fn update<E: Entity>(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(patch): ApiJson<E::Update>,
) -> Result<Json<MutationResponse>> {
    Repository::<E>::new(&state.db).update(id, patch).await?;
    Ok(MutationResponse::ok(E::MESSAGES.updated))
}

pub async fn destroy<E: Entity>(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<MutationResponse>> {
    Repository::<E>::new(&state.db).delete(id).await?;
    Ok(MutationResponse::ok(E::MESSAGES.deleted))
}

pub async fn export<E: Reportable>(
    State(state): State<AppState>,
    ApiPath(format): ApiPath<String>,
) -> Result<Response> {
    let format: ExportFormat = format.parse()?;

    let records = Repository::<E>::new(&state.db)
        .list(&ListFilter::default())
        .await?;
    let views: Vec<E::View> = records.into_iter().map(Into::into).collect();
    let table = Table::from_views::<E>(&views);
    let bytes = state.reports.render(format, &table)?;

    tracing::info!(
        "Exported {} {} records as {}",
        table.rows.len(),
        E::LABEL,
        format
    );

    let disposition = format!(
        "attachment; filename=\"{}\"",
        table.file_name(format.extension())
    );
    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
