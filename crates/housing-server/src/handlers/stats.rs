//! Dashboard statistics

use crate::error::Result;
use crate::repository::{
    Accidents, Buildings, Complaints, Entity, ParkingSpaces, Repository, Residents, Violations,
};
use crate::storage::Database;
use crate::AppState;
use axum::{extract::State, Json};
use housing_types::{status, ListFilter, Stats};

async fn count<E: Entity>(db: &Database, filter: ListFilter) -> Result<i64> {
    Repository::<E>::new(db).count(&filter).await
}

pub async fn collect(db: &Database) -> Result<Stats> {
    Ok(Stats {
        buildings_count: count::<Buildings>(db, ListFilter::default()).await?,
        residents_count: count::<Residents>(db, ListFilter::default()).await?,
        parking_count: count::<ParkingSpaces>(db, ListFilter::default()).await?,
        violations_count: count::<Violations>(db, ListFilter::status(status::OPEN)).await?,
        complaints_count: count::<Complaints>(db, ListFilter::status(status::PENDING)).await?,
        accidents_count: count::<Accidents>(db, ListFilter::default()).await?,
    })
}

pub async fn stats(State(state): State<AppState>) -> Result<Json<Stats>> {
    Ok(Json(collect(&state.db).await?))
}
