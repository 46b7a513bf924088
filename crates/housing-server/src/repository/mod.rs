//! Typed CRUD access to the housing tables
//!
//! Each table is described once by an [`Entity`] implementation. A single
//! generic [`Repository`] turns that description into list/get/create/
//! update/delete queries, and the HTTP layer is generated from the same
//! trait.

mod accidents;
mod buildings;
mod complaints;
mod parking;
mod residents;
mod users;
mod violations;

pub use accidents::Accidents;
pub use buildings::Buildings;
pub use complaints::Complaints;
pub use parking::ParkingSpaces;
pub use residents::Residents;
pub use users::{UserRow, Users};
pub use violations::Violations;

use crate::error::{HousingError, Result};
use crate::storage::Database;
use chrono::{DateTime, Utc};
use housing_types::ListFilter;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteRow};
use sqlx::{FromRow, SqlitePool};
use std::marker::PhantomData;
use std::sync::Arc;

/// Success messages returned in the mutation envelope
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
}

/// Description of one table
pub trait Entity: Send + Sync + 'static {
    /// SQL table name
    const TABLE: &'static str;
    /// Path segment under `/api`
    const ROUTE: &'static str;
    /// Singular name used in logs and errors
    const LABEL: &'static str;
    /// Every column except `id`, in field order
    const COLUMNS: &'static [&'static str];
    const STATUS_COLUMN: Option<&'static str> = None;
    const ORDER_BY: &'static str = "id ASC";
    const MESSAGES: Messages;

    /// Stored row
    type Record: for<'r> FromRow<'r, SqliteRow> + Clone + Send + Sync + Unpin;
    /// Client projection of a row
    type View: Serialize + From<Self::Record> + Send;
    type Create: DeserializeOwned + Send;
    type Update: DeserializeOwned + Send;

    fn id(record: &Self::Record) -> i64;

    /// Column values for a new row, in `COLUMNS` order
    fn build(input: Self::Create, now: DateTime<Utc>) -> Result<Vec<SqlValue>>;

    /// Column assignments for the fields present in `patch`. Columns the
    /// patch leaves out are never written.
    fn changes(patch: Self::Update, now: DateTime<Utc>) -> Result<Changes>;
}

/// Owned value bound to a statement parameter
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Integer(Option<i64>),
    Real(f64),
    Text(Option<String>),
    Timestamp(DateTime<Utc>),
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Integer(Some(v))
    }
}

impl From<Option<i64>> for SqlValue {
    fn from(v: Option<i64>) -> Self {
        SqlValue::Integer(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Real(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(Some(v))
    }
}

impl From<Option<String>> for SqlValue {
    fn from(v: Option<String>) -> Self {
        SqlValue::Text(v)
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(v: DateTime<Utc>) -> Self {
        SqlValue::Timestamp(v)
    }
}

fn bind_all<'q>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    values: Vec<SqlValue>,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    for value in values {
        query = match value {
            SqlValue::Integer(v) => query.bind(v),
            SqlValue::Real(v) => query.bind(v),
            SqlValue::Text(v) => query.bind(v),
            SqlValue::Timestamp(v) => query.bind(v),
        };
    }
    query
}

/// `SET` list of a partial update
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Changes {
    assignments: Vec<(&'static str, SqlValue)>,
}

impl Changes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `column` when the patch carries a value
    pub fn set<V: Into<SqlValue>>(mut self, column: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.assignments.push((column, value.into()));
        }
        self
    }

    /// Like [`Changes::set`], but a supplied value must not be blank
    pub fn set_text(self, column: &'static str, value: Option<String>) -> Result<Self> {
        if let Some(value) = &value {
            require_text(column, value)?;
        }
        Ok(self.set(column, value))
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn columns(&self) -> Vec<&'static str> {
        self.assignments.iter().map(|(column, _)| *column).collect()
    }

    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.assignments
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value)
    }

    fn into_parts(self) -> (Vec<&'static str>, Vec<SqlValue>) {
        self.assignments.into_iter().unzip()
    }
}

/// Reject empty strings in required text fields
pub(crate) fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HousingError::validation(format!("{} is required", field)));
    }
    Ok(())
}

pub(crate) fn require_non_negative_int(field: &str, value: i64) -> Result<()> {
    if value < 0 {
        return Err(HousingError::validation(format!(
            "{} must not be negative",
            field
        )));
    }
    Ok(())
}

pub(crate) fn require_non_negative(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(HousingError::validation(format!(
            "{} must be a non-negative number",
            field
        )));
    }
    Ok(())
}

pub struct Repository<E: Entity> {
    pool: Arc<SqlitePool>,
    _entity: PhantomData<E>,
}

impl<E: Entity> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> Repository<E> {
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool(),
            _entity: PhantomData,
        }
    }

    fn select_sql() -> String {
        format!("SELECT id, {} FROM {}", E::COLUMNS.join(", "), E::TABLE)
    }

    /// `WHERE` clause for a filter, rejecting filters the table can't honour
    fn filter_clause(filter: &ListFilter) -> Result<Option<(String, String)>> {
        match (&filter.status, E::STATUS_COLUMN) {
            (None, _) => Ok(None),
            (Some(status), Some(column)) => {
                Ok(Some((format!(" WHERE {} = ?", column), status.clone())))
            }
            (Some(_), None) => Err(HousingError::validation(format!(
                "{} records have no status",
                E::LABEL
            ))),
        }
    }

    pub async fn list(&self, filter: &ListFilter) -> Result<Vec<E::Record>> {
        let mut sql = Self::select_sql();
        let clause = Self::filter_clause(filter)?;
        if let Some((where_sql, _)) = &clause {
            sql.push_str(where_sql);
        }
        sql.push_str(" ORDER BY ");
        sql.push_str(E::ORDER_BY);

        let mut query = sqlx::query_as::<_, E::Record>(&sql);
        if let Some((_, status)) = clause {
            query = query.bind(status);
        }
        let rows = query.fetch_all(&*self.pool).await?;

        Ok(rows)
    }

    pub async fn count(&self, filter: &ListFilter) -> Result<i64> {
        let mut sql = format!("SELECT COUNT(*) FROM {}", E::TABLE);
        let clause = Self::filter_clause(filter)?;
        if let Some((where_sql, _)) = &clause {
            sql.push_str(where_sql);
        }

        let mut query = sqlx::query_as::<_, (i64,)>(&sql);
        if let Some((_, status)) = clause {
            query = query.bind(status);
        }
        let (count,) = query.fetch_one(&*self.pool).await?;

        Ok(count)
    }

    pub async fn find(&self, id: i64) -> Result<Option<E::Record>> {
        let sql = format!("{} WHERE id = ?1", Self::select_sql());
        let row = sqlx::query_as::<_, E::Record>(&sql)
            .bind(id)
            .fetch_optional(&*self.pool)
            .await?;

        Ok(row)
    }

    pub async fn get(&self, id: i64) -> Result<E::Record> {
        self.find(id).await?.ok_or(HousingError::NotFound {
            entity: E::LABEL,
            id,
        })
    }

    pub async fn create(&self, input: E::Create) -> Result<E::Record> {
        let values = E::build(input, Utc::now())?;
        let placeholders = vec!["?"; E::COLUMNS.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            E::TABLE,
            E::COLUMNS.join(", "),
            placeholders
        );

        let result = bind_all(sqlx::query(&sql), values)
            .execute(&*self.pool)
            .await?;
        let id = result.last_insert_rowid();
        tracing::info!("Created {} {}", E::LABEL, id);

        self.get(id).await
    }

    /// Partial update. Only the columns named by the patch are written, so
    /// concurrent updates of different fields don't overwrite each other.
    pub async fn update(&self, id: i64, patch: E::Update) -> Result<E::Record> {
        let changes = E::changes(patch, Utc::now())?;
        if changes.is_empty() {
            return self.get(id).await;
        }

        let (columns, values) = changes.into_parts();
        let assignments = columns
            .iter()
            .map(|column| format!("{} = ?", column))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("UPDATE {} SET {} WHERE id = ?", E::TABLE, assignments);

        let result = bind_all(sqlx::query(&sql), values)
            .bind(id)
            .execute(&*self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(HousingError::NotFound {
                entity: E::LABEL,
                id,
            });
        }
        tracing::info!("Updated {} {} ({})", E::LABEL, id, columns.join(", "));

        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", E::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(&*self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(HousingError::NotFound {
                entity: E::LABEL,
                id,
            });
        }
        tracing::info!("Deleted {} {}", E::LABEL, id);

        Ok(())
    }
}
